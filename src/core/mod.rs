//! Core pipeline: extract, merge, rewrite, scan, sync.
//!
//! Stages run strictly in sequence; the only load-bearing orderings are
//! within a table (candidate order for key suffixing, value-length order for
//! rewriting). Per-file work carries no cross-file state and fans out with
//! rayon in the command layer.

pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod merge;
pub mod patterns;
pub mod rewrite;
pub mod scan;
pub mod sync;
pub mod table;

pub use extract::Extractor;
pub use merge::{MergeOutcome, merge_candidates};
pub use rewrite::{ImportDirective, Rewriter, rewrite_file};
pub use scan::UsageScanner;
pub use table::ResourceTable;
