mod command_result;

pub mod extract;
pub mod imports;
pub mod init;
pub mod rewrite;
pub mod sync;
pub mod translate;

pub use command_result::*;
