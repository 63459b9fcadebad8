//! Arbo - Flutter ARB localization pipeline
//!
//! Arbo is a CLI tool and library for moving hardcoded UI text out of a
//! Flutter project and into ARB locale files. It extracts user-facing string
//! literals, assigns them stable lowerCamelCase keys, rewrites the source to
//! use `context.l10n` accessors, and keeps every locale table in sync with
//! the keys the code actually references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core pipeline (extract, merge, rewrite, scan, sync)
//! - `translate`: Machine-translation adapter for target locales
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod translate;
pub mod utils;
