//! Hanlift - hardcoded Chinese text extraction for Vue projects
//!
//! Hanlift is a CLI tool and library that finds hardcoded Chinese text in
//! Vue single-file components and JS/TS sources, extracts it for
//! translation-key generation, and rewrites it in-place into vue-i18n
//! `$t(...)` calls.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core content-rewriting engine (comment shield, patterns,
//!   template parsing, segment rewriting, the recursive processor)
//! - `messages`: Primary locale message loading and inversion
//! - `scanner`: Source file discovery

pub mod cli;
pub mod config;
pub mod core;
pub mod messages;
pub mod scanner;
