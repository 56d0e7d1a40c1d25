//! CLI support for json-tree
//!
//! Provides programmatic access to the `jtree` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod command;
mod convert;
mod path;

pub use command::{execute, Command, Options, Output};
pub use convert::value_to_json;
pub use path::{parse_path, select, Segment};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Strict parsing rejected the document
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// Output could not be serialized
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Path pattern failed to compile
    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    /// No input provided
    #[error("No input provided. Use --input, --file or pipe JSON to stdin.")]
    NoInput,

    /// The field path is not well formed
    #[error("Invalid path: '{0}'")]
    InvalidPath(String),

    /// The field path does not lead to a value
    #[error("Field not found: '{0}'")]
    FieldNotFound(String),
}
