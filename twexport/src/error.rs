//! All error types for the twexport crate.
//!
//! These are the fatal, run-aborting errors. A string that merely cannot be
//! rewritten is not an [`Error`]; that per-string condition is
//! [`crate::rewrite::Unsupported`] and only skips the one record.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "expected string extraction to generate file \"{}\", but no such file exists",
        .0.display()
    )]
    MissingExtraction(PathBuf),

    #[error("invalid catalog entry for string {string:?}: {message}")]
    InvalidCatalog { string: String, message: String },
}
