//! Error types for edge parsing and representation output.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors that can occur while converting an edge list.
#[derive(Debug, thiserror::Error)]
pub enum GraphRepError {
    /// Input file does not exist.
    #[error("input file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// I/O error reading the input or writing the output.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error from a reader with no associated path.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// A line split into fewer than three comma-separated fields.
    #[error("line {line}: expected `<source, target, weight>`, found {found} field(s)")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// The weight field is not a valid 32-bit integer.
    #[error("line {line}: invalid weight '{value}': {source}")]
    InvalidWeight {
        /// 1-based line number.
        line: usize,
        /// The offending field, trimmed.
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown output format: '{name}' (expected text or json)")]
    UnknownFormat { name: String },

    #[error("unknown vertex order: '{name}' (expected first-seen or sorted)")]
    UnknownOrder { name: String },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for graph conversion operations.
pub type Result<T> = std::result::Result<T, GraphRepError>;
