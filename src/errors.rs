//! Error types for edge-list ingestion.
//!
//! The core graph operations never return recoverable errors: rejected
//! operations report `false`, unknown nodes yield empty results, and
//! invariant breaks panic. Only the loader, which faces external input,
//! gets a `Result`-based surface.

use thiserror::Error;

/// Errors that can occur while reading an edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure while reading the input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-comment line did not hold two whitespace-separated ids.
    #[error("line {line_no}: expected two node ids, got {line:?}")]
    Malformed { line_no: usize, line: String },

    /// A token failed to parse as an unsigned node id.
    #[error("line {line_no}: invalid node id {token:?}")]
    BadId { line_no: usize, token: String },
}
