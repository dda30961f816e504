//! Error types raised by the storage write path.

use thiserror::Error;

/// Failures while persisting a collection.
///
/// These never reach callers of the codec directly; they are converted to a
/// [`Diagnostic`](super::Diagnostic) at the boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
