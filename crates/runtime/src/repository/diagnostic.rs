//! Non-fatal diagnostics produced while reading, writing, and reconciling
//! collections.
//!
//! A diagnostic never stops execution. It is logged through `tracing` where it
//! is raised and handed back to the caller so a front end can show it.

use std::path::PathBuf;

use thiserror::Error;

/// How serious a diagnostic is for an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Expected degraded state; data may simply not exist yet.
    Warning,
    /// Something was lost or could not be read.
    Error,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A human-readable, non-fatal report about a degraded outcome.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("'{}' not found; it will be created on save", .path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is empty; assuming an empty collection", .path.display())]
    Empty { path: PathBuf },

    #[error("invalid JSON in '{}': {detail}; assuming an empty collection", .path.display())]
    Malformed { path: PathBuf, detail: String },

    #[error("'{}' does not contain a JSON list; assuming an empty collection", .path.display())]
    NotAList { path: PathBuf },

    #[error("I/O error reading '{}': {detail}; assuming an empty collection", .path.display())]
    ReadFailed { path: PathBuf, detail: String },

    #[error("I/O error writing '{}': {detail}; changes were not saved", .path.display())]
    WriteFailed { path: PathBuf, detail: String },

    #[error("skipped {collection} {id}: {reason}")]
    RecordSkipped {
        collection: &'static str,
        id: String,
        reason: String,
    },

    #[error("hotel '{hotel_id}' is already at maximum availability; stock not adjusted")]
    StockAtMaximum { hotel_id: String },

    #[error("hotel '{hotel_id}' no longer exists; stock could not be adjusted")]
    StockHotelMissing { hotel_id: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::NotFound { .. }
            | Self::Empty { .. }
            | Self::StockAtMaximum { .. }
            | Self::StockHotelMissing { .. } => Severity::Warning,
            Self::Malformed { .. }
            | Self::NotAList { .. }
            | Self::ReadFailed { .. }
            | Self::WriteFailed { .. }
            | Self::RecordSkipped { .. } => Severity::Error,
        }
    }

    /// Log the diagnostic at a level matching its severity and return it.
    pub fn emit(self) -> Self {
        match self.severity() {
            Severity::Warning => tracing::warn!("{}", self),
            Severity::Error => tracing::error!("{}", self),
        }
        self
    }
}
