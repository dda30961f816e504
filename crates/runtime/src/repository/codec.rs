//! JSON storage codec for whole collections.
//!
//! A collection is one JSON array per file. Reads are total: any anomaly
//! (missing, empty, malformed, wrong shape, I/O failure) degrades to an empty
//! collection plus a [`Diagnostic`]. Writes replace the whole document.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::diagnostic::Diagnostic;
use super::error::{RepositoryError, Result};

/// Items loaded from storage together with the diagnostics raised on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Loaded<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            diagnostics: Vec::new(),
        }
    }

    fn degraded(diagnostic: Diagnostic) -> Self {
        Self {
            items: Vec::new(),
            diagnostics: vec![diagnostic.emit()],
        }
    }

    /// Move the diagnostics into `sink` and return the items.
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> Vec<T> {
        sink.extend(self.diagnostics);
        self.items
    }
}

/// Read the JSON array stored at `path`.
///
/// Never fails: every read anomaly yields an empty list and one diagnostic.
pub fn load_collection(path: &Path) -> Loaded<Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Loaded::degraded(Diagnostic::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Loaded::degraded(Diagnostic::ReadFailed {
                path: path.to_path_buf(),
                detail: e.to_string(),
            });
        }
    };

    let content = content.trim();
    if content.is_empty() {
        return Loaded::degraded(Diagnostic::Empty {
            path: path.to_path_buf(),
        });
    }

    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(records)) => {
            tracing::debug!("Loaded {} records from {}", records.len(), path.display());
            Loaded::new(records)
        }
        Ok(_) => Loaded::degraded(Diagnostic::NotAList {
            path: path.to_path_buf(),
        }),
        Err(e) => Loaded::degraded(Diagnostic::Malformed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

/// Overwrite `path` with `items` as a pretty-printed JSON array.
///
/// Returns a [`Diagnostic::WriteFailed`] instead of an error when the write
/// does not go through; the previous document is left intact in that case.
pub fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Option<Diagnostic> {
    match write_collection(path, items) {
        Ok(()) => {
            tracing::debug!("Saved {} records to {}", items.len(), path.display());
            None
        }
        Err(e) => Some(
            Diagnostic::WriteFailed {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
            .emit(),
        ),
    }
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json =
        serde_json::to_string_pretty(items).map_err(|e| RepositoryError::Json(e.to_string()))?;

    // Write to temp file
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;

    // Atomic rename
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}
