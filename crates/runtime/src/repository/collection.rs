//! File-backed repository for one entity collection.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use booking_core::Entity;
use serde_json::Value;

use super::codec::{self, Loaded};
use super::diagnostic::Diagnostic;

/// Placeholder used in diagnostics for records without a readable id.
pub const NO_ID: &str = "<no id>";

/// Whole-collection repository over a single JSON document.
///
/// Every call goes to disk: [`load_all`](Self::load_all) reads the full
/// document and [`save_all`](Self::save_all) overwrites it. Last writer wins.
pub struct CollectionRepository<T> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionRepository<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for CollectionRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRepository")
            .field("path", &self.path)
            .finish()
    }
}

impl<T: Entity> CollectionRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every valid entity in the collection.
    ///
    /// A record that cannot be converted is skipped and reported; the rest of
    /// the collection still loads.
    pub fn load_all(&self) -> Loaded<T> {
        let Loaded {
            items: raw,
            mut diagnostics,
        } = codec::load_collection(&self.path);

        let mut items = Vec::with_capacity(raw.len());
        for value in &raw {
            match T::from_value(value) {
                Ok(entity) => items.push(entity),
                Err(e) => diagnostics.push(
                    Diagnostic::RecordSkipped {
                        collection: T::COLLECTION,
                        id: record_id(value),
                        reason: e.to_string(),
                    }
                    .emit(),
                ),
            }
        }

        Loaded { items, diagnostics }
    }

    /// Overwrite the collection with `entities`.
    pub fn save_all(&self, entities: &[T]) -> Option<Diagnostic> {
        codec::save_collection(&self.path, entities)
    }
}

fn record_id(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => NO_ID.to_owned(),
        Some(other) => other.to_string(),
    }
}
