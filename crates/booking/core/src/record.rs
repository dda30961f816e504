//! Wire record boundary shared by all entity types.
//!
//! A [`Record`] is the mapping of field name to primitive value that storage
//! reads and writes. Entities convert to and from it immediately; nothing past
//! this boundary handles untyped data.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RecordError;

/// Mapping-shaped persistence representation of one entity.
pub type Record = Map<String, Value>;

/// Common contract of the persisted entity types.
///
/// The outgoing wire form is the entity's `Serialize` impl. Reading goes
/// through [`from_record`](Self::from_record) so every invariant is re-checked.
pub trait Entity: Serialize + Sized {
    /// Human-readable collection label used in diagnostics.
    const COLLECTION: &'static str;

    /// Unique key within the collection.
    fn id(&self) -> &str;

    /// Render the entity as a wire record.
    fn to_record(&self) -> Result<Record, RecordError> {
        match serde_json::to_value(self).map_err(|e| RecordError::Encode(e.to_string()))? {
            Value::Object(record) => Ok(record),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Build an entity from a wire record, applying full validation.
    fn from_record(record: &Record) -> Result<Self, RecordError>;

    /// Build an entity from an arbitrary JSON value.
    ///
    /// Non-object values fail with [`RecordError::NotAnObject`].
    fn from_value(value: &Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(record) => Self::from_record(record),
            _ => Err(RecordError::NotAnObject),
        }
    }
}

/// First entity whose id equals `id`, in collection order.
pub fn find_by_id<'a, T: Entity>(collection: &'a [T], id: &str) -> Option<&'a T> {
    collection.iter().find(|entity| entity.id() == id)
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut<'a, T: Entity>(collection: &'a mut [T], id: &str) -> Option<&'a mut T> {
    collection.iter_mut().find(|entity| entity.id() == id)
}

/// Typed field access over a [`Record`].
///
/// Each accessor names the offending field in its error, which a derived
/// `Deserialize` would not.
pub(crate) struct RecordReader<'a> {
    record: &'a Record,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(record: &'a Record) -> Self {
        Self { record }
    }

    fn field(&self, name: &'static str) -> Result<&'a Value, RecordError> {
        self.record.get(name).ok_or(RecordError::MissingField(name))
    }

    pub(crate) fn string(&self, name: &'static str) -> Result<String, RecordError> {
        self.field(name)?
            .as_str()
            .map(str::to_owned)
            .ok_or(RecordError::TypeMismatch {
                field: name,
                expected: "a string",
            })
    }

    /// String field that may be absent. A present `null` is a type mismatch.
    pub(crate) fn optional_string(&self, name: &'static str) -> Result<Option<String>, RecordError> {
        match self.record.get(name) {
            None => Ok(None),
            Some(_) => self.string(name).map(Some),
        }
    }

    pub(crate) fn integer(&self, name: &'static str) -> Result<i64, RecordError> {
        self.field(name)?.as_i64().ok_or(RecordError::TypeMismatch {
            field: name,
            expected: "an integer",
        })
    }
}
