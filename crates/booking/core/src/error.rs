//! Error types raised while building entities.
//!
//! Two layers are distinguished:
//! - [`ValidationError`]: an entity invariant does not hold (bad capacity,
//!   bad date order, unknown status). Raised by constructors and mutators.
//! - [`RecordError`]: a wire record could not be turned into an entity, either
//!   because its shape is wrong or because the resulting values fail validation.

use thiserror::Error;

/// An entity invariant was violated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("total_rooms cannot be negative (got {total_rooms})")]
    NegativeCapacity { total_rooms: i64 },

    #[error("available_rooms must be between 0 and total_rooms {total_rooms} (got {available_rooms})")]
    AvailabilityOutOfBounds {
        available_rooms: i64,
        total_rooms: i64,
    },

    #[error("check_in {check_in} must be before check_out {check_out}")]
    DatesOutOfOrder { check_in: String, check_out: String },

    #[error("invalid date '{value}': expected YYYY-MM-DD ({detail})")]
    InvalidDate { value: String, detail: String },

    #[error("status must be 'ACTIVE' or 'CANCELLED' (got '{0}')")]
    InvalidStatus(String),
}

/// A wire record could not be converted into an entity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("record could not be encoded: {0}")]
    Encode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
