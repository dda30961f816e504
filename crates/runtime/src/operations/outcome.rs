//! Result shape shared by the consistency operations.

use booking_core::ValidationError;
use thiserror::Error;

use crate::repository::Diagnostic;

/// Why an operation refused to mutate anything.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("hotel '{0}' does not exist")]
    HotelNotFound(String),

    #[error("customer '{0}' does not exist")]
    CustomerNotFound(String),

    #[error("reservation '{0}' does not exist")]
    ReservationNotFound(String),

    #[error("hotel '{0}' has no available rooms")]
    NoAvailability(String),

    #[error("hotel '{hotel_id}' still has {active} active reservation(s)")]
    HotelHasActiveReservations { hotel_id: String, active: usize },

    #[error("customer '{customer_id}' still has {active} active reservation(s)")]
    CustomerHasActiveReservations { customer_id: String, active: usize },

    #[error("hotel '{hotel_id}' cannot shrink to {requested} rooms while {occupied} are occupied")]
    BelowOccupancy {
        hotel_id: String,
        requested: i64,
        occupied: i64,
    },

    #[error("a hotel with id '{0}' already exists")]
    DuplicateHotel(String),

    #[error("a customer with id '{0}' already exists")]
    DuplicateCustomer(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// What an operation did, plus everything worth telling the operator.
#[must_use]
#[derive(Debug)]
pub struct Outcome<T> {
    pub result: Result<T, Rejection>,
    pub diagnostics: Vec<Diagnostic>,
    status: String,
}

impl<T> Outcome<T> {
    pub(crate) fn accepted(value: T, status: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        let status = status.into();
        tracing::debug!("{}", status);
        Self {
            result: Ok(value),
            diagnostics,
            status,
        }
    }

    pub(crate) fn rejected(rejection: Rejection, diagnostics: Vec<Diagnostic>) -> Self {
        let status = format!("rejected: {}", rejection);
        tracing::debug!("{}", status);
        Self {
            result: Err(rejection),
            diagnostics,
            status,
        }
    }

    /// One line of human-readable text describing the outcome.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.result.as_ref().err()
    }

    /// True if any diagnostic reports a failed write.
    pub fn has_write_failure(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::WriteFailed { .. }))
    }
}
