//! Validated entity model for the reservation manager.
//!
//! `booking-core` defines the three persisted entity types and the record
//! boundary storage uses to read and write them. Every constructor and
//! mutator re-checks the entity's invariants, so an invalid [`Hotel`] or
//! [`Reservation`] can never exist in memory.
pub mod customer;
pub mod error;
pub mod hotel;
pub mod record;
pub mod reservation;

pub use customer::Customer;
pub use error::{RecordError, ValidationError};
pub use hotel::Hotel;
pub use record::{Entity, Record, find_by_id, find_by_id_mut};
pub use reservation::{DATE_FORMAT, Reservation, ReservationStatus, parse_date};
