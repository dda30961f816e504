//! Cross-entity consistency operations.
//!
//! Each operation loads the collections it needs from a [`Store`](crate::Store),
//! checks its preconditions, and only then mutates and writes. A failed
//! precondition yields a [`Rejection`] and leaves storage untouched.
//!
//! Operations:
//! - [`create_reservation`] / [`cancel_reservation`] keep hotel stock in step
//!   with ACTIVE reservations
//! - [`resize_hotel`] preserves the occupied room count
//! - [`delete_hotel`] / [`delete_customer`] refuse while ACTIVE reservations
//!   reference the target
//! - [`reconcile_availability`] recomputes stock from reservations on demand

mod customer;
mod hotel;
mod outcome;
mod reservation;

pub use customer::{CustomerUpdate, NewCustomer, create_customer, delete_customer, update_customer};
pub use hotel::{
    AvailabilityChange, NewHotel, create_hotel, delete_hotel, reconcile_availability, resize_hotel,
};
pub use outcome::{Outcome, Rejection};
pub use reservation::{
    Cancellation, NewReservation, RESERVATION_ID_BASE, StockAdjustment, cancel_reservation,
    create_reservation, next_reservation_id,
};
