//! Persistence and consistency rules for the reservation manager.
//!
//! This crate stores the entity collections defined in `booking-core` as JSON
//! documents and enforces the rules that span them. Front ends build a
//! [`Store`] from a [`StoreConfig`] and call the functions in [`operations`].
//!
//! Modules are organized by responsibility:
//! - [`repository`] reads and writes whole collections, degrading to
//!   diagnostics instead of failing
//! - [`operations`] keeps hotel availability consistent with reservations
//! - [`config`] locates the data directory
pub mod config;
pub mod operations;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use operations::{
    AvailabilityChange, Cancellation, CustomerUpdate, NewCustomer, NewHotel, NewReservation,
    Outcome, Rejection, StockAdjustment, cancel_reservation, create_customer, create_hotel,
    create_reservation, delete_customer, delete_hotel, reconcile_availability, resize_hotel,
    update_customer,
};
pub use repository::{CollectionRepository, Diagnostic, Loaded, RepositoryError, Severity};
pub use store::Store;
