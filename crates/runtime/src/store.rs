//! The set of collection repositories backing one data directory.

use booking_core::{Customer, Hotel, Reservation};

use crate::config::StoreConfig;
use crate::repository::CollectionRepository;

/// Hotel, customer, and reservation repositories sharing one configuration.
///
/// Holds no entity data: every operation loads what it needs and writes back
/// what it changed.
#[derive(Clone, Debug)]
pub struct Store {
    hotels: CollectionRepository<Hotel>,
    customers: CollectionRepository<Customer>,
    reservations: CollectionRepository<Reservation>,
}

impl Store {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            hotels: CollectionRepository::new(config.hotels_path()),
            customers: CollectionRepository::new(config.customers_path()),
            reservations: CollectionRepository::new(config.reservations_path()),
        }
    }

    pub fn hotels(&self) -> &CollectionRepository<Hotel> {
        &self.hotels
    }

    pub fn customers(&self) -> &CollectionRepository<Customer> {
        &self.customers
    }

    pub fn reservations(&self) -> &CollectionRepository<Reservation> {
        &self.reservations
    }
}
