//! Hotel entity and its capacity bookkeeping.

use crate::error::{RecordError, ValidationError};
use crate::record::{Entity, Record, RecordReader};

/// A hotel with its room capacity.
///
/// Invariant: `0 <= available_rooms <= total_rooms`. It is checked on
/// construction and after every mutation, so an instance is always valid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Hotel {
    id: String,
    name: String,
    city: String,
    total_rooms: i64,
    available_rooms: i64,
}

impl Hotel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        total_rooms: i64,
        available_rooms: i64,
    ) -> Result<Self, ValidationError> {
        check_capacity(total_rooms, available_rooms)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            total_rooms,
            available_rooms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn total_rooms(&self) -> i64 {
        self.total_rooms
    }

    pub fn available_rooms(&self) -> i64 {
        self.available_rooms
    }

    /// Rooms currently tied to active reservations.
    pub fn occupied_rooms(&self) -> i64 {
        self.total_rooms - self.available_rooms
    }

    pub fn has_availability(&self) -> bool {
        self.available_rooms > 0
    }

    pub fn is_at_capacity_maximum(&self) -> bool {
        self.available_rooms == self.total_rooms
    }

    /// Take one room out of the available stock.
    ///
    /// Returns `false` without mutating when no room is available.
    pub fn reserve_room(&mut self) -> bool {
        if !self.has_availability() {
            return false;
        }
        self.available_rooms -= 1;
        true
    }

    /// Return one room to the available stock.
    ///
    /// Returns `false` without mutating when the stock is already full.
    pub fn release_room(&mut self) -> bool {
        if self.is_at_capacity_maximum() {
            return false;
        }
        self.available_rooms += 1;
        true
    }

    /// Change the total capacity while keeping the occupied count.
    ///
    /// Fails with [`ValidationError::AvailabilityOutOfBounds`] when the new
    /// total is below the rooms currently occupied.
    pub fn resize(&mut self, new_total: i64) -> Result<(), ValidationError> {
        let available = new_total - self.occupied_rooms();
        check_capacity(new_total, available)?;
        self.total_rooms = new_total;
        self.available_rooms = available;
        Ok(())
    }

    /// Overwrite the available stock, re-checking the bound.
    pub fn set_available_rooms(&mut self, available_rooms: i64) -> Result<(), ValidationError> {
        check_capacity(self.total_rooms, available_rooms)?;
        self.available_rooms = available_rooms;
        Ok(())
    }
}

fn check_capacity(total_rooms: i64, available_rooms: i64) -> Result<(), ValidationError> {
    if total_rooms < 0 {
        return Err(ValidationError::NegativeCapacity { total_rooms });
    }
    if !(0..=total_rooms).contains(&available_rooms) {
        return Err(ValidationError::AvailabilityOutOfBounds {
            available_rooms,
            total_rooms,
        });
    }
    Ok(())
}

impl Entity for Hotel {
    const COLLECTION: &'static str = "hotel";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_record(record: &Record) -> Result<Self, RecordError> {
        let reader = RecordReader::new(record);
        let hotel = Hotel::new(
            reader.string("id")?,
            reader.string("name")?,
            reader.string("city")?,
            reader.integer("total_rooms")?,
            reader.integer("available_rooms")?,
        )?;
        Ok(hotel)
    }
}
