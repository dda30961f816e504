//! Hotel lifecycle: create, resize, delete, and availability reconciliation.

use booking_core::{Entity, Hotel, Reservation, ValidationError, find_by_id, find_by_id_mut};

use super::outcome::{Outcome, Rejection};
use crate::store::Store;

/// Raw user-supplied fields for a new hotel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub total_rooms: i64,
    pub available_rooms: i64,
}

/// A hotel whose stored availability was corrected by reconciliation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityChange {
    pub hotel_id: String,
    pub before: i64,
    pub after: i64,
}

/// Count ACTIVE reservations whose hotel is `hotel_id`.
pub(crate) fn active_for_hotel(reservations: &[Reservation], hotel_id: &str) -> usize {
    reservations
        .iter()
        .filter(|r| r.is_active() && r.hotel_id() == hotel_id)
        .count()
}

/// Add a hotel, refusing ids that already exist.
pub fn create_hotel(store: &Store, request: NewHotel) -> Outcome<Hotel> {
    let mut diagnostics = Vec::new();
    let mut hotels = store.hotels().load_all().drain_into(&mut diagnostics);

    if find_by_id(&hotels, &request.id).is_some() {
        return Outcome::rejected(Rejection::DuplicateHotel(request.id), diagnostics);
    }

    let hotel = match Hotel::new(
        request.id,
        request.name,
        request.city,
        request.total_rooms,
        request.available_rooms,
    ) {
        Ok(hotel) => hotel,
        Err(e) => return Outcome::rejected(e.into(), diagnostics),
    };

    hotels.push(hotel.clone());
    diagnostics.extend(store.hotels().save_all(&hotels));

    let status = format!("hotel {} created", hotel.id());
    Outcome::accepted(hotel, status, diagnostics)
}

/// Change a hotel's total capacity, keeping its occupied rooms occupied.
///
/// Rejected if the new total is negative or below the occupied count.
pub fn resize_hotel(store: &Store, hotel_id: &str, new_total: i64) -> Outcome<Hotel> {
    let mut diagnostics = Vec::new();
    let mut hotels = store.hotels().load_all().drain_into(&mut diagnostics);

    let Some(hotel) = find_by_id_mut(&mut hotels, hotel_id) else {
        return Outcome::rejected(Rejection::HotelNotFound(hotel_id.to_owned()), diagnostics);
    };

    if new_total < 0 {
        return Outcome::rejected(
            ValidationError::NegativeCapacity {
                total_rooms: new_total,
            }
            .into(),
            diagnostics,
        );
    }
    let occupied = hotel.occupied_rooms();
    if new_total < occupied {
        return Outcome::rejected(
            Rejection::BelowOccupancy {
                hotel_id: hotel_id.to_owned(),
                requested: new_total,
                occupied,
            },
            diagnostics,
        );
    }
    if let Err(e) = hotel.resize(new_total) {
        return Outcome::rejected(e.into(), diagnostics);
    }
    let hotel = hotel.clone();

    diagnostics.extend(store.hotels().save_all(&hotels));

    let status = format!(
        "hotel {} resized to {} rooms ({} available)",
        hotel_id,
        hotel.total_rooms(),
        hotel.available_rooms()
    );
    Outcome::accepted(hotel, status, diagnostics)
}

/// Remove a hotel that no ACTIVE reservation references.
///
/// Cancelled reservations do not block deletion.
pub fn delete_hotel(store: &Store, hotel_id: &str) -> Outcome<Hotel> {
    let mut diagnostics = Vec::new();
    let mut hotels = store.hotels().load_all().drain_into(&mut diagnostics);

    let Some(index) = hotels.iter().position(|h| h.id() == hotel_id) else {
        return Outcome::rejected(Rejection::HotelNotFound(hotel_id.to_owned()), diagnostics);
    };

    let reservations = store.reservations().load_all().drain_into(&mut diagnostics);
    let active = active_for_hotel(&reservations, hotel_id);
    if active > 0 {
        return Outcome::rejected(
            Rejection::HotelHasActiveReservations {
                hotel_id: hotel_id.to_owned(),
                active,
            },
            diagnostics,
        );
    }

    let hotel = hotels.remove(index);
    diagnostics.extend(store.hotels().save_all(&hotels));

    let status = format!("hotel {} deleted", hotel_id);
    Outcome::accepted(hotel, status, diagnostics)
}

/// Recompute every hotel's availability from its ACTIVE reservations.
///
/// `available_rooms` becomes `total_rooms - active`, clamped to
/// `[0, total_rooms]`. The hotel collection is only written when something
/// changed.
pub fn reconcile_availability(store: &Store) -> Outcome<Vec<AvailabilityChange>> {
    let mut diagnostics = Vec::new();
    let mut hotels = store.hotels().load_all().drain_into(&mut diagnostics);
    let reservations = store.reservations().load_all().drain_into(&mut diagnostics);

    let mut changes = Vec::new();
    for hotel in &mut hotels {
        let active = i64::try_from(active_for_hotel(&reservations, hotel.id())).unwrap_or(i64::MAX);
        let target = hotel.total_rooms().saturating_sub(active).clamp(0, hotel.total_rooms());
        let before = hotel.available_rooms();
        if target == before {
            continue;
        }
        if let Err(e) = hotel.set_available_rooms(target) {
            tracing::warn!("Skipping reconciliation of hotel {}: {}", hotel.id(), e);
            continue;
        }
        changes.push(AvailabilityChange {
            hotel_id: hotel.id().to_owned(),
            before,
            after: target,
        });
    }

    if !changes.is_empty() {
        diagnostics.extend(store.hotels().save_all(&hotels));
    }

    let status = match changes.len() {
        0 => "hotel availability already consistent".to_owned(),
        n => format!("corrected availability for {} hotel(s)", n),
    };
    Outcome::accepted(changes, status, diagnostics)
}
