//! Reservation create / cancel and the hotel stock adjustments they imply.
//!
//! Both flows write two collections in sequence (reservations first, then
//! hotels). There is no transaction: a crash between the writes leaves the
//! hotel's availability out of step with its reservations until
//! [`reconcile_availability`](super::reconcile_availability) is run.

use booking_core::{
    Entity, Reservation, ReservationStatus, find_by_id, find_by_id_mut, parse_date,
};

use super::outcome::{Outcome, Rejection};
use crate::repository::Diagnostic;
use crate::store::Store;

/// Offset added to the collection size when numbering new reservations.
pub const RESERVATION_ID_BASE: usize = 100;

/// Raw user-supplied fields for a new reservation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewReservation {
    pub hotel_id: String,
    pub customer_id: String,
    pub room_number: i64,
    pub check_in: String,
    pub check_out: String,
}

/// Result of a cancel request that found its reservation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cancellation {
    Cancelled {
        reservation: Reservation,
        stock: StockAdjustment,
    },
    AlreadyCancelled(Reservation),
}

/// What happened to the owning hotel's availability on cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockAdjustment {
    Released { available_rooms: i64 },
    AlreadyAtMaximum,
    HotelMissing,
    /// The reservation write failed, so the hotel was not touched.
    NotAttempted,
}

/// Next id in the `R{100 + n + 1}` scheme, skipping ids already taken.
pub fn next_reservation_id(reservations: &[Reservation]) -> String {
    let mut number = RESERVATION_ID_BASE + reservations.len() + 1;
    loop {
        let candidate = format!("R{:03}", number);
        if find_by_id(reservations, &candidate).is_none() {
            return candidate;
        }
        number += 1;
    }
}

/// Create an ACTIVE reservation and take one room from the hotel's stock.
///
/// Rejected without mutation if the hotel or customer is unknown, the hotel
/// has no availability, or the reservation itself is invalid.
pub fn create_reservation(store: &Store, request: NewReservation) -> Outcome<Reservation> {
    let mut diagnostics = Vec::new();
    let mut hotels = store.hotels().load_all().drain_into(&mut diagnostics);
    let customers = store.customers().load_all().drain_into(&mut diagnostics);
    let mut reservations = store.reservations().load_all().drain_into(&mut diagnostics);

    let Some(hotel) = find_by_id(&hotels, &request.hotel_id) else {
        return Outcome::rejected(Rejection::HotelNotFound(request.hotel_id), diagnostics);
    };
    if find_by_id(&customers, &request.customer_id).is_none() {
        return Outcome::rejected(Rejection::CustomerNotFound(request.customer_id), diagnostics);
    }
    if !hotel.has_availability() {
        return Outcome::rejected(Rejection::NoAvailability(request.hotel_id), diagnostics);
    }

    let reservation = match build_reservation(&reservations, &request) {
        Ok(reservation) => reservation,
        Err(rejection) => return Outcome::rejected(rejection, diagnostics),
    };

    // Step 1: persist the reservation.
    reservations.push(reservation.clone());
    if let Some(diagnostic) = store.reservations().save_all(&reservations) {
        diagnostics.push(diagnostic);
        return Outcome::accepted(
            reservation,
            "reservation created but could not be saved; hotel stock left unchanged",
            diagnostics,
        );
    }

    // Step 2: take the room from the hotel.
    if let Some(hotel) = find_by_id_mut(&mut hotels, &request.hotel_id) {
        hotel.reserve_room();
    }
    diagnostics.extend(store.hotels().save_all(&hotels));

    let status = format!("reservation created with id {}", reservation.id());
    Outcome::accepted(reservation, status, diagnostics)
}

fn build_reservation(
    existing: &[Reservation],
    request: &NewReservation,
) -> Result<Reservation, Rejection> {
    let check_in = parse_date(&request.check_in)?;
    let check_out = parse_date(&request.check_out)?;
    let reservation = Reservation::new(
        next_reservation_id(existing),
        request.hotel_id.as_str(),
        request.customer_id.as_str(),
        request.room_number,
        check_in,
        check_out,
        ReservationStatus::Active,
    )?;
    Ok(reservation)
}

/// Cancel an ACTIVE reservation and return its room to the hotel.
///
/// Cancelling an already cancelled reservation is accepted as a no-op. The
/// hotel's stock never rises above its total; a missing hotel only produces a
/// warning.
pub fn cancel_reservation(store: &Store, reservation_id: &str) -> Outcome<Cancellation> {
    let mut diagnostics = Vec::new();
    let mut reservations = store.reservations().load_all().drain_into(&mut diagnostics);

    let Some(reservation) = find_by_id_mut(&mut reservations, reservation_id) else {
        return Outcome::rejected(
            Rejection::ReservationNotFound(reservation_id.to_owned()),
            diagnostics,
        );
    };

    if !reservation.cancel() {
        let status = format!("reservation {} was already cancelled", reservation_id);
        let reservation = reservation.clone();
        return Outcome::accepted(Cancellation::AlreadyCancelled(reservation), status, diagnostics);
    }
    let reservation = reservation.clone();

    // Step 1: persist the status change.
    if let Some(diagnostic) = store.reservations().save_all(&reservations) {
        diagnostics.push(diagnostic);
        return Outcome::accepted(
            Cancellation::Cancelled {
                reservation,
                stock: StockAdjustment::NotAttempted,
            },
            "reservation cancelled but could not be saved; hotel stock left unchanged",
            diagnostics,
        );
    }

    // Step 2: give the room back.
    let stock = release_room(store, reservation.hotel_id(), &mut diagnostics);

    let status = match stock {
        StockAdjustment::Released { available_rooms } => format!(
            "reservation {} cancelled; hotel {} now has {} available rooms",
            reservation_id,
            reservation.hotel_id(),
            available_rooms
        ),
        StockAdjustment::AlreadyAtMaximum
        | StockAdjustment::HotelMissing
        | StockAdjustment::NotAttempted => {
            format!("reservation {} cancelled", reservation_id)
        }
    };
    Outcome::accepted(Cancellation::Cancelled { reservation, stock }, status, diagnostics)
}

fn release_room(store: &Store, hotel_id: &str, diagnostics: &mut Vec<Diagnostic>) -> StockAdjustment {
    let mut hotels = store.hotels().load_all().drain_into(diagnostics);

    let Some(hotel) = find_by_id_mut(&mut hotels, hotel_id) else {
        diagnostics.push(
            Diagnostic::StockHotelMissing {
                hotel_id: hotel_id.to_owned(),
            }
            .emit(),
        );
        return StockAdjustment::HotelMissing;
    };

    if !hotel.release_room() {
        diagnostics.push(
            Diagnostic::StockAtMaximum {
                hotel_id: hotel_id.to_owned(),
            }
            .emit(),
        );
        return StockAdjustment::AlreadyAtMaximum;
    }
    let available_rooms = hotel.available_rooms();

    diagnostics.extend(store.hotels().save_all(&hotels));
    StockAdjustment::Released { available_rooms }
}
