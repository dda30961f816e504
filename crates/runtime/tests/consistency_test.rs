use std::fs;

use booking_core::{
    Customer, Entity, Hotel, Reservation, ReservationStatus, ValidationError, find_by_id,
};
use booking_runtime::{
    Cancellation, CustomerUpdate, Diagnostic, NewCustomer, NewHotel, NewReservation, Rejection,
    StockAdjustment, Store, StoreConfig, cancel_reservation, create_customer, create_hotel,
    create_reservation, delete_customer, delete_hotel, reconcile_availability, resize_hotel,
    update_customer,
};
use tempfile::TempDir;

/// Baseline data set: hotel H001 (3 rooms, 2 available), customer C001, and
/// one ACTIVE reservation R001 occupying the third room.
struct Fixture {
    _temp_dir: TempDir,
    store: Store,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(&StoreConfig::new(temp_dir.path().join("data")));

        let hotels = vec![Hotel::new("H001", "Test Hotel", "Chihuahua", 3, 2).unwrap()];
        let customers = vec![Customer::new("C001", "Cliente Uno", "c1@example.com", "111")];
        let reservations = vec![
            Reservation::parse("R001", "H001", "C001", 101, "2026-11-01", "2026-11-03", "ACTIVE")
                .unwrap(),
        ];
        assert!(store.hotels().save_all(&hotels).is_none());
        assert!(store.customers().save_all(&customers).is_none());
        assert!(store.reservations().save_all(&reservations).is_none());

        Self {
            _temp_dir: temp_dir,
            store,
        }
    }

    fn hotel(&self, id: &str) -> Option<Hotel> {
        let hotels = self.store.hotels().load_all().items;
        find_by_id(&hotels, id).cloned()
    }

    fn reservation(&self, id: &str) -> Option<Reservation> {
        let reservations = self.store.reservations().load_all().items;
        find_by_id(&reservations, id).cloned()
    }

    /// Make every later reservations save fail by occupying its temp path.
    fn block_reservation_writes(&self) {
        let temp_path = self
            .store
            .reservations()
            .path()
            .with_extension("json.tmp");
        fs::create_dir(temp_path).unwrap();
    }

    fn request(&self) -> NewReservation {
        NewReservation {
            hotel_id: "H001".into(),
            customer_id: "C001".into(),
            room_number: 102,
            check_in: "2026-12-01".into(),
            check_out: "2026-12-04".into(),
        }
    }
}

// ============================================================================
// Create / cancel
// ============================================================================

#[test]
fn create_reservation_takes_a_room() {
    let fx = Fixture::new();

    let outcome = create_reservation(&fx.store, fx.request());

    assert!(outcome.is_accepted(), "{}", outcome.status());
    let created = outcome.result.unwrap();
    assert_eq!(created.id(), "R102");
    assert_eq!(created.status(), ReservationStatus::Active);

    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 1);
    let stored = fx.reservation("R102").expect("reservation persisted");
    assert_eq!(stored, created);
}

#[test]
fn create_then_cancel_restores_stock() {
    let fx = Fixture::new();
    let created = create_reservation(&fx.store, fx.request()).result.unwrap();
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 1);

    let outcome = cancel_reservation(&fx.store, created.id());
    match outcome.result {
        Ok(Cancellation::Cancelled { stock, .. }) => {
            assert_eq!(stock, StockAdjustment::Released { available_rooms: 2 })
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        fx.reservation(created.id()).unwrap().status(),
        ReservationStatus::Cancelled
    );
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);

    let again = cancel_reservation(&fx.store, created.id());
    assert!(matches!(again.result, Ok(Cancellation::AlreadyCancelled(_))));
    assert!(again.status().contains("already cancelled"));
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);
}

#[test]
fn create_rejects_unknown_hotel_and_customer() {
    let fx = Fixture::new();

    let mut request = fx.request();
    request.hotel_id = "H404".into();
    let outcome = create_reservation(&fx.store, request);
    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::HotelNotFound("H404".into()))
    );

    let mut request = fx.request();
    request.customer_id = "C404".into();
    let outcome = create_reservation(&fx.store, request);
    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::CustomerNotFound("C404".into()))
    );

    assert_eq!(fx.store.reservations().load_all().items.len(), 1);
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);
}

#[test]
fn create_rejects_when_hotel_is_full() {
    let fx = Fixture::new();
    assert!(create_reservation(&fx.store, fx.request()).is_accepted());
    assert!(create_reservation(&fx.store, fx.request()).is_accepted());
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 0);

    let outcome = create_reservation(&fx.store, fx.request());

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::NoAvailability("H001".into()))
    );
    assert_eq!(fx.store.reservations().load_all().items.len(), 3);
}

#[test]
fn create_rejects_invalid_dates_without_mutation() {
    let fx = Fixture::new();
    let mut request = fx.request();
    request.check_in = "2026-12-04".into();
    request.check_out = "2026-12-01".into();

    let outcome = create_reservation(&fx.store, request);

    assert!(matches!(outcome.rejection(), Some(Rejection::Invalid(_))));
    assert_eq!(fx.store.reservations().load_all().items.len(), 1);
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);
}

#[test]
fn cancel_at_maximum_keeps_stock_and_warns() {
    let fx = Fixture::new();
    // R001 occupies a room but the stored stock says every room is free.
    let mut hotels = fx.store.hotels().load_all().items;
    hotels[0] = Hotel::new("H001", "Test Hotel", "Chihuahua", 3, 3).unwrap();
    assert!(fx.store.hotels().save_all(&hotels).is_none());

    let outcome = cancel_reservation(&fx.store, "R001");

    match &outcome.result {
        Ok(Cancellation::Cancelled { stock, .. }) => {
            assert_eq!(*stock, StockAdjustment::AlreadyAtMaximum)
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(outcome.diagnostics.contains(&Diagnostic::StockAtMaximum {
        hotel_id: "H001".into()
    }));
    assert!(
        outcome
            .diagnostics
            .iter()
            .any(|d| d.to_string().contains("already at maximum"))
    );
    assert_eq!(
        fx.reservation("R001").unwrap().status(),
        ReservationStatus::Cancelled
    );
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 3);
}

#[test]
fn cancel_with_missing_hotel_still_cancels() {
    let fx = Fixture::new();
    assert!(fx.store.hotels().save_all(&[]).is_none());

    let outcome = cancel_reservation(&fx.store, "R001");

    assert!(matches!(
        outcome.result,
        Ok(Cancellation::Cancelled {
            stock: StockAdjustment::HotelMissing,
            ..
        })
    ));
    assert!(outcome.diagnostics.contains(&Diagnostic::StockHotelMissing {
        hotel_id: "H001".into()
    }));
    assert_eq!(
        fx.reservation("R001").unwrap().status(),
        ReservationStatus::Cancelled
    );
}

#[test]
fn cancel_unknown_reservation_is_rejected() {
    let fx = Fixture::new();
    let outcome = cancel_reservation(&fx.store, "R999");
    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::ReservationNotFound("R999".into()))
    );
}

// ============================================================================
// Hotels
// ============================================================================

#[test]
fn create_with_failed_reservation_write_leaves_stock_alone() {
    let fx = Fixture::new();
    fx.block_reservation_writes();

    let outcome = create_reservation(&fx.store, fx.request());

    assert!(outcome.is_accepted(), "{}", outcome.status());
    assert!(outcome.has_write_failure());
    assert!(matches!(
        outcome.diagnostics.as_slice(),
        [Diagnostic::WriteFailed { .. }]
    ));
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);
    assert!(fx.reservation("R102").is_none());
}

#[test]
fn cancel_with_failed_reservation_write_does_not_touch_stock() {
    let fx = Fixture::new();
    fx.block_reservation_writes();

    let outcome = cancel_reservation(&fx.store, "R001");

    assert!(outcome.has_write_failure());
    match outcome.result {
        Ok(Cancellation::Cancelled { stock, .. }) => {
            assert_eq!(stock, StockAdjustment::NotAttempted)
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);
    assert_eq!(
        fx.reservation("R001").unwrap().status(),
        ReservationStatus::Active
    );
}

#[test]
fn delete_hotel_blocked_by_active_reservation() {
    let fx = Fixture::new();
    let before = fx.store.hotels().load_all().items;

    let outcome = delete_hotel(&fx.store, "H001");

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::HotelHasActiveReservations {
            hotel_id: "H001".into(),
            active: 1
        })
    );
    assert_eq!(fx.store.hotels().load_all().items, before);
}

#[test]
fn delete_hotel_allowed_once_reservations_are_cancelled() {
    let fx = Fixture::new();
    assert!(cancel_reservation(&fx.store, "R001").is_accepted());

    let outcome = delete_hotel(&fx.store, "H001");

    assert!(outcome.is_accepted(), "{}", outcome.status());
    assert!(fx.hotel("H001").is_none());
}

#[test]
fn resize_below_occupancy_is_rejected() {
    let fx = Fixture::new();
    // Two rooms occupied out of three.
    assert!(create_reservation(&fx.store, fx.request()).is_accepted());
    let before = fx.hotel("H001").unwrap();
    assert_eq!(before.occupied_rooms(), 2);

    let outcome = resize_hotel(&fx.store, "H001", 1);

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::BelowOccupancy {
            hotel_id: "H001".into(),
            requested: 1,
            occupied: 2
        })
    );
    assert_eq!(fx.hotel("H001").unwrap(), before);
}

#[test]
fn resize_to_negative_total_is_invalid() {
    let fx = Fixture::new();
    // Free the occupied room so occupancy is zero.
    assert!(cancel_reservation(&fx.store, "R001").is_accepted());
    let before = fx.hotel("H001").unwrap();
    assert_eq!(before.occupied_rooms(), 0);

    let outcome = resize_hotel(&fx.store, "H001", -1);

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::Invalid(ValidationError::NegativeCapacity {
            total_rooms: -1
        }))
    );
    assert_eq!(fx.hotel("H001").unwrap(), before);
}

#[test]
fn resize_keeps_occupied_rooms() {
    let fx = Fixture::new();

    let resized = resize_hotel(&fx.store, "H001", 10).result.unwrap();

    assert_eq!(resized.total_rooms(), 10);
    assert_eq!(resized.available_rooms(), 9);
    assert_eq!(fx.hotel("H001").unwrap(), resized);
}

#[test]
fn create_hotel_rejects_duplicates_and_invalid_capacity() {
    let fx = Fixture::new();

    let duplicate = create_hotel(
        &fx.store,
        NewHotel {
            id: "H001".into(),
            name: "Other".into(),
            city: "Juárez".into(),
            total_rooms: 5,
            available_rooms: 5,
        },
    );
    assert_eq!(
        duplicate.rejection(),
        Some(&Rejection::DuplicateHotel("H001".into()))
    );

    let invalid = create_hotel(
        &fx.store,
        NewHotel {
            id: "H002".into(),
            name: "Nuevo".into(),
            city: "Cuauhtémoc".into(),
            total_rooms: 2,
            available_rooms: 3,
        },
    );
    assert!(matches!(invalid.rejection(), Some(Rejection::Invalid(_))));

    let created = create_hotel(
        &fx.store,
        NewHotel {
            id: "H002".into(),
            name: "Nuevo".into(),
            city: "Cuauhtémoc".into(),
            total_rooms: 5,
            available_rooms: 5,
        },
    );
    assert!(created.is_accepted());
    assert_eq!(fx.store.hotels().load_all().items.len(), 2);
}

#[test]
fn reconcile_recomputes_from_active_reservations() {
    let fx = Fixture::new();
    let mut hotels = fx.store.hotels().load_all().items;
    hotels[0] = Hotel::new("H001", "Test Hotel", "Chihuahua", 3, 0).unwrap();
    assert!(fx.store.hotels().save_all(&hotels).is_none());

    let outcome = reconcile_availability(&fx.store);

    let changes = outcome.result.unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!((changes[0].before, changes[0].after), (0, 2));
    assert_eq!(fx.hotel("H001").unwrap().available_rooms(), 2);

    let second = reconcile_availability(&fx.store);
    assert!(second.result.unwrap().is_empty());
}

// ============================================================================
// Customers
// ============================================================================

#[test]
fn delete_customer_blocked_by_active_reservation() {
    let fx = Fixture::new();

    let outcome = delete_customer(&fx.store, "C001");
    assert!(matches!(
        outcome.rejection(),
        Some(Rejection::CustomerHasActiveReservations { active: 1, .. })
    ));

    assert!(cancel_reservation(&fx.store, "R001").is_accepted());
    assert!(delete_customer(&fx.store, "C001").is_accepted());
    assert!(fx.store.customers().load_all().items.is_empty());
}

#[test]
fn customer_create_and_update() {
    let fx = Fixture::new();

    let duplicate = create_customer(
        &fx.store,
        NewCustomer {
            id: "C001".into(),
            name: "Dup".into(),
            email: "dup@example.com".into(),
            phone: "0".into(),
        },
    );
    assert_eq!(
        duplicate.rejection(),
        Some(&Rejection::DuplicateCustomer("C001".into()))
    );

    let updated = update_customer(
        &fx.store,
        "C001",
        CustomerUpdate {
            phone: Some("222".into()),
            ..Default::default()
        },
    );
    let customer = updated.result.unwrap();
    assert_eq!(customer.phone(), "222");
    assert_eq!(customer.email(), "c1@example.com");

    let customers = fx.store.customers().load_all().items;
    assert_eq!(find_by_id(&customers, "C001").unwrap().phone(), "222");
}

// ============================================================================
// Degraded storage
// ============================================================================

#[test]
fn degraded_documents_load_as_empty_for_every_collection() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path());
    let store = Store::new(&config);

    // Missing
    assert!(store.hotels().load_all().items.is_empty());
    assert!(store.customers().load_all().items.is_empty());
    let missing = store.reservations().load_all();
    assert!(missing.items.is_empty());
    assert!(matches!(
        missing.diagnostics.as_slice(),
        [Diagnostic::NotFound { .. }]
    ));

    for content in ["", "   ", "[1, 2", r#"{"id": "H001"}"#] {
        fs::write(config.hotels_path(), content).unwrap();
        fs::write(config.customers_path(), content).unwrap();
        fs::write(config.reservations_path(), content).unwrap();

        let hotels = store.hotels().load_all();
        let customers = store.customers().load_all();
        let reservations = store.reservations().load_all();

        assert!(hotels.items.is_empty());
        assert!(customers.items.is_empty());
        assert!(reservations.items.is_empty());
        assert_eq!(hotels.diagnostics.len(), 1, "content {content:?}");
        assert_eq!(customers.diagnostics.len(), 1, "content {content:?}");
        assert_eq!(reservations.diagnostics.len(), 1, "content {content:?}");
    }
}

#[test]
fn corrupted_hotels_file_rejects_reservation_with_diagnostic() {
    let fx = Fixture::new();
    fs::write(fx.store.hotels().path(), "{ this is not valid json }").unwrap();

    let outcome = create_reservation(&fx.store, fx.request());

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::HotelNotFound("H001".into()))
    );
    assert!(
        outcome
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Malformed { .. }))
    );
}
