// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    CHECK_IN, MemoryCatalog, MemoryStore, TogglingStore, create_booking_request,
    create_coordinator, create_test_hotel,
};
use crate::{BookingCoordinator, BookingError, CancelError};
use staybook_domain::{ReservationId, ReservationStatus, RoomTypeId, StayRange};
use std::sync::Arc;
use time::macros::date;

fn deluxe_id() -> RoomTypeId {
    RoomTypeId::new("hotel-1-deluxe")
}

#[test]
fn test_book_happy_path() {
    let coordinator = create_coordinator(299, 3);

    let reservation = coordinator
        .book(&create_booking_request("hotel-1", 2, 4))
        .unwrap();

    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    // 3 nights x 299 x 2 rooms
    assert_eq!(reservation.total_price, Some(1794));
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 2);

    let stored = coordinator
        .cancel(&reservation.reservation_id)
        .map(|_| ())
        .is_ok();
    assert!(stored, "Confirmed reservation must be loadable for cancel");
}

#[test]
fn test_book_single_room_price() {
    let coordinator = create_coordinator(299, 3);

    let reservation = coordinator
        .book(&create_booking_request("hotel-1", 1, 2))
        .unwrap();

    // 3 nights x 299 x 1 room
    assert_eq!(reservation.total_price, Some(897));
}

#[test]
fn test_book_persists_confirmed_reservation() {
    let catalog = MemoryCatalog::new(vec![create_test_hotel("hotel-1", 299, 3)]);
    let store = Arc::new(MemoryStore::new());
    let coordinator = BookingCoordinator::new(catalog, Arc::clone(&store));

    coordinator
        .book(&create_booking_request("hotel-1", 1, 2))
        .unwrap();

    assert_eq!(store.len(), 1);
}

#[test]
fn test_book_unknown_hotel() {
    let coordinator = create_coordinator(299, 3);

    let err = coordinator
        .book(&create_booking_request("hotel-9", 1, 2))
        .unwrap_err();

    assert!(matches!(err, BookingError::HotelNotFound(_)));
}

#[test]
fn test_book_unknown_room_type() {
    let coordinator = create_coordinator(299, 3);

    let mut request = create_booking_request("hotel-1", 1, 2);
    request.room_type_id = RoomTypeId::new("hotel-1-suite");
    let err = coordinator.book(&request).unwrap_err();

    assert!(matches!(err, BookingError::RoomTypeNotFound(_)));
}

#[test]
fn test_validation_failure_never_touches_inventory() {
    let coordinator = create_coordinator(299, 3);

    let err = coordinator
        .book(&create_booking_request("hotel-1", 15, 50))
        .unwrap_err();

    match err {
        BookingError::Validation(violations) => assert!(!violations.is_empty()),
        other => panic!("Expected a validation error, got: {other}"),
    }
    assert!(!coordinator.ledger().is_registered(&deluxe_id()));
}

#[test]
fn test_book_rejected_when_capacity_exhausted() {
    let coordinator = create_coordinator(299, 3);

    coordinator
        .book(&create_booking_request("hotel-1", 3, 6))
        .unwrap();

    let err = coordinator
        .book(&create_booking_request("hotel-1", 1, 2))
        .unwrap_err();

    match err {
        BookingError::NoAvailability { date } => assert_eq!(date, CHECK_IN),
        other => panic!("Expected NoAvailability, got: {other}"),
    }
    // The failed attempt must not have moved any counts.
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 3);
}

#[test]
fn test_persistence_failure_releases_hold() {
    let catalog = MemoryCatalog::new(vec![create_test_hotel("hotel-1", 299, 3)]);
    let store = Arc::new(TogglingStore::new());
    let coordinator = BookingCoordinator::new(catalog, Arc::clone(&store));

    store.set_fail_saves(true);
    let err = coordinator
        .book(&create_booking_request("hotel-1", 2, 4))
        .unwrap_err();

    assert_eq!(err, BookingError::PersistenceFailed);
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 0);
    assert_eq!(store.len(), 0);

    // With the store healthy again the same request goes through.
    store.set_fail_saves(false);
    let reservation = coordinator
        .book(&create_booking_request("hotel-1", 2, 4))
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
}

#[test]
fn test_cancel_returns_inventory() {
    let coordinator = create_coordinator(299, 3);

    let reservation = coordinator
        .book(&create_booking_request("hotel-1", 3, 6))
        .unwrap();
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 3);

    let cancelled = coordinator.cancel(&reservation.reservation_id).unwrap();

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 0);

    // Freed units are immediately bookable again.
    assert!(
        coordinator
            .book(&create_booking_request("hotel-1", 3, 6))
            .is_ok()
    );
}

#[test]
fn test_cancel_twice_reports_terminal_status() {
    let coordinator = create_coordinator(299, 3);

    let reservation = coordinator
        .book(&create_booking_request("hotel-1", 1, 2))
        .unwrap();
    coordinator.cancel(&reservation.reservation_id).unwrap();

    let err = coordinator
        .cancel(&reservation.reservation_id)
        .unwrap_err();

    assert_eq!(
        err,
        CancelError::AlreadyTerminal {
            status: ReservationStatus::Cancelled
        }
    );
    // No double release: counts stay at zero.
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 0);
}

#[test]
fn test_cancel_unknown_reservation() {
    let coordinator = create_coordinator(299, 3);

    let err = coordinator
        .cancel(&ReservationId::new("res-missing"))
        .unwrap_err();

    assert!(matches!(err, CancelError::NotFound(_)));
}

#[test]
fn test_availability_reflects_bookings() {
    let coordinator = create_coordinator(299, 3);
    let stay = StayRange::new(CHECK_IN, date!(2030 - 06 - 13)).unwrap();

    assert!(coordinator.availability(&deluxe_id(), &stay, 3).unwrap());

    coordinator
        .book(&create_booking_request("hotel-1", 2, 4))
        .unwrap();

    assert!(coordinator.availability(&deluxe_id(), &stay, 1).unwrap());
    assert!(!coordinator.availability(&deluxe_id(), &stay, 2).unwrap());
}

#[test]
fn test_availability_unknown_room_type() {
    let coordinator = create_coordinator(299, 3);
    let stay = StayRange::new(CHECK_IN, date!(2030 - 06 - 13)).unwrap();

    let err = coordinator
        .availability(&RoomTypeId::new("hotel-1-suite"), &stay, 1)
        .unwrap_err();

    assert!(matches!(err, BookingError::RoomTypeNotFound(_)));
}

#[test]
fn test_concurrent_bookings_never_oversell() {
    let coordinator = create_coordinator(299, 2);

    let confirmed = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let coordinator = &coordinator;
                scope.spawn(move || {
                    coordinator
                        .book(&create_booking_request("hotel-1", 1, 2))
                        .is_ok()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(false))
            .filter(|granted| *granted)
            .count()
    });

    assert_eq!(confirmed, 2);
    assert_eq!(coordinator.ledger().units_held(&deluxe_id(), CHECK_IN), 2);
}
