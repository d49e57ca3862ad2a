// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::{InventoryLedger, LedgerError};
use crate::tests::helpers::create_test_room_type;
use staybook_domain::{HoldToken, RoomTypeId, StayRange};
use time::macros::date;

fn create_test_ledger(total_units: u32) -> (InventoryLedger, RoomTypeId) {
    let ledger = InventoryLedger::new();
    let room_type = create_test_room_type("hotel-1", "deluxe", total_units);
    let room_type_id = room_type.room_type_id.clone();
    ledger.register_room_type(&room_type);
    (ledger, room_type_id)
}

fn three_nights() -> StayRange {
    StayRange::new(date!(2030 - 06 - 10), date!(2030 - 06 - 13)).unwrap()
}

#[test]
fn test_unregistered_room_type_is_unknown() {
    let ledger = InventoryLedger::new();
    let room_type_id = RoomTypeId::new("hotel-1-deluxe");

    let err = ledger
        .check_availability(&room_type_id, &three_nights(), 1)
        .unwrap_err();
    assert!(matches!(err, LedgerError::UnknownRoomType(_)));
    assert!(ledger.reserve(&room_type_id, &three_nights(), 1).is_err());
    assert!(!ledger.is_registered(&room_type_id));
}

#[test]
fn test_fresh_room_type_is_fully_available() {
    let (ledger, room_type_id) = create_test_ledger(3);

    assert!(
        ledger
            .check_availability(&room_type_id, &three_nights(), 3)
            .unwrap()
    );
    assert!(
        !ledger
            .check_availability(&room_type_id, &three_nights(), 4)
            .unwrap()
    );
}

#[test]
fn test_reregistering_keeps_existing_holds() {
    let (ledger, room_type_id) = create_test_ledger(3);
    ledger.reserve(&room_type_id, &three_nights(), 2).unwrap();

    ledger.register_room_type(&create_test_room_type("hotel-1", "deluxe", 3));

    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 2);
}

#[test]
fn test_reserve_holds_every_night_but_not_checkout() {
    let (ledger, room_type_id) = create_test_ledger(3);

    ledger.reserve(&room_type_id, &three_nights(), 2).unwrap();

    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 2);
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 11)), 2);
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 12)), 2);
    // The check-out date itself is not occupied.
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 13)), 0);
}

#[test]
fn test_reserve_up_to_capacity_then_rejects() {
    let (ledger, room_type_id) = create_test_ledger(3);

    assert!(ledger.reserve(&room_type_id, &three_nights(), 3).is_ok());

    let err = ledger
        .reserve(&room_type_id, &three_nights(), 1)
        .unwrap_err();
    match err {
        LedgerError::NoCapacity { date, .. } => assert_eq!(date, date!(2030 - 06 - 10)),
        other => panic!("Expected NoCapacity, got: {other}"),
    }
}

#[test]
fn test_failed_reserve_changes_nothing() {
    let (ledger, room_type_id) = create_test_ledger(3);

    // Fill only the middle night.
    let middle = StayRange::new(date!(2030 - 06 - 11), date!(2030 - 06 - 12)).unwrap();
    ledger.reserve(&room_type_id, &middle, 3).unwrap();

    let err = ledger
        .reserve(&room_type_id, &three_nights(), 1)
        .unwrap_err();
    match err {
        LedgerError::NoCapacity { date, .. } => assert_eq!(date, date!(2030 - 06 - 11)),
        other => panic!("Expected NoCapacity, got: {other}"),
    }

    // The nights before and after the conflict were not touched.
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 0);
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 12)), 0);
}

#[test]
fn test_release_returns_units() {
    let (ledger, room_type_id) = create_test_ledger(3);

    let token = ledger.reserve(&room_type_id, &three_nights(), 3).unwrap();
    ledger.release(&token);

    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 0);
    assert!(ledger.reserve(&room_type_id, &three_nights(), 3).is_ok());
}

#[test]
fn test_release_is_idempotent() {
    let (ledger, room_type_id) = create_test_ledger(3);

    let keeper = ledger.reserve(&room_type_id, &three_nights(), 1).unwrap();
    let token = ledger.reserve(&room_type_id, &three_nights(), 1).unwrap();

    ledger.release(&token);
    ledger.release(&token);
    ledger.release(&token);

    // The other hold must not have been eaten by the repeats.
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 1);
    drop(keeper);
}

#[test]
fn test_release_ignores_foreign_token() {
    let (ledger, room_type_id) = create_test_ledger(3);
    ledger.reserve(&room_type_id, &three_nights(), 2).unwrap();

    // A token number this ledger never issued.
    let forged = HoldToken::new(999, room_type_id.clone(), three_nights(), 2);
    ledger.release(&forged);

    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 2);
}

#[test]
fn test_overlapping_stays_share_capacity() {
    let (ledger, room_type_id) = create_test_ledger(2);

    let first = StayRange::new(date!(2030 - 06 - 10), date!(2030 - 06 - 12)).unwrap();
    let second = StayRange::new(date!(2030 - 06 - 11), date!(2030 - 06 - 14)).unwrap();
    ledger.reserve(&room_type_id, &first, 1).unwrap();
    ledger.reserve(&room_type_id, &second, 1).unwrap();

    // June 11 is shared by both stays and is now full.
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 11)), 2);
    let err = ledger
        .reserve(&room_type_id, &three_nights(), 1)
        .unwrap_err();
    assert!(matches!(err, LedgerError::NoCapacity { .. }));
}

#[test]
fn test_back_to_back_stays_do_not_conflict() {
    let (ledger, room_type_id) = create_test_ledger(1);

    let first = StayRange::new(date!(2030 - 06 - 10), date!(2030 - 06 - 12)).unwrap();
    let second = StayRange::new(date!(2030 - 06 - 12), date!(2030 - 06 - 14)).unwrap();

    assert!(ledger.reserve(&room_type_id, &first, 1).is_ok());
    assert!(ledger.reserve(&room_type_id, &second, 1).is_ok());
}

#[test]
fn test_concurrent_reserves_never_oversell() {
    let (ledger, room_type_id) = create_test_ledger(5);
    let stay = three_nights();

    let granted = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = &ledger;
                let room_type_id = &room_type_id;
                let stay = &stay;
                scope.spawn(move || ledger.reserve(room_type_id, stay, 1).is_ok())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(false))
            .filter(|granted| *granted)
            .count()
    });

    assert_eq!(granted, 5);
    assert_eq!(ledger.units_held(&room_type_id, date!(2030 - 06 - 10)), 5);
}
