// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingCoordinator, BookingRequest, CatalogProvider, ReservationStore, StoreError};
use staybook_domain::{
    Hotel, HotelId, Reservation, ReservationId, RoomType, RoomTypeId, UserId,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use time::Date;
use time::macros::date;

/// Stay dates far enough in the future that the not-in-the-past rule
/// never trips in tests.
pub const CHECK_IN: Date = date!(2030 - 06 - 10);
pub const CHECK_OUT: Date = date!(2030 - 06 - 13);

// ============================================================================
// Catalog double
// ============================================================================

pub struct MemoryCatalog {
    hotels: HashMap<HotelId, Hotel>,
}

impl MemoryCatalog {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels: hotels
                .into_iter()
                .map(|hotel| (hotel.hotel_id.clone(), hotel))
                .collect(),
        }
    }
}

impl CatalogProvider for MemoryCatalog {
    fn hotel(&self, hotel_id: &HotelId) -> Option<Hotel> {
        self.hotels.get(hotel_id).cloned()
    }

    fn room_type(&self, room_type_id: &RoomTypeId) -> Option<RoomType> {
        self.hotels
            .values()
            .find_map(|hotel| hotel.room_type(room_type_id).cloned())
    }
}

// ============================================================================
// Store doubles
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    reservations: Mutex<HashMap<ReservationId, Reservation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }
}

impl ReservationStore for MemoryStore {
    fn save_reservation(&self, reservation: &Reservation) -> Result<(), StoreError> {
        self.reservations
            .lock()
            .unwrap()
            .insert(reservation.reservation_id.clone(), reservation.clone());
        Ok(())
    }

    fn load_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Reservation>, StoreError> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .get(reservation_id)
            .cloned())
    }
}

/// A store whose writes can be made to fail on demand. Reads always
/// pass through.
#[derive(Default)]
pub struct TogglingStore {
    inner: MemoryStore,
    fail_saves: AtomicBool,
}

impl TogglingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl ReservationStore for TogglingStore {
    fn save_reservation(&self, reservation: &Reservation) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::new("simulated write failure"));
        }
        self.inner.save_reservation(reservation)
    }

    fn load_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Reservation>, StoreError> {
        self.inner.load_reservation(reservation_id)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn create_test_room_type(hotel_id: &str, suffix: &str, total_units: u32) -> RoomType {
    RoomType::new(
        RoomTypeId::new(&format!("{hotel_id}-{suffix}")),
        HotelId::new(hotel_id),
        String::from("Deluxe King"),
        total_units,
        4,
    )
    .unwrap()
}

pub fn create_test_hotel(hotel_id: &str, base_price: i64, deluxe_units: u32) -> Hotel {
    Hotel::new(
        HotelId::new(hotel_id),
        String::from("Grand Plaza Hotel"),
        String::from("New York, USA"),
        String::from("123 Broadway, New York, NY 10001"),
        String::from("Luxurious hotel in the heart of the city."),
        base_price,
        5,
        vec![String::from("Free WiFi"), String::from("Spa")],
        vec![create_test_room_type(hotel_id, "deluxe", deluxe_units)],
    )
    .unwrap()
}

pub fn create_booking_request(hotel_id: &str, room_count: u32, guest_count: u32) -> BookingRequest {
    BookingRequest {
        hotel_id: HotelId::new(hotel_id),
        room_type_id: RoomTypeId::new(&format!("{hotel_id}-deluxe")),
        check_in: CHECK_IN,
        check_out: CHECK_OUT,
        room_count,
        guest_count,
        special_requests: None,
        user_id: UserId::new("user-1"),
    }
}

pub fn create_coordinator(
    base_price: i64,
    deluxe_units: u32,
) -> BookingCoordinator<MemoryCatalog, MemoryStore> {
    let catalog = MemoryCatalog::new(vec![create_test_hotel("hotel-1", base_price, deluxe_units)]);
    BookingCoordinator::new(catalog, MemoryStore::new())
}
