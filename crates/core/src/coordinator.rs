// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orchestration of the booking flow.
//!
//! The coordinator owns the [`InventoryLedger`] and drives each booking
//! through validate, reserve, confirm, and persist. Catalog lookups and
//! reservation persistence go through trait seams so callers can swap
//! implementations.

use crate::error::{BookingError, CancelError, StoreError};
use crate::ledger::{InventoryLedger, LedgerError};
use staybook_domain::{
    Hotel, HotelId, Reservation, ReservationId, ReservationStatus, RoomType, RoomTypeId, StayRange,
    UserId,
};
use time::{Date, OffsetDateTime};
use tracing::{error, info};

/// Read-only access to hotel reference data.
pub trait CatalogProvider {
    /// Looks up a hotel by identifier.
    fn hotel(&self, hotel_id: &HotelId) -> Option<Hotel>;

    /// Looks up a room type by identifier, across all hotels.
    fn room_type(&self, room_type_id: &RoomTypeId) -> Option<RoomType>;
}

/// Durable storage for reservations.
pub trait ReservationStore {
    /// Saves a reservation, replacing any existing record with the
    /// same identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write did not happen.
    fn save_reservation(&self, reservation: &Reservation) -> Result<(), StoreError>;

    /// Loads a reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read failed; a missing reservation
    /// is `Ok(None)`.
    fn load_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Reservation>, StoreError>;
}

impl<C: CatalogProvider> CatalogProvider for std::sync::Arc<C> {
    fn hotel(&self, hotel_id: &HotelId) -> Option<Hotel> {
        self.as_ref().hotel(hotel_id)
    }

    fn room_type(&self, room_type_id: &RoomTypeId) -> Option<RoomType> {
        self.as_ref().room_type(room_type_id)
    }
}

impl<S: ReservationStore> ReservationStore for std::sync::Arc<S> {
    fn save_reservation(&self, reservation: &Reservation) -> Result<(), StoreError> {
        self.as_ref().save_reservation(reservation)
    }

    fn load_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Reservation>, StoreError> {
        self.as_ref().load_reservation(reservation_id)
    }
}

/// A caller's request to book a stay.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// The hotel to book.
    pub hotel_id: HotelId,
    /// The room type to book.
    pub room_type_id: RoomTypeId,
    /// First occupied night.
    pub check_in: Date,
    /// Exclusive check-out date.
    pub check_out: Date,
    /// Rooms requested (1-10).
    pub room_count: u32,
    /// Guests staying.
    pub guest_count: u32,
    /// Free-form guest requests.
    pub special_requests: Option<String>,
    /// The booking user.
    pub user_id: UserId,
}

/// Drives bookings from request to confirmed reservation.
#[derive(Debug)]
pub struct BookingCoordinator<C, S> {
    catalog: C,
    store: S,
    ledger: InventoryLedger,
}

impl<C: CatalogProvider, S: ReservationStore> BookingCoordinator<C, S> {
    /// Creates a coordinator over the given catalog and store, with an
    /// empty ledger. Room types are registered lazily on first use.
    #[must_use]
    pub fn new(catalog: C, store: S) -> Self {
        Self {
            catalog,
            store,
            ledger: InventoryLedger::new(),
        }
    }

    /// Returns the catalog this coordinator reads from.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the ledger this coordinator holds inventory in.
    pub const fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Books a stay end to end.
    ///
    /// The flow is: resolve the hotel and room type, validate the
    /// request into a draft, hold inventory, confirm with the final
    /// price, persist. If the persist fails, the hold is released and
    /// the attempt is rejected, so inventory is never leaked.
    ///
    /// # Errors
    ///
    /// - `BookingError::HotelNotFound` / `RoomTypeNotFound` when the
    ///   catalog has no match
    /// - `BookingError::Validation` listing every violated field
    /// - `BookingError::NoAvailability` naming the first conflicting
    ///   date
    /// - `BookingError::PersistenceFailed` after a failed store write
    pub fn book(&self, request: &BookingRequest) -> Result<Reservation, BookingError> {
        let hotel = self
            .catalog
            .hotel(&request.hotel_id)
            .ok_or_else(|| BookingError::HotelNotFound(request.hotel_id.clone()))?;
        let room_type = hotel
            .room_type(&request.room_type_id)
            .cloned()
            .ok_or_else(|| BookingError::RoomTypeNotFound(request.room_type_id.clone()))?;

        let now = OffsetDateTime::now_utc();
        let draft = Reservation::draft(
            Self::generate_reservation_id(),
            request.hotel_id.clone(),
            request.room_type_id.clone(),
            request.check_in,
            request.check_out,
            request.room_count,
            request.guest_count,
            request.special_requests.clone(),
            request.user_id.clone(),
            now.date(),
            now,
        )?;

        self.ledger.register_room_type(&room_type);
        let token = match self
            .ledger
            .reserve(&request.room_type_id, &draft.stay, request.room_count)
        {
            Ok(token) => token,
            Err(LedgerError::NoCapacity { date, .. }) => {
                let rejected: Reservation =
                    draft.reject(&format!("No availability on {date}"))?;
                info!(
                    reservation_id = %rejected.reservation_id,
                    %date,
                    "Booking rejected: no availability"
                );
                return Err(BookingError::NoAvailability { date });
            }
            Err(err @ LedgerError::UnknownRoomType(_)) => {
                return Err(BookingError::from(err));
            }
        };

        let held = draft.mark_held(token.clone())?;
        let confirmed = held.confirm(hotel.base_price)?;

        if let Err(store_err) = self.store.save_reservation(&confirmed) {
            error!(
                reservation_id = %confirmed.reservation_id,
                error = %store_err,
                "Failed to persist reservation; releasing hold"
            );
            self.ledger.release(&token);
            let rejected: Reservation = draft.reject("Reservation could not be persisted")?;
            info!(
                reservation_id = %rejected.reservation_id,
                "Booking rejected after persistence failure"
            );
            return Err(BookingError::PersistenceFailed);
        }

        info!(
            reservation_id = %confirmed.reservation_id,
            hotel_id = %confirmed.hotel_id,
            total_price = confirmed.total_price,
            "Booking confirmed"
        );
        Ok(confirmed)
    }

    /// Cancels a held or confirmed reservation, returning its inventory.
    ///
    /// The hold is released before the cancelled state is written, so a
    /// failed write can be retried safely; releasing again is a no-op.
    ///
    /// # Errors
    ///
    /// - `CancelError::NotFound` when no reservation matches
    /// - `CancelError::AlreadyTerminal` when the reservation is not in
    ///   `Held` or `Confirmed`
    /// - `CancelError::PersistenceFailed` when the store read or write
    ///   fails
    pub fn cancel(&self, reservation_id: &ReservationId) -> Result<Reservation, CancelError> {
        let reservation = self
            .store
            .load_reservation(reservation_id)
            .map_err(|store_err| {
                error!(%reservation_id, error = %store_err, "Failed to load reservation");
                CancelError::PersistenceFailed
            })?
            .ok_or_else(|| CancelError::NotFound(reservation_id.clone()))?;

        if !matches!(
            reservation.status,
            ReservationStatus::Held | ReservationStatus::Confirmed
        ) {
            return Err(CancelError::AlreadyTerminal {
                status: reservation.status,
            });
        }

        if let Some(token) = reservation.hold_token() {
            self.ledger.release(token);
        }

        let cancelled = reservation.cancel().map_err(|_| CancelError::AlreadyTerminal {
            status: reservation.status,
        })?;

        self.store
            .save_reservation(&cancelled)
            .map_err(|store_err| {
                error!(%reservation_id, error = %store_err, "Failed to persist cancellation");
                CancelError::PersistenceFailed
            })?;

        info!(%reservation_id, "Reservation cancelled");
        Ok(cancelled)
    }

    /// Reports whether the stay can currently be booked.
    ///
    /// Registers the room type from the catalog on first use, so an
    /// untouched room type reports its full unit count as free.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::RoomTypeNotFound` when neither the ledger
    /// nor the catalog knows the room type.
    pub fn availability(
        &self,
        room_type_id: &RoomTypeId,
        stay: &StayRange,
        room_count: u32,
    ) -> Result<bool, BookingError> {
        if !self.ledger.is_registered(room_type_id) {
            let room_type = self
                .catalog
                .room_type(room_type_id)
                .ok_or_else(|| BookingError::RoomTypeNotFound(room_type_id.clone()))?;
            self.ledger.register_room_type(&room_type);
        }
        self.ledger
            .check_availability(room_type_id, stay, room_count)
            .map_err(BookingError::from)
    }

    fn generate_reservation_id() -> ReservationId {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp();
        let suffix: u64 = rand::random();
        ReservationId::new(&format!("res-{timestamp}-{suffix:016x}"))
    }
}
