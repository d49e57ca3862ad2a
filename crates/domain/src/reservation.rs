// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation lifecycle and transition logic.
//!
//! A reservation moves `Draft -> Held -> Confirmed`, with
//! `Draft -> Rejected` and `Held|Confirmed -> Cancelled` as the only
//! other transitions. Transition methods are pure: they return a new
//! value on success and leave `self` untouched on failure.

use crate::error::DomainError;
use crate::stay::StayRange;
use crate::types::{HotelId, ReservationId, RoomTypeId, UserId};
use crate::validation::validate_booking_fields;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Lifecycle states of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Validated request that has not yet touched inventory.
    Draft,
    /// Inventory is held but the booking is not yet final.
    Held,
    /// Booking finalized; price is fixed.
    Confirmed,
    /// Attempt failed before any hold was kept (capacity or persistence).
    Rejected,
    /// Explicitly cancelled; held inventory has been returned.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Held => "held",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if no further transition is possible from this status.
    ///
    /// `Confirmed` is not terminal: it may still be cancelled.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Held
    /// - Draft → Rejected
    /// - Held → Confirmed
    /// - Held → Cancelled
    /// - Confirmed → Cancelled
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Held | Self::Rejected)
                | (Self::Held, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "held" => Ok(Self::Held),
            "confirmed" => Ok(Self::Confirmed),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_owned())),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque reference to a granted inventory hold.
///
/// Issued by the Inventory Ledger on a successful reserve and required
/// to release the exact same (room type, date set, quantity) later.
/// Callers must not construct tokens for holds that were never granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldToken {
    /// Ledger-assigned unique token number.
    token_id: u64,
    /// The room type the hold applies to.
    room_type_id: RoomTypeId,
    /// The exact date set held.
    stay: StayRange,
    /// Units held per date.
    room_count: u32,
}

impl HoldToken {
    /// Creates a new `HoldToken`. Intended for the Inventory Ledger only.
    #[must_use]
    pub const fn new(
        token_id: u64,
        room_type_id: RoomTypeId,
        stay: StayRange,
        room_count: u32,
    ) -> Self {
        Self {
            token_id,
            room_type_id,
            stay,
            room_count,
        }
    }

    /// Returns the ledger-assigned token number.
    #[must_use]
    pub const fn token_id(&self) -> u64 {
        self.token_id
    }

    /// Returns the room type this hold applies to.
    #[must_use]
    pub const fn room_type_id(&self) -> &RoomTypeId {
        &self.room_type_id
    }

    /// Returns the exact date set held.
    #[must_use]
    pub const fn stay(&self) -> &StayRange {
        &self.stay
    }

    /// Returns the units held per date.
    #[must_use]
    pub const fn room_count(&self) -> u32 {
        self.room_count
    }
}

/// A single booking attempt's reservation.
///
/// Created in `Draft` by the Booking Coordinator; the price is computed
/// only at confirmation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The reservation identifier.
    pub reservation_id: ReservationId,
    /// The booked hotel.
    pub hotel_id: HotelId,
    /// The booked room type.
    pub room_type_id: RoomTypeId,
    /// The stay interval.
    pub stay: StayRange,
    /// Rooms booked (1-10).
    pub room_count: u32,
    /// Guests staying (1 to `room_count * 4`).
    pub guest_count: u32,
    /// Current lifecycle status.
    pub status: ReservationStatus,
    /// Final price in minor currency units; set at confirmation.
    pub total_price: Option<i64>,
    /// Why the attempt was rejected, when status is `Rejected`.
    pub rejection_reason: Option<String>,
    /// Free-form guest requests captured at booking time.
    pub special_requests: Option<String>,
    /// When the draft was created.
    pub created_at: OffsetDateTime,
    /// The owning user.
    pub user_id: UserId,
    /// The inventory hold backing this reservation, once held.
    hold_token: Option<HoldToken>,
}

impl Reservation {
    /// Creates a new reservation in `Draft` state.
    ///
    /// All field rules are validated up front and every violation is
    /// collected into a single error. A draft has not touched the
    /// Inventory Ledger.
    ///
    /// # Arguments
    ///
    /// * `today` - The caller's current date, used for the
    ///   check-in-not-in-the-past rule
    /// * `created_at` - Creation timestamp recorded on the draft
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` listing every violated field.
    #[allow(clippy::too_many_arguments)]
    pub fn draft(
        reservation_id: ReservationId,
        hotel_id: HotelId,
        room_type_id: RoomTypeId,
        check_in: Date,
        check_out: Date,
        room_count: u32,
        guest_count: u32,
        special_requests: Option<String>,
        user_id: UserId,
        today: Date,
        created_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let stay: StayRange = validate_booking_fields(
            check_in,
            check_out,
            room_count,
            guest_count,
            &user_id,
            today,
        )?;

        Ok(Self {
            reservation_id,
            hotel_id,
            room_type_id,
            stay,
            room_count,
            guest_count,
            status: ReservationStatus::Draft,
            total_price: None,
            rejection_reason: None,
            special_requests,
            created_at,
            user_id,
            hold_token: None,
        })
    }

    /// Returns the inventory hold backing this reservation, if any.
    #[must_use]
    pub const fn hold_token(&self) -> Option<&HoldToken> {
        self.hold_token.as_ref()
    }

    fn ensure_transition(&self, attempted: ReservationStatus) -> Result<(), DomainError> {
        if self.status.can_transition_to(attempted) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.status,
                attempted,
            })
        }
    }

    /// Attaches a granted inventory hold, moving `Draft` → `Held`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the reservation
    /// is in `Draft`.
    pub fn mark_held(&self, token: HoldToken) -> Result<Self, DomainError> {
        self.ensure_transition(ReservationStatus::Held)?;
        let mut next: Self = self.clone();
        next.status = ReservationStatus::Held;
        next.hold_token = Some(token);
        Ok(next)
    }

    /// Finalizes the booking, moving `Held` → `Confirmed`.
    ///
    /// Computes the immutable final price as
    /// `nights * base_price * room_count`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the reservation
    /// is in `Held`.
    pub fn confirm(&self, base_price: i64) -> Result<Self, DomainError> {
        self.ensure_transition(ReservationStatus::Confirmed)?;
        let mut next: Self = self.clone();
        next.status = ReservationStatus::Confirmed;
        next.total_price = Some(self.stay.nights() * base_price * i64::from(self.room_count));
        Ok(next)
    }

    /// Records a failed attempt, moving `Draft` → `Rejected`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the reservation
    /// is in `Draft`.
    pub fn reject(&self, reason: &str) -> Result<Self, DomainError> {
        self.ensure_transition(ReservationStatus::Rejected)?;
        let mut next: Self = self.clone();
        next.status = ReservationStatus::Rejected;
        next.rejection_reason = Some(reason.to_owned());
        Ok(next)
    }

    /// Cancels the booking, moving `Held` or `Confirmed` → `Cancelled`.
    ///
    /// Releasing the associated inventory hold is the Booking
    /// Coordinator's responsibility, not the state machine's.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the reservation
    /// is in `Held` or `Confirmed`.
    pub fn cancel(&self) -> Result<Self, DomainError> {
        self.ensure_transition(ReservationStatus::Cancelled)?;
        let mut next: Self = self.clone();
        next.status = ReservationStatus::Cancelled;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use time::macros::{date, datetime};

    fn draft_reservation() -> Reservation {
        Reservation::draft(
            ReservationId::new("res-1"),
            HotelId::new("hotel-1"),
            RoomTypeId::new("hotel-1-deluxe"),
            date!(2024 - 02 - 15),
            date!(2024 - 02 - 18),
            1,
            2,
            None,
            UserId::new("user-1"),
            date!(2024 - 02 - 01),
            datetime!(2024-02-01 12:00 UTC),
        )
        .unwrap()
    }

    fn hold_token() -> HoldToken {
        HoldToken::new(
            1,
            RoomTypeId::new("hotel-1-deluxe"),
            StayRange::new(date!(2024 - 02 - 15), date!(2024 - 02 - 18)).unwrap(),
            1,
        )
    }

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            ReservationStatus::Draft,
            ReservationStatus::Held,
            ReservationStatus::Confirmed,
            ReservationStatus::Rejected,
            ReservationStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match ReservationStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = ReservationStatus::parse_str("pending");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ReservationStatus::Draft.is_terminal());
        assert!(!ReservationStatus::Held.is_terminal());
        assert!(!ReservationStatus::Confirmed.is_terminal());
        assert!(ReservationStatus::Rejected.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_draft_transitions() {
        let draft = draft_reservation();

        assert!(draft.mark_held(hold_token()).is_ok());
        assert!(draft.reject("no capacity").is_ok());
        assert!(draft.confirm(299).is_err());
        assert!(draft.cancel().is_err());
    }

    #[test]
    fn test_held_transitions() {
        let held = draft_reservation().mark_held(hold_token()).unwrap();

        assert_eq!(held.status, ReservationStatus::Held);
        assert!(held.hold_token().is_some());
        assert!(held.confirm(299).is_ok());
        assert!(held.cancel().is_ok());
        assert!(held.reject("late").is_err());
        assert!(held.mark_held(hold_token()).is_err());
    }

    #[test]
    fn test_confirm_computes_price() {
        let confirmed = draft_reservation()
            .mark_held(hold_token())
            .unwrap()
            .confirm(299)
            .unwrap();

        // 3 nights x 299 x 1 room
        assert_eq!(confirmed.total_price, Some(897));
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_confirmed_can_only_cancel() {
        let confirmed = draft_reservation()
            .mark_held(hold_token())
            .unwrap()
            .confirm(299)
            .unwrap();

        assert!(confirmed.cancel().is_ok());
        assert!(confirmed.confirm(299).is_err());
        assert!(confirmed.reject("late").is_err());
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let rejected = draft_reservation().reject("no capacity").unwrap();
        let cancelled = draft_reservation()
            .mark_held(hold_token())
            .unwrap()
            .cancel()
            .unwrap();

        for terminal in [rejected, cancelled] {
            let err = terminal.cancel().unwrap_err();
            assert!(matches!(err, DomainError::InvalidTransition { .. }));
            assert!(terminal.mark_held(hold_token()).is_err());
            assert!(terminal.confirm(299).is_err());
        }
    }

    #[test]
    fn test_failed_transition_reports_from_and_attempted() {
        let draft = draft_reservation();
        let err = draft.confirm(299).unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: ReservationStatus::Draft,
                attempted: ReservationStatus::Confirmed,
            }
        );
        // The original value is untouched.
        assert_eq!(draft.status, ReservationStatus::Draft);
        assert_eq!(draft.total_price, None);
    }
}
