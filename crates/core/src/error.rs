// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::LedgerError;
use staybook_domain::{
    DomainError, FieldViolation, HotelId, ReservationId, ReservationStatus, RoomTypeId,
};
use time::Date;

/// Failure reported by a reservation store implementation.
///
/// The coordinator does not inspect the cause; it only needs to know
/// that the write or read did not happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Human-readable description of the failure.
    message: String,
}

impl StoreError {
    /// Creates a new `StoreError` with the given message.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }

    /// Returns the failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reservation store failure: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Errors that can occur while booking a stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// One or more request fields violated the booking rules.
    Validation(Vec<FieldViolation>),
    /// The requested hotel does not exist in the catalog.
    HotelNotFound(HotelId),
    /// The requested room type does not exist for the hotel.
    RoomTypeNotFound(RoomTypeId),
    /// At least one night of the stay lacks capacity; the first
    /// conflicting date is reported.
    NoAvailability {
        /// The first date in the stay without enough free units.
        date: Date,
    },
    /// The reservation could not be persisted; the hold was released.
    PersistenceFailed,
    /// An internal invariant was broken.
    Internal(String),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(violations) => {
                write!(f, "Booking request invalid:")?;
                for violation in violations {
                    write!(f, " [{violation}]")?;
                }
                Ok(())
            }
            Self::HotelNotFound(hotel_id) => {
                write!(f, "Hotel not found: {hotel_id}")
            }
            Self::RoomTypeNotFound(room_type_id) => {
                write!(f, "Room type not found: {room_type_id}")
            }
            Self::NoAvailability { date } => {
                write!(f, "No availability on {date}")
            }
            Self::PersistenceFailed => {
                write!(f, "Reservation could not be persisted")
            }
            Self::Internal(message) => {
                write!(f, "Internal booking error: {message}")
            }
        }
    }
}

impl std::error::Error for BookingError {}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(violations) => Self::Validation(violations),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<LedgerError> for BookingError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownRoomType(room_type_id) => Self::RoomTypeNotFound(room_type_id),
            LedgerError::NoCapacity { date, .. } => Self::NoAvailability { date },
        }
    }
}

/// Errors that can occur while cancelling a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelError {
    /// No reservation exists with the given identifier.
    NotFound(ReservationId),
    /// The reservation is already in a state that cannot be cancelled.
    AlreadyTerminal {
        /// The reservation's current status.
        status: ReservationStatus,
    },
    /// The cancelled state could not be persisted.
    PersistenceFailed,
}

impl std::fmt::Display for CancelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(reservation_id) => {
                write!(f, "Reservation not found: {reservation_id}")
            }
            Self::AlreadyTerminal { status } => {
                write!(f, "Reservation cannot be cancelled from status: {status}")
            }
            Self::PersistenceFailed => {
                write!(f, "Cancellation could not be persisted")
            }
        }
    }
}

impl std::error::Error for CancelError {}
