// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::reservation::ReservationStatus;
use crate::validation::FieldViolation;

/// Errors that can occur during domain validation and state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more request fields violated a domain rule.
    ///
    /// All violated fields are collected before returning, so a caller
    /// can surface every problem in one pass instead of fixing them
    /// one at a time.
    Validation(Vec<FieldViolation>),
    /// Check-out is not strictly after check-in.
    InvalidStayRange {
        /// The requested check-in date.
        check_in: time::Date,
        /// The requested check-out date.
        check_out: time::Date,
    },
    /// A reservation transition was attempted that the lifecycle does not permit.
    InvalidTransition {
        /// The reservation's current status.
        from: ReservationStatus,
        /// The status the caller attempted to move to.
        attempted: ReservationStatus,
    },
    /// Star rating is outside the 1-5 range.
    InvalidStarRating(u8),
    /// Nightly base price must be a positive amount of minor currency units.
    InvalidBasePrice(i64),
    /// A room type must sleep at least one guest per unit.
    InvalidRoomCapacity {
        /// The offending room type identifier.
        room_type: String,
    },
    /// Failed to parse a reservation status from its string form.
    InvalidStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(violations) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                write!(f, "Validation failed for fields: {}", fields.join(", "))
            }
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Invalid stay range: check-out {check_out} must be after check-in {check_in}"
                )
            }
            Self::InvalidTransition { from, attempted } => {
                write!(
                    f,
                    "Invalid reservation transition from '{}' to '{}'",
                    from.as_str(),
                    attempted.as_str()
                )
            }
            Self::InvalidStarRating(stars) => {
                write!(f, "Star rating must be between 1 and 5, got {stars}")
            }
            Self::InvalidBasePrice(price) => {
                write!(f, "Base price must be positive, got {price}")
            }
            Self::InvalidRoomCapacity { room_type } => {
                write!(
                    f,
                    "Room type '{room_type}' must hold at least one guest per unit"
                )
            }
            Self::InvalidStatus(status) => {
                write!(f, "Unknown reservation status: {status}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
