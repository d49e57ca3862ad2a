// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staybook::{BookingError, CancelError};
use staybook_domain::{DomainError, FieldViolation};
use thiserror::Error;
use time::Date;

/// Request field parsing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// The value is not a calendar date.
    #[error("Invalid date '{value}' for {field}: expected YYYY-MM-DD")]
    InvalidFormat {
        /// The request field holding the value.
        field: String,
        /// The raw value received.
        value: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// One or more booking rules were violated.
    ValidationFailed {
        /// Every violated field with its reason.
        violations: Vec<FieldViolation>,
    },
    /// The stay cannot be booked; the first conflicting date is named.
    NoAvailability {
        /// The first date without enough free units.
        date: Date,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The reservation is already in a state that allows no further change.
    AlreadyFinished {
        /// The reservation's current status.
        status: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ValidationFailed { violations } => {
                write!(f, "Validation failed:")?;
                for violation in violations {
                    write!(f, " [{violation}]")?;
                }
                Ok(())
            }
            Self::NoAvailability { date } => {
                write!(f, "No availability on {date}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::AlreadyFinished { status } => {
                write!(f, "Reservation is already {status}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DateParseError> for ApiError {
    fn from(err: DateParseError) -> Self {
        match err {
            DateParseError::InvalidFormat { ref field, .. } => Self::InvalidInput {
                field: field.clone(),
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::Validation(violations) => ApiError::ValidationFailed { violations },
        DomainError::InvalidStayRange {
            check_in,
            check_out,
        } => ApiError::InvalidInput {
            field: String::from("check_out"),
            message: format!("Check-out {check_out} must be after check-in {check_in}"),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown reservation status: {value}"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

/// Translates a booking error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_booking_error(err: BookingError) -> ApiError {
    match err {
        BookingError::Validation(violations) => ApiError::ValidationFailed { violations },
        BookingError::HotelNotFound(hotel_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Hotel"),
            message: format!("Hotel '{hotel_id}' does not exist"),
        },
        BookingError::RoomTypeNotFound(room_type_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Room type"),
            message: format!("Room type '{room_type_id}' does not exist"),
        },
        BookingError::NoAvailability { date } => ApiError::NoAvailability { date },
        BookingError::PersistenceFailed => ApiError::Internal {
            message: String::from("Reservation could not be persisted"),
        },
        BookingError::Internal(message) => ApiError::Internal { message },
    }
}

/// Translates a cancellation error into an API error.
#[must_use]
pub fn translate_cancel_error(err: CancelError) -> ApiError {
    match err {
        CancelError::NotFound(reservation_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: format!("Reservation '{reservation_id}' does not exist"),
        },
        CancelError::AlreadyTerminal { status } => ApiError::AlreadyFinished {
            status: status.to_string(),
        },
        CancelError::PersistenceFailed => ApiError::Internal {
            message: String::from("Cancellation could not be persisted"),
        },
    }
}
