// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod reservation;
mod review;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use reservation::{HoldToken, Reservation, ReservationStatus};
pub use review::{RatingSummary, Review, ReviewId};
pub use stay::StayRange;
pub use types::{Hotel, HotelId, ReservationId, RoomType, RoomTypeId, UserId};
pub use validation::{
    FieldViolation, MAX_COMMENT_LEN, MAX_ROOM_COUNT, MAX_STAR_RATING, MIN_COMMENT_LEN,
    MIN_ROOM_COUNT, MIN_STAR_RATING, max_guests_for, validate_booking_fields,
    validate_review_fields,
};
