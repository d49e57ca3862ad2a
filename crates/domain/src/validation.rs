// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::stay::StayRange;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use time::Date;

/// Minimum rooms in a single booking.
pub const MIN_ROOM_COUNT: u32 = 1;
/// Maximum rooms in a single booking.
pub const MAX_ROOM_COUNT: u32 = 10;
/// Guests allowed per booked room.
pub const GUESTS_PER_ROOM: u32 = 4;
/// Minimum review comment length in characters.
pub const MIN_COMMENT_LEN: usize = 10;
/// Maximum review comment length in characters.
pub const MAX_COMMENT_LEN: usize = 500;
/// Minimum review star rating.
pub const MIN_STAR_RATING: u8 = 1;
/// Maximum review star rating.
pub const MAX_STAR_RATING: u8 = 5;

/// A single violated field with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The request field that failed validation.
    pub field: String,
    /// Why the field was rejected.
    pub reason: String,
}

impl FieldViolation {
    /// Creates a new `FieldViolation`.
    #[must_use]
    pub fn new(field: &str, reason: String) -> Self {
        Self {
            field: field.to_owned(),
            reason,
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Returns the guest ceiling for a requested room count.
///
/// The room count is clamped into its own valid range first, so an
/// out-of-range room count still yields a meaningful guest limit.
#[must_use]
pub const fn max_guests_for(room_count: u32) -> u32 {
    let effective: u32 = if room_count < MIN_ROOM_COUNT {
        MIN_ROOM_COUNT
    } else if room_count > MAX_ROOM_COUNT {
        MAX_ROOM_COUNT
    } else {
        room_count
    };
    effective * GUESTS_PER_ROOM
}

/// Validates every field of a booking request, collecting all
/// violations rather than failing fast on the first.
///
/// Rules:
/// - check-in must not be before `today`
/// - check-out must be strictly after check-in
/// - room count must be between 1 and 10
/// - guest count must be between 1 and `room_count * 4`
/// - the owning user identifier must be non-empty
///
/// # Returns
///
/// The validated [`StayRange`] when every rule passes.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying one [`FieldViolation`]
/// per failed rule.
pub fn validate_booking_fields(
    check_in: Date,
    check_out: Date,
    room_count: u32,
    guest_count: u32,
    user_id: &UserId,
    today: Date,
) -> Result<StayRange, DomainError> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    if check_in < today {
        violations.push(FieldViolation::new(
            "check_in",
            String::from("Check-in date cannot be in the past"),
        ));
    }

    if check_out <= check_in {
        violations.push(FieldViolation::new(
            "check_out",
            String::from("Check-out date must be after check-in date"),
        ));
    }

    if !(MIN_ROOM_COUNT..=MAX_ROOM_COUNT).contains(&room_count) {
        violations.push(FieldViolation::new(
            "room_count",
            format!("Number of rooms must be between {MIN_ROOM_COUNT} and {MAX_ROOM_COUNT}"),
        ));
    }

    let guest_limit: u32 = max_guests_for(room_count);
    if guest_count < 1 || guest_count > guest_limit {
        violations.push(FieldViolation::new(
            "guest_count",
            format!("Number of guests must be between 1 and {guest_limit}"),
        ));
    }

    if user_id.value().trim().is_empty() {
        violations.push(FieldViolation::new(
            "user_id",
            String::from("A booking must be owned by a signed-in user"),
        ));
    }

    if !violations.is_empty() {
        return Err(DomainError::Validation(violations));
    }

    StayRange::new(check_in, check_out)
}

/// Validates review fields, collecting all violations.
///
/// Rules:
/// - rating must be between 1 and 5
/// - the comment (trimmed) must be between 10 and 500 characters
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying one [`FieldViolation`]
/// per failed rule.
pub fn validate_review_fields(rating: u8, comment: &str) -> Result<(), DomainError> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    if !(MIN_STAR_RATING..=MAX_STAR_RATING).contains(&rating) {
        violations.push(FieldViolation::new(
            "rating",
            format!("Rating must be between {MIN_STAR_RATING} and {MAX_STAR_RATING} stars"),
        ));
    }

    let comment_len: usize = comment.trim().chars().count();
    if comment_len < MIN_COMMENT_LEN {
        violations.push(FieldViolation::new(
            "comment",
            format!("Comment must be at least {MIN_COMMENT_LEN} characters"),
        ));
    } else if comment_len > MAX_COMMENT_LEN {
        violations.push(FieldViolation::new(
            "comment",
            format!("Comment must be at most {MAX_COMMENT_LEN} characters"),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(violations))
    }
}
