// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{HotelId, UserId};
use crate::validation::validate_review_fields;
use serde::{Deserialize, Serialize};
use time::Date;

/// Identifies a single review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId {
    /// The identifier value.
    value: String,
}

impl ReviewId {
    /// Creates a new `ReviewId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A guest review of a hotel.
///
/// Reviews are append-only: once accepted they are never edited or
/// deleted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// The review identifier.
    pub review_id: ReviewId,
    /// The reviewed hotel.
    pub hotel_id: HotelId,
    /// The authoring user.
    pub author_id: UserId,
    /// Display name of the author.
    pub author_name: String,
    /// Star rating (1-5).
    pub rating: u8,
    /// Review text (10-500 characters).
    pub comment: String,
    /// When the review was written.
    pub created_on: Date,
}

impl Review {
    /// Creates a new `Review`, validating rating and comment length.
    ///
    /// The comment is stored trimmed, matching what was validated.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` listing every violated field:
    /// - rating outside 1-5
    /// - trimmed comment shorter than 10 or longer than 500 characters
    pub fn new(
        review_id: ReviewId,
        hotel_id: HotelId,
        author_id: UserId,
        author_name: String,
        rating: u8,
        comment: &str,
        created_on: Date,
    ) -> Result<Self, DomainError> {
        validate_review_fields(rating, comment)?;
        Ok(Self {
            review_id,
            hotel_id,
            author_id,
            author_name,
            rating,
            comment: comment.trim().to_owned(),
            created_on,
        })
    }
}

/// Running rating statistics for one hotel.
///
/// Updated incrementally on each appended review; never recomputed
/// from full history, keeping the cost O(1) per review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// The summarized hotel.
    pub hotel_id: HotelId,
    /// Number of accepted reviews.
    pub review_count: u64,
    /// Sum of all accepted ratings.
    pub rating_sum: u64,
}

impl RatingSummary {
    /// Creates an empty summary for a hotel.
    #[must_use]
    pub const fn new(hotel_id: HotelId) -> Self {
        Self {
            hotel_id,
            review_count: 0,
            rating_sum: 0,
        }
    }

    /// Folds one accepted rating into the summary.
    pub fn record(&mut self, rating: u8) {
        self.review_count += 1;
        self.rating_sum += u64::from(rating);
    }

    /// Returns the average rating, or 0 when no reviews exist.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.review_count == 0 {
            0.0
        } else {
            self.rating_sum as f64 / self.review_count as f64
        }
    }
}
