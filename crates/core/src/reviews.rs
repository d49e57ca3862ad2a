// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staybook_domain::{HotelId, RatingSummary, Review};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug)]
struct HotelReviews {
    summary: RatingSummary,
    /// Stored newest first.
    reviews: Vec<Review>,
}

/// Collects reviews and maintains a running rating summary per hotel.
///
/// Summaries are updated incrementally on submission; the full review
/// list is never re-scanned to answer an average.
#[derive(Debug, Default)]
pub struct ReviewAggregator {
    inner: Mutex<HashMap<HotelId, HotelReviews>>,
}

impl ReviewAggregator {
    /// Creates an aggregator with no reviews.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<HotelId, HotelReviews>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an already-validated review and returns the hotel's
    /// updated rating summary.
    pub fn add_review(&self, review: Review) -> RatingSummary {
        let mut inner = self.lock();
        let entry = inner
            .entry(review.hotel_id.clone())
            .or_insert_with(|| HotelReviews {
                summary: RatingSummary::new(review.hotel_id.clone()),
                reviews: Vec::new(),
            });
        entry.summary.record(review.rating);
        debug!(
            hotel_id = %review.hotel_id,
            rating = review.rating,
            review_count = entry.summary.review_count,
            "Recorded review"
        );
        entry.reviews.insert(0, review);
        entry.summary.clone()
    }

    /// Returns the hotel's rating summary.
    ///
    /// A hotel with no reviews reports a zero-count summary.
    #[must_use]
    pub fn summary(&self, hotel_id: &HotelId) -> RatingSummary {
        self.lock()
            .get(hotel_id)
            .map_or_else(|| RatingSummary::new(hotel_id.clone()), |entry| {
                entry.summary.clone()
            })
    }

    /// Returns the hotel's reviews, newest first.
    #[must_use]
    pub fn reviews(&self, hotel_id: &HotelId) -> Vec<Review> {
        self.lock()
            .get(hotel_id)
            .map_or_else(Vec::new, |entry| entry.reviews.clone())
    }
}
