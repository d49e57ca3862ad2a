// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use time::Date;

/// API request to book a stay.
///
/// This DTO is distinct from domain types and represents the API contract.
/// Dates arrive as `YYYY-MM-DD` strings and are parsed at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookHotelRequest {
    /// The hotel to book.
    pub hotel_id: String,
    /// The room type to book.
    pub room_type_id: String,
    /// Check-in date (ISO 8601).
    pub check_in: String,
    /// Check-out date (ISO 8601, exclusive).
    pub check_out: String,
    /// Rooms requested (1-10).
    pub room_count: u32,
    /// Guests staying.
    pub guest_count: u32,
    /// Free-form guest requests.
    pub special_requests: Option<String>,
    /// The booking user.
    pub user_id: String,
}

/// API response for a confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookHotelResponse {
    /// The assigned reservation identifier.
    pub reservation_id: String,
    /// The booked hotel.
    pub hotel_id: String,
    /// The booked room type.
    pub room_type_id: String,
    /// Check-in date.
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of nights.
    pub nights: i64,
    /// Rooms booked.
    pub room_count: u32,
    /// Guests staying.
    pub guest_count: u32,
    /// Reservation status after booking.
    pub status: String,
    /// Final price in minor currency units.
    pub total_price: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelBookingResponse {
    /// The cancelled reservation.
    pub reservation_id: String,
    /// Reservation status after cancellation.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to check whether a stay can be booked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityRequest {
    /// The room type to check.
    pub room_type_id: String,
    /// Check-in date (ISO 8601).
    pub check_in: String,
    /// Check-out date (ISO 8601, exclusive).
    pub check_out: String,
    /// Rooms wanted.
    pub room_count: u32,
}

/// API response for an availability check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityResponse {
    /// The checked room type.
    pub room_type_id: String,
    /// Check-in date.
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Rooms wanted.
    pub room_count: u32,
    /// Whether every night of the stay has enough free units.
    pub available: bool,
}

/// Summary of a hotel for catalog listings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HotelSummary {
    /// The hotel identifier.
    pub hotel_id: String,
    /// The hotel name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Nightly base price in minor currency units.
    pub base_price: i64,
    /// Star rating (1-5).
    pub stars: u8,
    /// Amenities offered.
    pub amenities: Vec<String>,
    /// Average guest rating, 0 when unreviewed.
    pub average_rating: f64,
    /// Number of guest reviews.
    pub review_count: u64,
}

/// A bookable room category in a hotel details response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoomTypeInfo {
    /// The room type identifier.
    pub room_type_id: String,
    /// Display name.
    pub name: String,
    /// Total number of physical units.
    pub total_units: u32,
    /// Maximum guests a single unit sleeps.
    pub capacity_per_unit: u32,
}

/// API response with full details for one hotel.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HotelDetailsResponse {
    /// The hotel summary.
    #[serde(flatten)]
    pub summary: HotelSummary,
    /// Street address.
    pub address: String,
    /// Marketing description.
    pub description: String,
    /// The bookable room categories.
    pub room_types: Vec<RoomTypeInfo>,
}

/// API response listing the hotel catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListHotelsResponse {
    /// Every hotel in the catalog.
    pub hotels: Vec<HotelSummary>,
}

/// API request to submit a guest review.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitReviewRequest {
    /// The authoring user.
    pub user_id: String,
    /// Display name of the author.
    pub author_name: String,
    /// Star rating (1-5).
    pub rating: u8,
    /// Review text (10-500 characters).
    pub comment: String,
}

/// Running rating statistics for a hotel.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatingSummaryInfo {
    /// Average guest rating, 0 when unreviewed.
    pub average_rating: f64,
    /// Number of guest reviews.
    pub review_count: u64,
}

/// API response for an accepted review.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubmitReviewResponse {
    /// The assigned review identifier.
    pub review_id: String,
    /// The reviewed hotel.
    pub hotel_id: String,
    /// The hotel's rating summary after this review.
    pub summary: RatingSummaryInfo,
    /// A success message.
    pub message: String,
}

/// A single guest review in a listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReviewInfo {
    /// The review identifier.
    pub review_id: String,
    /// Display name of the author.
    pub author_name: String,
    /// Star rating (1-5).
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// When the review was written.
    pub created_on: Date,
}

/// API response listing a hotel's reviews.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListReviewsResponse {
    /// The reviewed hotel.
    pub hotel_id: String,
    /// The hotel's rating summary.
    pub summary: RatingSummaryInfo,
    /// Reviews, newest first.
    pub reviews: Vec<ReviewInfo>,
}
