// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the StayBook booking engine.
//!
//! Translates transport-agnostic requests into core operations and
//! core/domain errors into the API error contract. No HTTP types live
//! here; the server crate owns the wire.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, DateParseError, translate_booking_error, translate_cancel_error,
    translate_domain_error,
};
pub use handlers::{
    book_hotel, cancel_booking, check_availability, get_hotel, list_hotels, list_reviews,
    submit_review,
};
pub use request_response::{
    AvailabilityRequest, AvailabilityResponse, BookHotelRequest, BookHotelResponse,
    CancelBookingResponse, HotelDetailsResponse, HotelSummary, ListHotelsResponse,
    ListReviewsResponse, RatingSummaryInfo, ReviewInfo, RoomTypeInfo, SubmitReviewRequest,
    SubmitReviewResponse,
};
