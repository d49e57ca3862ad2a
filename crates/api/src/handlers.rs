// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking, availability, and review operations.

use staybook::{
    BookingCoordinator, BookingRequest, CatalogProvider, ReservationStore, ReviewAggregator,
};
use staybook_domain::{
    Hotel, HotelId, RatingSummary, ReservationId, Review, ReviewId, RoomTypeId, StayRange, UserId,
};
use staybook_persistence::StaticCatalog;
use time::{Date, OffsetDateTime};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::info;

use crate::error::{
    ApiError, DateParseError, translate_booking_error, translate_cancel_error,
    translate_domain_error,
};
use crate::request_response::{
    AvailabilityRequest, AvailabilityResponse, BookHotelRequest, BookHotelResponse,
    CancelBookingResponse, HotelDetailsResponse, HotelSummary, ListHotelsResponse,
    ListReviewsResponse, RatingSummaryInfo, ReviewInfo, RoomTypeInfo, SubmitReviewRequest,
    SubmitReviewResponse,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn parse_date(field: &str, value: &str) -> Result<Date, DateParseError> {
    Date::parse(value, DATE_FORMAT).map_err(|_| DateParseError::InvalidFormat {
        field: field.to_owned(),
        value: value.to_owned(),
    })
}

fn summarize_hotel(hotel: &Hotel, summary: &RatingSummary) -> HotelSummary {
    HotelSummary {
        hotel_id: hotel.hotel_id.value().to_owned(),
        name: hotel.name.clone(),
        location: hotel.location.clone(),
        base_price: hotel.base_price,
        stars: hotel.stars,
        amenities: hotel.amenities.clone(),
        average_rating: summary.average(),
        review_count: summary.review_count,
    }
}

/// Books a stay via the API boundary.
///
/// Parses the request dates, drives the booking through the
/// coordinator, and translates any failure into the API error
/// contract.
///
/// # Errors
///
/// Returns an error if a date does not parse, the hotel or room type
/// is unknown, a booking rule is violated, the stay has no
/// availability, or the reservation cannot be persisted.
pub fn book_hotel<C: CatalogProvider, S: ReservationStore>(
    coordinator: &BookingCoordinator<C, S>,
    request: &BookHotelRequest,
) -> Result<BookHotelResponse, ApiError> {
    let check_in: Date = parse_date("check_in", &request.check_in)?;
    let check_out: Date = parse_date("check_out", &request.check_out)?;

    let booking = BookingRequest {
        hotel_id: HotelId::new(&request.hotel_id),
        room_type_id: RoomTypeId::new(&request.room_type_id),
        check_in,
        check_out,
        room_count: request.room_count,
        guest_count: request.guest_count,
        special_requests: request.special_requests.clone(),
        user_id: UserId::new(&request.user_id),
    };

    let reservation = coordinator
        .book(&booking)
        .map_err(translate_booking_error)?;
    let total_price: i64 = reservation.total_price.ok_or_else(|| ApiError::Internal {
        message: String::from("Confirmed reservation is missing its price"),
    })?;

    info!(
        reservation_id = %reservation.reservation_id,
        hotel_id = %request.hotel_id,
        "Booked stay"
    );
    Ok(BookHotelResponse {
        reservation_id: reservation.reservation_id.value().to_owned(),
        hotel_id: request.hotel_id.clone(),
        room_type_id: request.room_type_id.clone(),
        check_in,
        check_out,
        nights: reservation.stay.nights(),
        room_count: reservation.room_count,
        guest_count: reservation.guest_count,
        status: reservation.status.to_string(),
        total_price,
        message: format!(
            "Booking confirmed: {} night(s) at {} for a total of {}",
            reservation.stay.nights(),
            request.hotel_id,
            total_price
        ),
    })
}

/// Cancels a reservation via the API boundary.
///
/// # Errors
///
/// Returns an error if the reservation does not exist, is already in
/// a final state, or the cancellation cannot be persisted.
pub fn cancel_booking<C: CatalogProvider, S: ReservationStore>(
    coordinator: &BookingCoordinator<C, S>,
    reservation_id: &str,
) -> Result<CancelBookingResponse, ApiError> {
    let cancelled = coordinator
        .cancel(&ReservationId::new(reservation_id))
        .map_err(translate_cancel_error)?;

    info!(%reservation_id, "Cancelled reservation");
    Ok(CancelBookingResponse {
        reservation_id: reservation_id.to_owned(),
        status: cancelled.status.to_string(),
        message: String::from("Reservation cancelled; held rooms have been returned"),
    })
}

/// Checks whether a stay can currently be booked.
///
/// # Errors
///
/// Returns an error if a date does not parse, the range is inverted,
/// or the room type is unknown.
pub fn check_availability<C: CatalogProvider, S: ReservationStore>(
    coordinator: &BookingCoordinator<C, S>,
    request: &AvailabilityRequest,
) -> Result<AvailabilityResponse, ApiError> {
    let check_in: Date = parse_date("check_in", &request.check_in)?;
    let check_out: Date = parse_date("check_out", &request.check_out)?;
    let stay = StayRange::new(check_in, check_out).map_err(translate_domain_error)?;

    let available: bool = coordinator
        .availability(&RoomTypeId::new(&request.room_type_id), &stay, request.room_count)
        .map_err(translate_booking_error)?;

    Ok(AvailabilityResponse {
        room_type_id: request.room_type_id.clone(),
        check_in,
        check_out,
        room_count: request.room_count,
        available,
    })
}

/// Lists the hotel catalog with current rating summaries.
#[must_use]
pub fn list_hotels(catalog: &StaticCatalog, reviews: &ReviewAggregator) -> ListHotelsResponse {
    ListHotelsResponse {
        hotels: catalog
            .hotels()
            .iter()
            .map(|hotel| summarize_hotel(hotel, &reviews.summary(&hotel.hotel_id)))
            .collect(),
    }
}

/// Returns full details for one hotel.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the hotel does not exist.
pub fn get_hotel<C: CatalogProvider>(
    catalog: &C,
    reviews: &ReviewAggregator,
    hotel_id: &str,
) -> Result<HotelDetailsResponse, ApiError> {
    let id = HotelId::new(hotel_id);
    let hotel = catalog.hotel(&id).ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Hotel"),
        message: format!("Hotel '{hotel_id}' does not exist"),
    })?;

    Ok(HotelDetailsResponse {
        summary: summarize_hotel(&hotel, &reviews.summary(&id)),
        address: hotel.address.clone(),
        description: hotel.description.clone(),
        room_types: hotel
            .room_types
            .iter()
            .map(|room_type| RoomTypeInfo {
                room_type_id: room_type.room_type_id.value().to_owned(),
                name: room_type.name.clone(),
                total_units: room_type.total_units,
                capacity_per_unit: room_type.capacity_per_unit,
            })
            .collect(),
    })
}

/// Submits a guest review for a hotel.
///
/// The review is validated by the domain rules and folded into the
/// hotel's running rating summary.
///
/// # Errors
///
/// Returns an error if the hotel does not exist or the rating/comment
/// rules are violated.
pub fn submit_review<C: CatalogProvider>(
    catalog: &C,
    reviews: &ReviewAggregator,
    hotel_id: &str,
    request: &SubmitReviewRequest,
) -> Result<SubmitReviewResponse, ApiError> {
    let id = HotelId::new(hotel_id);
    if catalog.hotel(&id).is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Hotel"),
            message: format!("Hotel '{hotel_id}' does not exist"),
        });
    }

    let review = Review::new(
        generate_review_id(),
        id.clone(),
        UserId::new(&request.user_id),
        request.author_name.clone(),
        request.rating,
        &request.comment,
        OffsetDateTime::now_utc().date(),
    )
    .map_err(translate_domain_error)?;

    let review_id: String = review.review_id.value().to_owned();
    let summary = reviews.add_review(review);

    info!(%hotel_id, rating = request.rating, "Accepted review");
    Ok(SubmitReviewResponse {
        review_id,
        hotel_id: hotel_id.to_owned(),
        summary: RatingSummaryInfo {
            average_rating: summary.average(),
            review_count: summary.review_count,
        },
        message: String::from("Review accepted"),
    })
}

/// Lists a hotel's reviews, newest first, with the rating summary.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the hotel does not exist.
pub fn list_reviews<C: CatalogProvider>(
    catalog: &C,
    reviews: &ReviewAggregator,
    hotel_id: &str,
) -> Result<ListReviewsResponse, ApiError> {
    let id = HotelId::new(hotel_id);
    if catalog.hotel(&id).is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Hotel"),
            message: format!("Hotel '{hotel_id}' does not exist"),
        });
    }

    let summary = reviews.summary(&id);
    Ok(ListReviewsResponse {
        hotel_id: hotel_id.to_owned(),
        summary: RatingSummaryInfo {
            average_rating: summary.average(),
            review_count: summary.review_count,
        },
        reviews: reviews
            .reviews(&id)
            .into_iter()
            .map(|review| ReviewInfo {
                review_id: review.review_id.value().to_owned(),
                author_name: review.author_name,
                rating: review.rating,
                comment: review.comment,
                created_on: review.created_on,
            })
            .collect(),
    })
}

fn generate_review_id() -> ReviewId {
    let timestamp = OffsetDateTime::now_utc().unix_timestamp();
    let suffix: u64 = rand::random();
    ReviewId::new(&format!("review-{timestamp}-{suffix:016x}"))
}
