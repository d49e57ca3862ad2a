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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use staybook::{BookingCoordinator, ReviewAggregator};
use staybook_api::{
    ApiError, AvailabilityRequest, AvailabilityResponse, BookHotelRequest, BookHotelResponse,
    CancelBookingResponse, HotelDetailsResponse, ListHotelsResponse, ListReviewsResponse,
    SubmitReviewRequest, SubmitReviewResponse, book_hotel, cancel_booking, check_availability,
    get_hotel, list_hotels, list_reviews, submit_review,
};
use staybook_persistence::{SqliteStore, StaticCatalog};
use std::sync::Arc;
use tracing::{error, info};

/// StayBook Server - HTTP server for the StayBook booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The coordinator owns the inventory ledger, so all handlers must go
/// through the same instance.
#[derive(Clone)]
struct AppState {
    /// The booking coordinator over the static catalog and `SQLite` store.
    coordinator: Arc<BookingCoordinator<StaticCatalog, SqliteStore>>,
    /// The review aggregator.
    reviews: Arc<ReviewAggregator>,
}

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ValidationFailed { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::NoAvailability { .. } | ApiError::AlreadyFinished { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handles `GET /hotels`.
async fn handle_list_hotels(AxumState(state): AxumState<AppState>) -> Json<ListHotelsResponse> {
    Json(list_hotels(state.coordinator.catalog(), &state.reviews))
}

/// Handles `GET /hotels/{hotel_id}`.
async fn handle_get_hotel(
    AxumState(state): AxumState<AppState>,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelDetailsResponse>, HttpError> {
    let details = get_hotel(state.coordinator.catalog(), &state.reviews, &hotel_id)?;
    Ok(Json(details))
}

/// Handles `GET /availability`.
async fn handle_check_availability(
    AxumState(state): AxumState<AppState>,
    Query(request): Query<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let response = check_availability(&state.coordinator, &request)?;
    Ok(Json(response))
}

/// Handles `POST /bookings`.
async fn handle_book(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<BookHotelRequest>,
) -> Result<Json<BookHotelResponse>, HttpError> {
    let response = book_hotel(&state.coordinator, &request)?;
    Ok(Json(response))
}

/// Handles `POST /bookings/{reservation_id}/cancel`.
async fn handle_cancel(
    AxumState(state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<Json<CancelBookingResponse>, HttpError> {
    let response = cancel_booking(&state.coordinator, &reservation_id)?;
    Ok(Json(response))
}

/// Handles `POST /hotels/{hotel_id}/reviews`.
async fn handle_submit_review(
    AxumState(state): AxumState<AppState>,
    Path(hotel_id): Path<String>,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<Json<SubmitReviewResponse>, HttpError> {
    let response = submit_review(
        state.coordinator.catalog(),
        &state.reviews,
        &hotel_id,
        &request,
    )?;
    Ok(Json(response))
}

/// Handles `GET /hotels/{hotel_id}/reviews`.
async fn handle_list_reviews(
    AxumState(state): AxumState<AppState>,
    Path(hotel_id): Path<String>,
) -> Result<Json<ListReviewsResponse>, HttpError> {
    let response = list_reviews(state.coordinator.catalog(), &state.reviews, &hotel_id)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/hotels", get(handle_list_hotels))
        .route("/hotels/{hotel_id}", get(handle_get_hotel))
        .route("/availability", get(handle_check_availability))
        .route("/bookings", post(handle_book))
        .route("/bookings/{reservation_id}/cancel", post(handle_cancel))
        .route("/hotels/{hotel_id}/reviews", post(handle_submit_review))
        .route("/hotels/{hotel_id}/reviews", get(handle_list_reviews))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing StayBook Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::open(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::open_in_memory()?
    };

    let catalog: StaticCatalog = StaticCatalog::new()?;
    let app_state: AppState = AppState {
        coordinator: Arc::new(BookingCoordinator::new(catalog, store)),
        reviews: Arc::new(ReviewAggregator::new()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
