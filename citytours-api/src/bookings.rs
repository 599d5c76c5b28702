use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use citytours_core::Booking;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingBody {
    tour_id: Option<String>,
    user_id: Option<i64>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsParams {
    // Kept as a raw string so a non-numeric value gets this service's
    // structured 400 instead of a framework rejection body.
    user_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", post(create_booking).get(list_bookings))
}

/// POST /bookings
///
/// Validation order is part of the contract: field presence, then tour
/// existence, then user existence, then date syntax. A request with
/// several problems reports only the first failing check.
async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingBody>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let CreateBookingBody {
        tour_id: Some(tour_id),
        user_id: Some(user_id),
        date: Some(date),
    } = body
    else {
        return Err(AppError::BadRequest(
            "Missing fields. Required: date, tourId, userId".to_string(),
        ));
    };

    let booking = state.store.create_booking(user_id, &tour_id, &date)?;
    info!(booking_id = %booking.id, "Booking created");

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /bookings?userId=42
async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let raw = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("Missing userId".to_string()))?;
    let user_id: i64 = raw
        .parse()
        .map_err(|_| AppError::BadRequest("userId must be an integer".to_string()))?;

    Ok(Json(state.store.list_bookings_by_user(user_id)))
}
