use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    booking_id: Option<String>,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    status: &'static str,
    booking_id: String,
    amount: f64,
    provider: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/payments/checkout", post(checkout))
}

/// POST /payments/checkout
///
/// Echo stub standing in for a real payment gateway: authorizes
/// anything well-formed without touching the store.
async fn checkout(Json(body): Json<CheckoutBody>) -> Result<Json<CheckoutResponse>, AppError> {
    let CheckoutBody {
        booking_id: Some(booking_id),
        amount: Some(amount),
    } = body
    else {
        return Err(AppError::BadRequest(
            "Expected bookingId and amount".to_string(),
        ));
    };

    Ok(Json(CheckoutResponse {
        status: "authorized",
        booking_id,
        amount,
        provider: "demo-gateway",
    }))
}
