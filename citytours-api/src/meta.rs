use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    time: String,
}

#[derive(Debug, Serialize)]
struct IndexResponse {
    message: &'static str,
    endpoints: Vec<&'static str>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health)).route("/", get(root))
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "city-tours",
        version: env!("CARGO_PKG_VERSION"),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// GET /
async fn root() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "City Tours API",
        endpoints: vec![
            "/catalog/tours?city=paris",
            "/bookings (POST)",
            "/bookings?userId=42",
            "/users/42",
            "/recommendations?city=paris",
            "/payments/checkout (POST)",
        ],
    })
}
