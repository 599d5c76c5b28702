use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod catalog;
pub mod error;
pub mod meta;
pub mod payments;
pub mod recommendations;
pub mod state;
pub mod users;

pub use state::AppState;

/// Assembles the full router; split out of `main` so tests can drive it
/// without binding a socket.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(meta::routes())
        .merge(catalog::routes())
        .merge(bookings::routes())
        .merge(users::routes())
        .merge(recommendations::routes())
        .merge(payments::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
