use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use citytours_core::Tour;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListToursParams {
    city: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalog/tours", get(list_tours))
        .route("/catalog/tours/{tour_id}", get(get_tour))
}

/// GET /catalog/tours?city=paris
async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<ListToursParams>,
) -> Result<Json<Vec<Tour>>, AppError> {
    let city = params.city.filter(|city| !city.is_empty()).ok_or_else(|| {
        AppError::BadRequest("Missing required query parameter 'city'".to_string())
    })?;

    Ok(Json(state.store.list_tours_by_city(&city)))
}

/// GET /catalog/tours/{tour_id}
async fn get_tour(
    State(state): State<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<Tour>, AppError> {
    state
        .store
        .get_tour(&tour_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Tour not found".to_string()))
}
