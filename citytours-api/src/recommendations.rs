use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use citytours_store::Recommendation;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationsParams {
    city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub city: String,
    pub recommendations: Vec<Recommendation>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/recommendations", get(recommendations))
}

/// GET /recommendations?city=paris
async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationsParams>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let city = params.city.filter(|city| !city.is_empty()).ok_or_else(|| {
        AppError::BadRequest("Missing required query parameter 'city'".to_string())
    })?;

    let recommendations = state.store.recommend(&city);
    Ok(Json(RecommendationsResponse {
        city,
        recommendations,
    }))
}
