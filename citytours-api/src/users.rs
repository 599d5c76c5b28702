use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use citytours_core::User;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}", get(get_user))
}

/// GET /users/{user_id}
async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, AppError> {
    state
        .store
        .get_user(user_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
