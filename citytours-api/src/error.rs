use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use citytours_core::BookingError;
use serde_json::json;

/// Boundary error taxonomy. BadRequest covers missing or syntactically
/// invalid input; UnprocessableReference covers well-formed input that
/// names a tour or user that does not exist, so clients can tell "fix
/// your request" apart from "the reference is invalid".
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    UnprocessableReference(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UnprocessableReference(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::UnknownTour(_) | BookingError::UnknownUser(_) => {
                Self::UnprocessableReference(err.to_string())
            }
            BookingError::InvalidDate => Self::BadRequest(err.to_string()),
        }
    }
}
