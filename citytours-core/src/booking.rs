use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user's reservation against a tour for a specific date.
///
/// The id is a composite of user, tour and date rather than a random
/// token: creating the same booking twice derives the same id, and the
/// store overwrites the earlier record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: i64,
    pub tour_id: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Created,
}

impl Booking {
    /// Derives the composite key `b-{userId}-{tourId}-{date}`.
    pub fn composite_id(user_id: i64, tour_id: &str, date: NaiveDate) -> String {
        format!("b-{}-{}-{}", user_id, tour_id, date.format("%Y-%m-%d"))
    }

    pub fn new(user_id: i64, tour_id: impl Into<String>, date: NaiveDate) -> Self {
        let tour_id = tour_id.into();
        Self {
            id: Self::composite_id(user_id, &tour_id, date),
            user_id,
            tour_id,
            date,
            status: BookingStatus::Created,
        }
    }
}

/// Booking creation failures. The order in which the store checks these
/// is part of the API contract: tour first, then user, then date.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Unknown tourId: {0}")]
    UnknownTour(String),

    #[error("Unknown userId: {0}")]
    UnknownUser(i64),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,
}
