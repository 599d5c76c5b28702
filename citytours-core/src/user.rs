use serde::{Deserialize, Serialize};

/// Minimal traveler profile, read-only after seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub home_city: String,
}
