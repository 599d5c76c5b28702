use serde::{Deserialize, Serialize};

/// A bookable catalog entry tied to a city. Tours are seeded at startup
/// and never mutated afterwards; `id` is caller-supplied and stable so
/// bookings can reference it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub city: String,
    pub title: String,
    pub duration_hours: u32,
    pub price: f64,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_wire_names_are_camel_case() {
        let json = r#"
            {
                "id": "paris-food-101",
                "city": "paris",
                "title": "Paris Street Food Walk",
                "durationHours": 3,
                "price": 49.0,
                "tags": ["food", "walking", "local"]
            }
        "#;
        let tour: Tour = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(tour.duration_hours, 3);
        assert_eq!(tour.tags, vec!["food", "walking", "local"]);

        let out = serde_json::to_value(&tour).unwrap();
        assert_eq!(out["durationHours"], 3);
        assert!(out.get("duration_hours").is_none());
    }
}
