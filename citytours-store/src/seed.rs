use citytours_core::{Tour, User};

/// Fixed demo catalog. Tour ids are stable so bookings can reference
/// them across restarts of the sample.
pub fn tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "paris-food-101".to_string(),
            city: "paris".to_string(),
            title: "Paris Street Food Walk".to_string(),
            duration_hours: 3,
            price: 49.0,
            tags: vec!["food".to_string(), "walking".to_string(), "local".to_string()],
        },
        Tour {
            id: "paris-night-views".to_string(),
            city: "paris".to_string(),
            title: "Seine Night Cruise & Skyline".to_string(),
            duration_hours: 2,
            price: 59.0,
            tags: vec!["boat".to_string(), "night".to_string(), "photography".to_string()],
        },
        Tour {
            id: "rome-history-core".to_string(),
            city: "rome".to_string(),
            title: "Colosseum & Forum Essentials".to_string(),
            duration_hours: 4,
            price: 69.0,
            tags: vec!["history".to_string(), "walking".to_string()],
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 42,
            name: "Alex Martin".to_string(),
            home_city: "paris".to_string(),
        },
        User {
            id: 7,
            name: "Samira Khan".to_string(),
            home_city: "rome".to_string(),
        },
    ]
}
