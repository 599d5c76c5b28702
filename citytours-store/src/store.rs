use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::NaiveDate;
use citytours_core::{Booking, BookingError, Tour, User};
use serde::Serialize;

use crate::seed;

/// Placeholder ranking reason until a real heuristic exists.
const POPULAR_REASON: &str = "popular";

/// A recommended tour paired with the reason it was picked.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub tour_id: String,
    pub reason: String,
}

/// In-memory catalog/booking store.
///
/// Tours and users are immutable after construction and need no
/// synchronization beyond being published behind an `Arc`. Bookings are
/// the only mutable collection and sit behind a single lock; referential
/// checks only read the immutable collections, so a concurrent create
/// can never observe stale data relative to another write.
pub struct TourStore {
    tours: Vec<Tour>,
    tours_by_id: HashMap<String, usize>,
    users: HashMap<i64, User>,
    bookings: RwLock<BTreeMap<String, Booking>>,
}

impl TourStore {
    pub fn new(tours: Vec<Tour>, users: Vec<User>) -> Self {
        let tours_by_id = tours
            .iter()
            .enumerate()
            .map(|(idx, tour)| (tour.id.clone(), idx))
            .collect();
        let users = users.into_iter().map(|user| (user.id, user)).collect();

        Self {
            tours,
            tours_by_id,
            users,
            bookings: RwLock::new(BTreeMap::new()),
        }
    }

    /// Constructs the store with the fixed demo catalog.
    pub fn with_seed_data() -> Self {
        let store = Self::new(seed::tours(), seed::users());
        tracing::info!(
            tours = store.tours.len(),
            users = store.users.len(),
            "Seeded catalog store"
        );
        store
    }

    /// Case-insensitive exact match on city, ignoring surrounding
    /// whitespace. Results keep seed insertion order; an unknown city
    /// yields an empty vec, not an error.
    pub fn list_tours_by_city(&self, city: &str) -> Vec<Tour> {
        let needle = city.trim().to_lowercase();
        self.tours
            .iter()
            .filter(|tour| tour.city.to_lowercase() == needle)
            .cloned()
            .collect()
    }

    pub fn get_tour(&self, tour_id: &str) -> Option<&Tour> {
        self.tours_by_id.get(tour_id).map(|&idx| &self.tours[idx])
    }

    pub fn get_user(&self, user_id: i64) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// Creates (or silently replaces) a booking.
    ///
    /// Checks run in contract order: tour existence, user existence,
    /// date syntax. Validation is fully front-loaded; nothing is written
    /// unless every check passes. The composite id means an identical
    /// request overwrites the prior record rather than duplicating it.
    pub fn create_booking(
        &self,
        user_id: i64,
        tour_id: &str,
        raw_date: &str,
    ) -> Result<Booking, BookingError> {
        if self.get_tour(tour_id).is_none() {
            return Err(BookingError::UnknownTour(tour_id.to_string()));
        }
        if self.get_user(user_id).is_none() {
            return Err(BookingError::UnknownUser(user_id));
        }
        let date: NaiveDate = raw_date.parse().map_err(|_| BookingError::InvalidDate)?;

        let booking = Booking::new(user_id, tour_id, date);
        let mut bookings = self.bookings.write().expect("bookings lock poisoned");
        bookings.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    /// All bookings for a user, in key order of the current snapshot.
    /// Unknown or bookingless users get an empty vec; this deliberately
    /// does not validate that the user exists.
    pub fn list_bookings_by_user(&self, user_id: i64) -> Vec<Booking> {
        let bookings = self.bookings.read().expect("bookings lock poisoned");
        bookings
            .values()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Deterministic shortlist for a city: matching tours sorted by
    /// title (plain string comparison, so the output is byte-identical
    /// across calls), capped at two, each tagged with the fixed reason.
    pub fn recommend(&self, city: &str) -> Vec<Recommendation> {
        let mut tours = self.list_tours_by_city(city);
        tours.sort_by(|a, b| a.title.cmp(&b.title));
        tours
            .into_iter()
            .take(2)
            .map(|tour| Recommendation {
                tour_id: tour.id,
                reason: POPULAR_REASON.to_string(),
            })
            .collect()
    }
}
