use citytours_store::TourStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TourStore>,
}
