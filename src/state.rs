//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RestaurantService;
use crate::domain::repositories::RestaurantRepository;

#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<RestaurantService>,
}

impl AppState {
    /// Builds the state around any repository implementation.
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self {
            restaurant_service: Arc::new(RestaurantService::new(repository)),
        }
    }
}
