//! Restaurant listing service.

use crate::domain::entities::Restaurant;
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service exposing the restaurant listing to HTTP handlers.
///
/// The repository is injected at construction so handlers can be exercised
/// against any [`RestaurantRepository`] implementation.
pub struct RestaurantService {
    repository: Arc<dyn RestaurantRepository>,
}

impl RestaurantService {
    /// Creates a new restaurant service.
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    /// Lists all restaurants with their category, ordered by category name.
    ///
    /// No filtering, no pagination: every call returns the full table.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged. A failed query never yields
    /// partial results.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = self.repository.list_with_category().await?;
        tracing::debug!(count = restaurants.len(), "Listed restaurants");
        Ok(restaurants)
    }

    /// Checks that the data store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be reached.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
