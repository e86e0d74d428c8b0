//! Repository trait for restaurant listing.

use crate::domain::entities::Restaurant;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to restaurants and their categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Lists every restaurant with its category resolved in the same query.
    ///
    /// Results are ordered by category name ascending, restaurants without a
    /// category last, ties broken by restaurant id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be reached.
    /// Returns [`AppError::QueryMalformed`] when the query or row decoding fails.
    async fn list_with_category(&self) -> Result<Vec<Restaurant>, AppError>;

    /// Performs a trivial round-trip to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
