//! Core domain entities.
//!
//! - [`Restaurant`] - A restaurant with its eagerly resolved category
//! - [`RestaurantCategory`] - A read-only category
//! - [`RestaurantStatus`] - Operational state of a restaurant

pub mod restaurant;
pub mod restaurant_category;

pub use restaurant::{Restaurant, RestaurantStatus};
pub use restaurant_category::RestaurantCategory;
