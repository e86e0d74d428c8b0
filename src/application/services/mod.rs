//! Business logic services for the application layer.

pub mod restaurant_service;

pub use restaurant_service::RestaurantService;
