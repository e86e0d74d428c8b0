//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::restaurant_service::RestaurantService`] - Restaurant listing

pub mod services;
