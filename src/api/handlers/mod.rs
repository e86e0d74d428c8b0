//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod restaurants;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use restaurants::restaurant_list_handler;
