//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgRestaurantRepository`] - Restaurant listing with eager category join

pub mod pg_restaurant_repository;

pub use pg_restaurant_repository::PgRestaurantRepository;
