//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod restaurant_repository;

pub use restaurant_repository::RestaurantRepository;

#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
