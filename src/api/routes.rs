//! API route configuration.

use crate::api::handlers::restaurant_list_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public read-only routes.
///
/// # Endpoints
///
/// - `GET /restaurants` - All restaurants with their category, ordered by category name
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/restaurants", get(restaurant_list_handler))
}
