//! Handler for the restaurant listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::restaurant::RestaurantItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every restaurant with its category, ordered by category name.
///
/// # Endpoint
///
/// `GET /restaurants`
///
/// Query string, path parameters and body are ignored.
///
/// # Errors
///
/// Returns 500 with a sanitized error body if the store query fails.
pub async fn restaurant_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantItem>>, AppError> {
    let restaurants = state.restaurant_service.list_restaurants().await?;

    Ok(Json(
        restaurants.into_iter().map(RestaurantItem::from).collect(),
    ))
}
