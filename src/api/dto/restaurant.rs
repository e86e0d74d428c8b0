//! DTOs for the restaurant listing.
//!
//! Field names follow the public camelCase contract of `GET /restaurants`.
//! Optional attributes serialize as `null`, never omitted.

use serde::Serialize;

use crate::domain::entities::{Restaurant, RestaurantCategory};

/// Category nested inside each listed restaurant.
#[derive(Debug, Serialize)]
pub struct RestaurantCategoryItem {
    pub id: i64,
    pub name: String,
}

/// Individual restaurant in the listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub status: String,
    pub restaurant_category_id: Option<i64>,
    pub restaurant_category: Option<RestaurantCategoryItem>,
}

impl From<RestaurantCategory> for RestaurantCategoryItem {
    fn from(c: RestaurantCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

impl From<Restaurant> for RestaurantItem {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            address: r.address,
            postal_code: r.postal_code,
            url: r.url,
            shipping_costs: r.shipping_costs,
            average_service_minutes: r.average_service_minutes,
            email: r.email,
            phone: r.phone,
            logo: r.logo,
            hero_image: r.hero_image,
            status: r.status.to_string(),
            restaurant_category_id: r.restaurant_category_id,
            restaurant_category: r.category.map(RestaurantCategoryItem::from),
        }
    }
}
