//! Domain entity representing a restaurant and its optional category.

use std::fmt;

use super::RestaurantCategory;

/// Operational state of a restaurant.
///
/// The store owns the set of values. The usual ones get their own variant;
/// anything else is carried through verbatim as [`RestaurantStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantStatus {
    Online,
    Offline,
    Closed,
    TemporarilyClosed,
    Other(String),
}

impl RestaurantStatus {
    /// Returns the stored text of the status.
    pub fn as_str(&self) -> &str {
        match self {
            RestaurantStatus::Online => "online",
            RestaurantStatus::Offline => "offline",
            RestaurantStatus::Closed => "closed",
            RestaurantStatus::TemporarilyClosed => "temporarily closed",
            RestaurantStatus::Other(value) => value,
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RestaurantStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "online" => RestaurantStatus::Online,
            "offline" => RestaurantStatus::Offline,
            "closed" => RestaurantStatus::Closed,
            "temporarily closed" => RestaurantStatus::TemporarilyClosed,
            _ => RestaurantStatus::Other(value),
        }
    }
}

impl From<&str> for RestaurantStatus {
    fn from(value: &str) -> Self {
        RestaurantStatus::from(value.to_string())
    }
}

/// A restaurant as returned by the listing query.
///
/// `category` is resolved eagerly in the same query as the restaurant and is
/// `None` when `restaurant_category_id` is unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
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
    pub status: RestaurantStatus,
    pub restaurant_category_id: Option<i64>,
    pub category: Option<RestaurantCategory>,
}

impl Restaurant {
    /// Returns the category name, if the restaurant has one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}
