//! Domain entity representing a restaurant category.

/// A category a restaurant can belong to (e.g. "Bakery", "Cafe").
///
/// Categories are managed outside this service and are read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantCategory {
    pub id: i64,
    pub name: String,
}

impl RestaurantCategory {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
