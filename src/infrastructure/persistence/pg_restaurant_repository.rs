//! PostgreSQL implementation of the restaurant repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Restaurant, RestaurantCategory, RestaurantStatus};
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;

/// Single LEFT JOIN so restaurants without a category are still listed.
/// `ASC` puts NULL category names last; `r.id` makes the order total.
const LIST_WITH_CATEGORY: &str = r#"
    SELECT r.id,
           r.name,
           r.description,
           r.address,
           r.postal_code,
           r.url,
           r.shipping_costs,
           r.average_service_minutes,
           r.email,
           r.phone,
           r.logo,
           r.hero_image,
           r.status,
           r.restaurant_category_id,
           c.id   AS category_id,
           c.name AS category_name
    FROM restaurants r
    LEFT JOIN restaurant_categories c ON c.id = r.restaurant_category_id
    ORDER BY c.name ASC, r.id ASC
"#;

#[derive(Debug, FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    description: Option<String>,
    address: String,
    postal_code: String,
    url: Option<String>,
    shipping_costs: f64,
    average_service_minutes: Option<f64>,
    email: Option<String>,
    phone: Option<String>,
    logo: Option<String>,
    hero_image: Option<String>,
    status: String,
    restaurant_category_id: Option<i64>,
    category_id: Option<i64>,
    category_name: Option<String>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(RestaurantCategory::new(id, name)),
            _ => None,
        };

        Restaurant {
            id: row.id,
            name: row.name,
            description: row.description,
            address: row.address,
            postal_code: row.postal_code,
            url: row.url,
            shipping_costs: row.shipping_costs,
            average_service_minutes: row.average_service_minutes,
            email: row.email,
            phone: row.phone,
            logo: row.logo,
            hero_image: row.hero_image,
            status: RestaurantStatus::from(row.status),
            restaurant_category_id: row.restaurant_category_id,
            category,
        }
    }
}

/// PostgreSQL repository for the restaurant listing.
pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn list_with_category(&self) -> Result<Vec<Restaurant>, AppError> {
        let rows = sqlx::query_as::<_, RestaurantRow>(LIST_WITH_CATEGORY)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
