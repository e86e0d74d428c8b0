#![allow(dead_code)]

use async_trait::async_trait;
use restaurant_listing::domain::entities::{Restaurant, RestaurantCategory, RestaurantStatus};
use restaurant_listing::domain::repositories::RestaurantRepository;
use restaurant_listing::error::AppError;
use restaurant_listing::infrastructure::persistence::PgRestaurantRepository;
use restaurant_listing::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How the in-memory store answers.
#[derive(Clone, Copy)]
pub enum FakeBehavior {
    Ok,
    Unavailable,
    Malformed,
}

/// In-memory store returning a fixed snapshot in the order it was given.
pub struct FakeRestaurantRepository {
    restaurants: Vec<Restaurant>,
    behavior: FakeBehavior,
    calls: AtomicUsize,
}

impl FakeRestaurantRepository {
    pub fn with(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            behavior: FakeBehavior::Ok,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(behavior: FakeBehavior) -> Self {
        Self {
            restaurants: vec![],
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<(), AppError> {
        match self.behavior {
            FakeBehavior::Ok => Ok(()),
            FakeBehavior::Unavailable => Err(AppError::from(sqlx::Error::PoolTimedOut)),
            FakeBehavior::Malformed => Err(AppError::from(sqlx::Error::ColumnNotFound(
                "restaurant_category_id".to_string(),
            ))),
        }
    }
}

#[async_trait]
impl RestaurantRepository for FakeRestaurantRepository {
    async fn list_with_category(&self) -> Result<Vec<Restaurant>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer()?;
        Ok(self.restaurants.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.answer()
    }
}

pub fn sample_restaurant(id: i64, name: &str, category: Option<(i64, &str)>) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        address: "Avenida Reina Mercedes s/n".to_string(),
        postal_code: "41012".to_string(),
        url: Some(format!("https://{}.example", id)),
        shipping_costs: 2.5,
        average_service_minutes: Some(25.0),
        email: Some(format!("contact{}@example.com", id)),
        phone: Some("954000000".to_string()),
        logo: Some(format!("/public/logos/{}.png", id)),
        hero_image: None,
        status: RestaurantStatus::Online,
        restaurant_category_id: category.map(|(id, _)| id),
        category: category.map(|(id, name)| RestaurantCategory::new(id, name.to_string())),
    }
}

pub fn fake_state(repository: Arc<FakeRestaurantRepository>) -> AppState {
    AppState::new(repository)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgRestaurantRepository::new(Arc::new(pool))))
}

pub async fn create_test_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO restaurant_categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_restaurant(pool: &PgPool, name: &str, category_id: Option<i64>) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO restaurants
            (name, description, address, postal_code, url, shipping_costs,
             average_service_minutes, email, phone, logo, hero_image, status,
             restaurant_category_id)
        VALUES ($1, 'Test restaurant', 'Calle Sol 1', '41001', NULL, 1.5,
                30, 'test@example.com', '600000000', NULL, NULL, 'online', $2)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_status(pool: &PgPool, restaurant_id: i64, status: &str) {
    sqlx::query("UPDATE restaurants SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(restaurant_id)
        .execute(pool)
        .await
        .unwrap();
}
