//! CLI administration tool for restaurant-listing.
//!
//! Inspects the restaurant data and the database without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Print the listing as a table (same order as GET /restaurants)
//! cargo run --bin admin -- restaurants list
//!
//! # Print the exact JSON body GET /restaurants would return
//! cargo run --bin admin -- restaurants list --json
//!
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (see `restaurant_listing::config`).

use restaurant_listing::api::dto::restaurant::RestaurantItem;
use restaurant_listing::application::services::RestaurantService;
use restaurant_listing::config;
use restaurant_listing::domain::entities::{Restaurant, RestaurantStatus};
use restaurant_listing::infrastructure::persistence::PgRestaurantRepository;
use restaurant_listing::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing restaurant-listing.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect restaurants
    Restaurants {
        #[command(subcommand)]
        action: RestaurantAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Restaurant subcommands.
#[derive(Subcommand)]
enum RestaurantAction {
    /// List restaurants ordered by category name
    List {
        /// Print the JSON array served by GET /restaurants
        #[arg(long)]
        json: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Restaurants { action } => handle_restaurant_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches restaurant commands.
async fn handle_restaurant_action(action: RestaurantAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgRestaurantRepository::new(Arc::new(pool.clone())));
    let service = RestaurantService::new(repository);

    match action {
        RestaurantAction::List { json } => {
            let restaurants = service
                .list_restaurants()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list restaurants: {}", e))?;

            if json {
                let items: Vec<RestaurantItem> =
                    restaurants.into_iter().map(RestaurantItem::from).collect();
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_table(&restaurants);
            }
        }
    }

    Ok(())
}

/// Prints restaurants as a table.
///
/// # Output Format
///
/// ```text
/// Restaurants
///
///   ID    Name                           Category             Status
///   ───────────────────────────────────────────────────────────────────────────
///   3     Pan de Casa                    Bakery               online
///   1     Café Central                   Cafe                 temporarily closed
///   2     Sin Categoría                  -                    offline
/// ```
fn print_table(restaurants: &[Restaurant]) {
    println!("{}", "Restaurants".bright_blue().bold());
    println!();

    if restaurants.is_empty() {
        println!("{}", "  No restaurants found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Category".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for restaurant in restaurants {
        let category = restaurant.category_name().unwrap_or("-");

        let status = restaurant.status.as_str();
        let status = match restaurant.status {
            RestaurantStatus::Online => status.green(),
            RestaurantStatus::Offline => status.bright_black(),
            RestaurantStatus::Other(_) => status.yellow(),
            RestaurantStatus::Closed | RestaurantStatus::TemporarilyClosed => status.red(),
        };

        println!(
            "  {:<5} {:<30} {:<20} {}",
            restaurant.id.to_string().bright_black(),
            restaurant.name.cyan(),
            category,
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        restaurants.len().to_string().bright_white().bold()
    );
    println!();
}

/// Displays row counts.
///
/// Shows:
/// - Total number of restaurants
/// - Restaurants without a category
/// - Total number of categories
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let restaurants_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;

    let uncategorised_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM restaurants WHERE restaurant_category_id IS NULL",
    )
    .fetch_one(pool)
    .await?;

    let categories_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_categories")
        .fetch_one(pool)
        .await?;

    println!(
        "  Restaurants:   {}",
        restaurants_count.to_string().bright_green().bold()
    );
    println!(
        "  Uncategorised: {}",
        uncategorised_count.to_string().bright_green().bold()
    );
    println!(
        "  Categories:    {}",
        categories_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
