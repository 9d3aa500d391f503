//! Integration test helpers for the Shelf product API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and apply migrations, then start the server:
//! SHELF_RUN_MIGRATIONS=1 cargo run -p shelf-api
//!
//! # Run the black-box tests against it:
//! cargo test -p shelf-integration-tests -- --ignored --test-threads=1
//! ```
//!
//! Tests reset the `products` table between scenarios, so they must run
//! single-threaded against a dedicated test database.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHELF_BASE_URL").unwrap_or_else(|_| "http://localhost:8010".to_string())
}

/// HTTP client for test requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn api_client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect to the test database named by `SHELF_DATABASE_URL`.
///
/// # Panics
///
/// Panics if the variable is unset or the connection fails.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("SHELF_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("SHELF_DATABASE_URL must be set for integration tests");

    PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database")
}

/// Reset the products table and restart its id sequence at 1.
///
/// # Panics
///
/// Panics if either statement fails.
pub async fn reset_products(pool: &PgPool) {
    sqlx::query("DELETE FROM products")
        .execute(pool)
        .await
        .expect("Failed to clear products");
    sqlx::query("ALTER SEQUENCE products_id_seq RESTART WITH 1")
        .execute(pool)
        .await
        .expect("Failed to reset products sequence");
}

/// Insert `n` fixture rows named `Product 00`, `Product 01`, ... with
/// ascending prices. Zero-padded names keep insertion order and the
/// API's name ordering aligned.
///
/// # Panics
///
/// Panics if an insert fails.
pub async fn seed_products(pool: &PgPool, n: i32) {
    for i in 0..n {
        sqlx::query("INSERT INTO products (name, price) VALUES ($1, $2)")
            .bind(format!("Product {i:02}"))
            .bind(Decimal::new(i64::from(i + 1) * 1000, 2))
            .execute(pool)
            .await
            .expect("Failed to seed product");
    }
}

/// Count the rows currently in the products table.
///
/// # Panics
///
/// Panics if the query fails.
pub async fn count_products(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .expect("Failed to count products")
}
