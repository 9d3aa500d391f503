//! Database operations for products.
//!
//! Queries are runtime-checked (`sqlx::query_as`) so the crate builds
//! without a live database.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::product::{Product, ProductId, ProductInput};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn get(&self, id: ProductId) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, price
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// List products ordered by name, skipping `offset` rows and returning
    /// at most `limit` rows. An empty table yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, price
            FROM products
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Insert a new product. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price
            ",
        )
        .bind(&input.name)
        .bind(input.price)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Update name and price for the row matching id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            UPDATE products
            SET name = $2, price = $3
            WHERE id = $1
            RETURNING id, name, price
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete the row matching id.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
