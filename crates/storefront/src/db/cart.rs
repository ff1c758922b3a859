//! Cart repository: insert-only cart rows keyed by user identity.

use sqlx::PgPool;

use uniform_store_core::{CartEntry, UserId};

use super::RepositoryError;

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated cart entry for a user.
    ///
    /// The price column is the snapshot taken at add time; it is never
    /// recomputed from the product afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, user_id: UserId, entry: &CartEntry) -> Result<(), RepositoryError> {
        let quantity = i32::try_from(entry.quantity).map_err(|_| {
            RepositoryError::Conflict(format!("quantity {} out of range", entry.quantity))
        })?;

        sqlx::query(
            r"
            INSERT INTO cart_items
                (user_id, product_id, color, size, quantity, logo_customization, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user_id.as_uuid())
        .bind(entry.product_id.as_uuid())
        .bind(&entry.color)
        .bind(&entry.size)
        .bind(quantity)
        .bind(entry.logo_customization)
        .bind(entry.price)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Number of cart rows for a user (the cart badge).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_items WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
