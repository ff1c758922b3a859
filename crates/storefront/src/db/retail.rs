//! Retail customer repository: exact-triple lookup and seeding.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use uniform_store_core::{OrderSource, OrderStatus, RetailCustomer, RetailOrder};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct RetailCustomerRow {
    account_number: String,
    phone: String,
    zip_code: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct RetailOrderRow {
    id: String,
    subtotal: Decimal,
    tax: Decimal,
    total: Decimal,
    status: String,
    created_on: NaiveDate,
    source: String,
}

impl RetailOrderRow {
    fn into_order(self) -> Result<RetailOrder, RepositoryError> {
        let status = OrderStatus::parse(&self.status).ok_or_else(|| {
            RepositoryError::DataCorruption(format!("unknown order status '{}'", self.status))
        })?;
        let source = OrderSource::parse(&self.source).ok_or_else(|| {
            RepositoryError::DataCorruption(format!("unknown order source '{}'", self.source))
        })?;

        Ok(RetailOrder {
            id: self.id,
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
            status,
            created_on: self.created_on,
            source,
        })
    }
}

/// Repository for retail store customer records.
pub struct RetailRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RetailRepository<'a> {
    /// Create a new retail repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Exact-match lookup on the (phone, zip, account number) triple.
    ///
    /// All three fields must match simultaneously; there is no partial-match
    /// fallback. The caller normalizes the phone to digits first. The
    /// returned record includes the customer's historical orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails, or
    /// `RepositoryError::DataCorruption` for unreadable order rows.
    pub async fn find_by_lookup(
        &self,
        phone: &str,
        zip_code: &str,
        account_number: &str,
    ) -> Result<Option<RetailCustomer>, RepositoryError> {
        let row: Option<RetailCustomerRow> = sqlx::query_as(
            r"
            SELECT account_number, phone, zip_code, first_name, last_name
            FROM retail_customers
            WHERE phone = $1 AND zip_code = $2 AND account_number = $3
            ",
        )
        .bind(phone)
        .bind(zip_code)
        .bind(account_number)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let orders = self.orders_for(&row.account_number).await?;

        Ok(Some(RetailCustomer {
            account_number: row.account_number,
            phone: row.phone,
            zip_code: row.zip_code,
            first_name: row.first_name,
            last_name: row.last_name,
            orders,
        }))
    }

    async fn orders_for(&self, account_number: &str) -> Result<Vec<RetailOrder>, RepositoryError> {
        let rows: Vec<RetailOrderRow> = sqlx::query_as(
            r"
            SELECT id, subtotal, tax, total, status, created_on, source
            FROM retail_orders
            WHERE account_number = $1
            ORDER BY created_on
            ",
        )
        .bind(account_number)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(RetailOrderRow::into_order).collect()
    }

    /// Insert a retail customer and their order history (used by the seeder).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the account number already
    /// exists.
    pub async fn insert(&self, customer: &RetailCustomer) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r"
            INSERT INTO retail_customers (account_number, phone, zip_code, first_name, last_name)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&customer.account_number)
        .bind(&customer.phone)
        .bind(&customer.zip_code)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(format!(
                    "retail account '{}' already exists",
                    customer.account_number
                ));
            }
            RepositoryError::Database(e)
        })?;

        for order in &customer.orders {
            sqlx::query(
                r"
                INSERT INTO retail_orders
                    (id, account_number, subtotal, tax, total, status, created_on, source)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(&order.id)
            .bind(&customer.account_number)
            .bind(order.subtotal)
            .bind(order.tax)
            .bind(order.total)
            .bind(order.status.as_str())
            .bind(order.created_on)
            .bind(order.source.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
