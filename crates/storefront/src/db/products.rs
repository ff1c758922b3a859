//! Product repository for catalog reads and seeding.

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use uniform_store_core::{Product, ProductColor, ProductId};

use super::RepositoryError;

/// Database row for a product. Colors are a JSONB document; sizes a text
/// array.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    code: String,
    name: String,
    brand: String,
    department: String,
    description: String,
    image_url: Option<String>,
    retail_price: Decimal,
    contract_price: Decimal,
    colors: Json<Vec<ProductColor>>,
    sizes: Vec<String>,
    in_stock: bool,
    logo_eligible: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            code: row.code,
            name: row.name,
            brand: row.brand,
            department: row.department,
            description: row.description,
            image_url: row.image_url,
            retail_price: row.retail_price,
            contract_price: row.contract_price,
            colors: row.colors.0,
            sizes: row.sizes,
            in_stock: row.in_stock,
            logo_eligible: row.logo_eligible,
        }
    }
}

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

    /// Fetch the full catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, code, name, brand, department, description, image_url,
                   retail_price, contract_price, colors, sizes, in_stock, logo_eligible
            FROM products
            ORDER BY created_at, code
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            SELECT id, code, name, brand, department, description, image_url,
                   retail_price, contract_price, colors, sizes, in_stock, logo_eligible
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Insert a product (used by the seeder).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the style code already exists.
    pub async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO products
                (id, code, name, brand, department, description, image_url,
                 retail_price, contract_price, colors, sizes, in_stock, logo_eligible)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(product.id.as_uuid())
        .bind(&product.code)
        .bind(&product.name)
        .bind(&product.brand)
        .bind(&product.department)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.retail_price)
        .bind(product.contract_price)
        .bind(Json(&product.colors))
        .bind(&product.sizes)
        .bind(product.in_stock)
        .bind(product.logo_eligible)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(format!(
                    "product code '{}' already exists",
                    product.code
                ));
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }
}
