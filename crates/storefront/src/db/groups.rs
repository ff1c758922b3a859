//! Group repository for contract-code sign-in and seeding.

use sqlx::PgPool;
use uuid::Uuid;

use uniform_store_core::{Group, GroupId};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct GroupRow {
    id: Uuid,
    code: String,
    name: String,
    description: String,
    logo_customization: bool,
    is_active: bool,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Self {
            id: GroupId::new(row.id),
            code: row.code,
            name: row.name,
            description: row.description,
            logo_customization: row.logo_customization,
            is_active: row.is_active,
        }
    }
}

/// Repository for group database operations.
pub struct GroupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GroupRepository<'a> {
    /// Create a new group repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all groups.
    ///
    /// Contract-code matching (case-insensitive, active only) is done in
    /// core against this list, the same way the storefront matched against
    /// its fetched group collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Group>, RepositoryError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r"
            SELECT id, code, name, description, logo_customization, is_active
            FROM groups
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Group::from).collect())
    }

    /// Insert a group (used by the seeder).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the contract code already exists.
    pub async fn insert(&self, group: &Group) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO groups (id, code, name, description, logo_customization, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(group.id.as_uuid())
        .bind(&group.code)
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.logo_customization)
        .bind(group.is_active)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(format!(
                    "contract code '{}' already exists",
                    group.code
                ));
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }
}
