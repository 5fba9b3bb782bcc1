//! MySQL user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use async_trait::async_trait;
use cadenza_core::{CatalogError, CatalogResult, PageQuery, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL user repository.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    charge: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = CatalogError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| CatalogError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(User {
            id: UserId::from(id),
            name: row.name,
            email: row.email,
            charge: row.charge,
            password_hash: row.password_hash,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> CatalogResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, charge, password_hash
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> CatalogResult<Option<User>> {
        debug!("Finding user by email");

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, charge, password_hash
            FROM users
            WHERE email = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_page(&self, charge: Option<&str>, page: PageQuery) -> CatalogResult<Vec<User>> {
        debug!(
            "Finding users, filter: {:?}, page: {}, limit: {}",
            charge, page.page, page.limit
        );

        let rows = match charge {
            Some(charge) => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, name, email, charge, password_hash
                    FROM users
                    WHERE charge = ?
                    ORDER BY id
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(charge)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, name, email, charge, password_hash
                    FROM users
                    ORDER BY id
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
        };

        rows.into_iter().map(User::try_from).collect()
    }

    async fn insert(&self, user: &User) -> CatalogResult<User> {
        debug!("Inserting user: {}", user.id);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, charge, password_hash)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.charge)
        .bind(&user.password_hash)
        .execute(self.pool.inner())
        .await?;

        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> CatalogResult<User> {
        debug!("Updating user: {}", user.id);

        sqlx::query(
            r#"
            UPDATE users
            SET name = ?, email = ?, charge = ?, password_hash = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.charge)
        .bind(&user.password_hash)
        .bind(user.id.to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> CatalogResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
