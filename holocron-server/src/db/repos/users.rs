//! User repository
//!
//! Users are read-only over HTTP; rows come from the bootstrap seed
//! or external tooling.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// User record from the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, email, is_active FROM users ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, email, is_active FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "user",
                id,
            })
    }
}
