//! Character repository
//!
//! Straight single-table CRUD. Creation takes a validated
//! `CharacterName`, so no handler can insert an empty name.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::CharacterName;

/// Character record from the database.
///
/// The public JSON shape is exactly this field set, so the record
/// serializes directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    pub homeworld: Option<String>,
}

/// Character repository
pub struct CharacterRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CharacterRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all characters, oldest first.
    pub async fn list(&self) -> Result<Vec<Character>, DbError> {
        let characters = sqlx::query_as::<_, Character>(
            "SELECT id, name, species, homeworld FROM characters ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(characters)
    }

    /// Get a single character by id.
    pub async fn get(&self, id: i64) -> Result<Character, DbError> {
        sqlx::query_as::<_, Character>(
            "SELECT id, name, species, homeworld FROM characters WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "character",
            id,
        })
    }

    /// Insert a character and return the stored record.
    pub async fn create(
        &self,
        name: CharacterName,
        species: Option<String>,
        homeworld: Option<String>,
    ) -> Result<Character, DbError> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            INSERT INTO characters (name, species, homeworld)
            VALUES (?, ?, ?)
            RETURNING id, name, species, homeworld
            "#,
        )
        .bind(name.as_str())
        .bind(species)
        .bind(homeworld)
        .fetch_one(self.pool)
        .await?;

        Ok(character)
    }

    /// Delete a character by id.
    ///
    /// Favorites referencing it cascade away.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "character",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool_with_options};

    async fn test_pool() -> SqlitePool {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");
        pool
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = CharacterRepo::new(&pool);

        let name = CharacterName::new("Luke").unwrap();
        let created = repo
            .create(name, Some("Human".into()), Some("Tatooine".into()))
            .await
            .expect("create failed");

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.name, "Luke");
        assert_eq!(fetched.species.as_deref(), Some("Human"));
        assert_eq!(fetched.homeworld.as_deref(), Some("Tatooine"));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = CharacterRepo::new(&pool);

        let err = repo.get(42).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "character",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = CharacterRepo::new(&pool);

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_matches_created_records() {
        let pool = test_pool().await;
        let repo = CharacterRepo::new(&pool);

        assert!(repo.list().await.expect("list failed").is_empty());

        for name in ["Luke", "Leia", "Han"] {
            repo.create(CharacterName::new(name).unwrap(), None, None)
                .await
                .expect("create failed");
        }

        let all = repo.list().await.expect("list failed");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Luke");
    }
}
