//! Favorites repository
//!
//! Junction-table operations between a user and characters/planets.
//! Adds are idempotent (INSERT OR IGNORE against the composite key);
//! removals of rows that were never added report NotInFavorites.
//!
//! Existence of the user and of the target record is checked by the
//! handlers via the per-resource repositories before calling in here.

use sqlx::SqlitePool;

use super::{Character, DbError, Planet};

/// Favorites repository
pub struct FavoriteRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Characters favorited by a user.
    pub async fn characters_of(&self, user_id: i64) -> Result<Vec<Character>, DbError> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT c.id, c.name, c.species, c.homeworld
            FROM characters c
            JOIN favorite_characters f ON f.character_id = c.id
            WHERE f.user_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(characters)
    }

    /// Planets favorited by a user.
    pub async fn planets_of(&self, user_id: i64) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as::<_, Planet>(
            r#"
            SELECT p.id, p.name, p.climate, p.terrain, p.population
            FROM planets p
            JOIN favorite_planets f ON f.planet_id = p.id
            WHERE f.user_id = ?
            ORDER BY p.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(planets)
    }

    /// Add a character to a user's favorites. A repeat add is a no-op.
    pub async fn add_character(&self, user_id: i64, character_id: i64) -> Result<(), DbError> {
        sqlx::query(
            "INSERT OR IGNORE INTO favorite_characters (user_id, character_id) VALUES (?, ?)",
        )
        .bind(user_id)
        .bind(character_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Add a planet to a user's favorites. A repeat add is a no-op.
    pub async fn add_planet(&self, user_id: i64, planet_id: i64) -> Result<(), DbError> {
        sqlx::query("INSERT OR IGNORE INTO favorite_planets (user_id, planet_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(planet_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Remove a character from a user's favorites.
    pub async fn remove_character(&self, user_id: i64, character_id: i64) -> Result<(), DbError> {
        let result = sqlx::query(
            "DELETE FROM favorite_characters WHERE user_id = ? AND character_id = ?",
        )
        .bind(user_id)
        .bind(character_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotInFavorites {
                resource: "character",
                id: character_id,
            });
        }

        Ok(())
    }

    /// Remove a planet from a user's favorites.
    pub async fn remove_planet(&self, user_id: i64, planet_id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM favorite_planets WHERE user_id = ? AND planet_id = ?")
            .bind(user_id)
            .bind(planet_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotInFavorites {
                resource: "planet",
                id: planet_id,
            });
        }

        Ok(())
    }
}
