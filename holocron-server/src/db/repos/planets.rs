//! Planet repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::PlanetName;

/// Planet record from the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

/// Planet repository
pub struct PlanetRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PlanetRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all planets, oldest first.
    pub async fn list(&self) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, climate, terrain, population FROM planets ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(planets)
    }

    /// Get a single planet by id.
    pub async fn get(&self, id: i64) -> Result<Planet, DbError> {
        sqlx::query_as::<_, Planet>(
            "SELECT id, name, climate, terrain, population FROM planets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "planet",
            id,
        })
    }

    /// Insert a planet and return the stored record.
    pub async fn create(
        &self,
        name: PlanetName,
        climate: Option<String>,
        terrain: Option<String>,
        population: Option<i64>,
    ) -> Result<Planet, DbError> {
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, climate, terrain, population)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, climate, terrain, population
            "#,
        )
        .bind(name.as_str())
        .bind(climate)
        .bind(terrain)
        .bind(population)
        .fetch_one(self.pool)
        .await?;

        Ok(planet)
    }

    /// Delete a planet by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "planet",
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
    async fn create_stores_optional_fields() {
        let pool = test_pool().await;
        let repo = PlanetRepo::new(&pool);

        let planet = repo
            .create(
                PlanetName::new("Tatooine").unwrap(),
                Some("arid".into()),
                Some("desert".into()),
                Some(200_000),
            )
            .await
            .expect("create failed");

        let fetched = repo.get(planet.id).await.expect("get failed");
        assert_eq!(fetched.climate.as_deref(), Some("arid"));
        assert_eq!(fetched.population, Some(200_000));
    }

    #[tokio::test]
    async fn optional_fields_default_to_none() {
        let pool = test_pool().await;
        let repo = PlanetRepo::new(&pool);

        let planet = repo
            .create(PlanetName::new("Dagobah").unwrap(), None, None, None)
            .await
            .expect("create failed");

        assert!(planet.climate.is_none());
        assert!(planet.terrain.is_none());
        assert!(planet.population.is_none());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = PlanetRepo::new(&pool);

        let err = repo.delete(99).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "planet",
                id: 99
            }
        ));
    }
}
