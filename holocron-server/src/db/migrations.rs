//! Database bootstrap
//!
//! Creates the catalogue tables on startup. All statements are
//! idempotent so running against an existing database is a no-op.

use sqlx::SqlitePool;

/// Email of the user seeded when the database is first created.
const DEFAULT_USER_EMAIL: &str = "admin@holocron.local";

/// Run all bootstrap DDL.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            species TEXT,
            homeworld TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            climate TEXT,
            terrain TEXT,
            population INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Composite primary keys give favorites their set semantics.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorite_characters (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            character_id INTEGER NOT NULL REFERENCES characters(id) ON DELETE CASCADE,
            PRIMARY KEY (user_id, character_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorite_planets (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            planet_id INTEGER NOT NULL REFERENCES planets(id) ON DELETE CASCADE,
            PRIMARY KEY (user_id, planet_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Seed the default identity so favorites work out of the box on a
    // fresh database. Existing rows are left untouched.
    sqlx::query("INSERT OR IGNORE INTO users (id, email) VALUES (1, ?)")
        .bind(DEFAULT_USER_EMAIL)
        .execute(pool)
        .await?;

    tracing::info!("Database bootstrap complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;

    async fn memory_pool() -> SqlitePool {
        create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed")
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let pool = memory_pool().await;
        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");

        let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .expect("count failed");
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn seeds_default_user() {
        let pool = memory_pool().await;
        run(&pool).await.expect("bootstrap failed");

        let (email,): (String,) = sqlx::query_as("SELECT email FROM users WHERE id = 1")
            .fetch_one(&pool)
            .await
            .expect("seed user missing");
        assert_eq!(email, DEFAULT_USER_EMAIL);
    }

    #[tokio::test]
    async fn deleting_character_cascades_favorites() {
        let pool = memory_pool().await;
        run(&pool).await.expect("bootstrap failed");

        sqlx::query("INSERT INTO characters (id, name) VALUES (10, 'Luke')")
            .execute(&pool)
            .await
            .expect("insert character");
        sqlx::query("INSERT INTO favorite_characters (user_id, character_id) VALUES (1, 10)")
            .execute(&pool)
            .await
            .expect("insert favorite");

        sqlx::query("DELETE FROM characters WHERE id = 10")
            .execute(&pool)
            .await
            .expect("delete character");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorite_characters")
            .fetch_one(&pool)
            .await
            .expect("count failed");
        assert_eq!(count, 0);
    }
}
