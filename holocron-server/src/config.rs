//! Server configuration
//!
//! Environment-driven with CLI overrides:
//! - `PORT` for the listen port (default 3000)
//! - `DATABASE_URL` for the store (default: local SQLite file)

/// Default SQLite database when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db";

/// Default port when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// User id assumed when a request carries no `x-user-id` header.
const DEFAULT_USER_ID: i64 = 1;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Identity used by the favorites endpoints when the request
    /// does not name a user explicitly.
    pub default_user_id: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            default_user_id: DEFAULT_USER_ID,
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the environment.
    ///
    /// A non-numeric `PORT` falls back to the default rather than
    /// aborting startup.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            port,
            database_url,
            ..Self::default()
        }
    }
}

/// Rewrite the legacy `sqlite3://` scheme to `sqlite://`.
///
/// Some hosting platforms hand out connection strings with the old
/// scheme name; the driver only understands the current one.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("sqlite3://") {
        Some(rest) => format!("sqlite://{rest}"),
        None => url.to_string(),
    }
}
