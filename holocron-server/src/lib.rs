//! holocron-server: HTTP API for the holocron catalogue
//!
//! Exposes characters, planets, and users over HTTP/JSON, with a
//! per-user favorites relation on top of a SQLite store.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::ServerConfig;
pub use http::{build_router, run_server, ApiError};
