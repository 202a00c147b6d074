//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Favorites listings use JOINs - no N+1 queries
//! - Set semantics come from DB constraints (composite keys + INSERT
//!   OR IGNORE) - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
