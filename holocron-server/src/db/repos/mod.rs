//! Repository implementations, one per resource

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;

pub use characters::{Character, CharacterRepo};
pub use favorites::FavoriteRepo;
pub use planets::{Planet, PlanetRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Lookup by id came up empty ("get-or-404" semantics).
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Favorite removal targeted a row that was never added.
    #[error("{resource} {id} not found in favorites")]
    NotInFavorites { resource: &'static str, id: i64 },
}
