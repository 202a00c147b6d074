//! Favorites endpoints
//!
//! Every handler resolves the acting user (404 if unknown) and the
//! target record (404 if unknown) before touching the junction table,
//! mirroring the repository "get-or-404" primitives.

use axum::{extract::State, routing::post, Json, Router};

use super::Confirmation;
use crate::db::repos::{CharacterRepo, FavoriteRepo, PlanetRepo, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{CurrentUser, Path};
use crate::http::server::AppState;

/// POST /favorite/people/{id} - add a character to favorites
async fn add_favorite_character(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(character_id): Path<i64>,
) -> Result<Json<Confirmation>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    CharacterRepo::new(&state.pool).get(character_id).await?;

    FavoriteRepo::new(&state.pool)
        .add_character(user_id, character_id)
        .await?;

    Ok(Json(Confirmation::new("character added to favorites")))
}

/// DELETE /favorite/people/{id} - remove a character from favorites
async fn remove_favorite_character(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(character_id): Path<i64>,
) -> Result<Json<Confirmation>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    CharacterRepo::new(&state.pool).get(character_id).await?;

    FavoriteRepo::new(&state.pool)
        .remove_character(user_id, character_id)
        .await?;

    Ok(Json(Confirmation::new("character removed from favorites")))
}

/// POST /favorite/planet/{id} - add a planet to favorites
async fn add_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(planet_id): Path<i64>,
) -> Result<Json<Confirmation>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    PlanetRepo::new(&state.pool).get(planet_id).await?;

    FavoriteRepo::new(&state.pool)
        .add_planet(user_id, planet_id)
        .await?;

    Ok(Json(Confirmation::new("planet added to favorites")))
}

/// DELETE /favorite/planet/{id} - remove a planet from favorites
async fn remove_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(planet_id): Path<i64>,
) -> Result<Json<Confirmation>, ApiError> {
    UserRepo::new(&state.pool).get(user_id).await?;
    PlanetRepo::new(&state.pool).get(planet_id).await?;

    FavoriteRepo::new(&state.pool)
        .remove_planet(user_id, planet_id)
        .await?;

    Ok(Json(Confirmation::new("planet removed from favorites")))
}

/// Favorites routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/favorite/people/{id}",
            post(add_favorite_character).delete(remove_favorite_character),
        )
        .route(
            "/favorite/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
}
