//! User endpoints
//!
//! Users are read-only over HTTP. The favorites listing resolves the
//! acting user through the `CurrentUser` extractor.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{Character, FavoriteRepo, Planet, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::CurrentUser;
use crate::http::server::AppState;

/// GET /users/favorites response
#[derive(Serialize)]
pub struct FavoritesResponse {
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
}

/// GET /users - list all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users))
}

/// GET /users/favorites - favorites of the acting user
async fn get_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<FavoritesResponse>, ApiError> {
    // get-or-404: an unknown user id surfaces before any join runs
    UserRepo::new(&state.pool).get(user_id).await?;

    let favorites = FavoriteRepo::new(&state.pool);
    let characters = favorites.characters_of(user_id).await?;
    let planets = favorites.planets_of(user_id).await?;

    Ok(Json(FavoritesResponse {
        characters,
        planets,
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/favorites", get(get_favorites))
}
