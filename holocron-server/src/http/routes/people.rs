//! Character endpoints
//!
//! Mounted under /people for client compatibility even though the
//! records are called characters internally.

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Deserialize;

use super::Confirmation;
use crate::db::repos::{Character, CharacterRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Json, Path};
use crate::http::server::AppState;
use crate::models::CharacterName;

/// Create character request
#[derive(Deserialize)]
pub struct CreateCharacterRequest {
    /// Optional here so a missing name reports "name cannot be
    /// empty" instead of a deserialization rejection.
    pub name: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
}

/// GET /people - list all characters
async fn list_people(State(state): State<AppState>) -> Result<axum::Json<Vec<Character>>, ApiError> {
    let characters = CharacterRepo::new(&state.pool).list().await?;
    Ok(axum::Json(characters))
}

/// GET /people/{id} - get a single character
async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::Json<Character>, ApiError> {
    let character = CharacterRepo::new(&state.pool).get(id).await?;
    Ok(axum::Json(character))
}

/// POST /people - create a character
async fn create_person(
    State(state): State<AppState>,
    Json(req): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, axum::Json<Character>), ApiError> {
    let name = CharacterName::new(req.name.as_deref().unwrap_or_default())?;
    let character = CharacterRepo::new(&state.pool)
        .create(name, req.species, req.homeworld)
        .await?;

    Ok((StatusCode::CREATED, axum::Json(character)))
}

/// DELETE /people/{id} - delete a character
async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::Json<Confirmation>, ApiError> {
    CharacterRepo::new(&state.pool).delete(id).await?;
    Ok(axum::Json(Confirmation::new("character deleted")))
}

/// Character routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route("/people/{id}", get(get_person).delete(delete_person))
}
