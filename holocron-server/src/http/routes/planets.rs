//! Planet endpoints

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Deserialize;

use super::Confirmation;
use crate::db::repos::{Planet, PlanetRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Json, Path};
use crate::http::server::AppState;
use crate::models::PlanetName;

/// Create planet request
#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

/// GET /planets - list all planets
async fn list_planets(State(state): State<AppState>) -> Result<axum::Json<Vec<Planet>>, ApiError> {
    let planets = PlanetRepo::new(&state.pool).list().await?;
    Ok(axum::Json(planets))
}

/// GET /planets/{id} - get a single planet
async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::Json<Planet>, ApiError> {
    let planet = PlanetRepo::new(&state.pool).get(id).await?;
    Ok(axum::Json(planet))
}

/// POST /planets - create a planet
async fn create_planet(
    State(state): State<AppState>,
    Json(req): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, axum::Json<Planet>), ApiError> {
    let name = PlanetName::new(req.name.as_deref().unwrap_or_default())?;
    let planet = PlanetRepo::new(&state.pool)
        .create(name, req.climate, req.terrain, req.population)
        .await?;

    Ok((StatusCode::CREATED, axum::Json(planet)))
}

/// DELETE /planets/{id} - delete a planet
async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::Json<Confirmation>, ApiError> {
    PlanetRepo::new(&state.pool).delete(id).await?;
    Ok(axum::Json(Confirmation::new("planet deleted")))
}

/// Planet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets).post(create_planet))
        .route("/planets/{id}", get(get_planet).delete(delete_planet))
}
