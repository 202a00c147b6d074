//! Root endpoints: the route map and the legacy greeting

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Every registered route, kept in sync with the router by the
/// route-map test in `http::server`.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/user"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{id}"),
    ("DELETE", "/people/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{id}"),
    ("DELETE", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
];

/// One entry in the route map
#[derive(Serialize)]
struct Endpoint {
    method: &'static str,
    path: &'static str,
}

/// GET / - machine-readable map of all registered routes
async fn route_map() -> Json<Value> {
    let endpoints: Vec<Endpoint> = ENDPOINTS
        .iter()
        .map(|&(method, path)| Endpoint { method, path })
        .collect();

    Json(json!({ "endpoints": endpoints }))
}

/// GET /user - static greeting, kept for client compatibility
async fn greeting() -> Json<Value> {
    Json(json!({
        "message": "Hello, this is your GET /user response",
    }))
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(route_map))
        .route("/user", get(greeting))
}
