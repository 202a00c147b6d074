//! Custom Axum extractors

use axum::extract::{FromRef, FromRequest, FromRequestParts};
use axum::http::request::Parts;

use super::error::ApiError;
use super::server::AppState;

/// Header naming the acting user for the favorites endpoints.
const USER_ID_HEADER: &str = "x-user-id";

/// JSON body extractor whose rejection is the structured error
/// envelope instead of axum's plain-text default.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

/// Path extractor with the same structured rejection; a non-numeric
/// id segment becomes a 400 envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

/// The identity a favorites request acts on behalf of.
///
/// Read from the `x-user-id` header; requests without the header fall
/// back to the configured default user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);

        match parts.headers.get(USER_ID_HEADER) {
            None => Ok(Self(app.default_user_id)),
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|s| s.trim().parse::<i64>().ok())
                .map(Self)
                .ok_or_else(|| {
                    ApiError::BadRequest(format!("{USER_ID_HEADER} header must be an integer"))
                }),
        }
    }
}
