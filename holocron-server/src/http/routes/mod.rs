//! Route handlers organized by resource

pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod root;
pub mod users;

use serde::Serialize;

/// Body returned by write endpoints that have no record to echo back.
#[derive(Serialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
