//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod character;
pub mod planet;
pub mod validation;

pub use character::CharacterName;
pub use planet::PlanetName;
pub use validation::ValidationError;
