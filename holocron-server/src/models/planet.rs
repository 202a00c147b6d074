//! Planet name validation

use super::ValidationError;

/// Maximum length for planet names (matches the column width)
const MAX_PLANET_NAME_LEN: usize = 120;

/// Validated planet name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetName(String);

impl PlanetName {
    /// Create a new planet name, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_PLANET_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_PLANET_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PlanetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name() {
        let name = PlanetName::new("Tatooine").unwrap();
        assert_eq!(name.as_str(), "Tatooine");
    }

    #[test]
    fn rejects_empty() {
        let err = PlanetName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = PlanetName::new(" \t ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }
}
