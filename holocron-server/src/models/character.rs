//! Character name validation
//!
//! A character must have a non-empty name at creation; everything
//! else about it is optional.

use super::ValidationError;

/// Maximum length for character names (matches the column width)
const MAX_CHARACTER_NAME_LEN: usize = 120;

/// Validated character name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new character name.
    ///
    /// Surrounding whitespace is trimmed; a whitespace-only name
    /// counts as empty.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_CHARACTER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_CHARACTER_NAME_LEN,
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

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name() {
        let name = CharacterName::new("Luke Skywalker").unwrap();
        assert_eq!(name.as_str(), "Luke Skywalker");
    }

    #[test]
    fn trims_whitespace() {
        let name = CharacterName::new("  Leia  ").unwrap();
        assert_eq!(name.as_str(), "Leia");
    }

    #[test]
    fn rejects_empty() {
        let err = CharacterName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = CharacterName::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_over_length() {
        let long = "a".repeat(121);
        let err = CharacterName::new(&long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 120, .. }));
    }
}
