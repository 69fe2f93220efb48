//! Identifier validation
//!
//! Student `ci` and course `code` values are checked here before a request
//! reaches the registry. The registry itself trusts its input.

use super::ValidationError;

/// Maximum length for identifiers, in characters
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Validated, non-empty identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `s` as the identifier named `field`.
    ///
    /// # Rules
    /// - Not empty, not only whitespace
    /// - At most 64 characters
    ///
    /// # Example
    /// ```
    /// use enrollctl_server::models::Identifier;
    ///
    /// assert!(Identifier::new("ci", "1001").is_ok());
    /// assert!(Identifier::new("ci", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if s.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_IDENTIFIER_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
