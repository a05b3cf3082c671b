//! Regular expression validator

use regex::Regex;

use crate::descriptor::ValueDescriptor;
use crate::foundation::{ConfigurationError, Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// The pattern is compiled once at construction; an invalid pattern is a
/// [`ConfigurationError`].
///
/// # Examples
///
/// ```rust,ignore
/// use keel_validator::validators::matches_regex;
/// use keel_validator::foundation::Validate;
///
/// let sku = matches_regex(r"^[A-Z]{3}-\d{4}$")?;
/// assert!(sku.validate(&"ABC-1234".to_string()).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    regex: Regex,
}

impl MatchesRegex {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|e| ConfigurationError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for MatchesRegex {
    type Input = String;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "pattern",
                format!("Value must match pattern '{}'", self.pattern()),
            )
            .with_param("pattern", self.pattern().to_owned()))
        }
    }

    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::Pattern {
            pattern: self.pattern().to_owned(),
        }
    }
}

/// Creates a regex validator, failing on an invalid pattern.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, ConfigurationError> {
    MatchesRegex::new(pattern)
}
