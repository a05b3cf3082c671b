//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator: it succeeds when the inner validator fails and vice versa.
//! Its descriptor marks the wrapped check as inverted.
//!
//! # Examples
//!
//! ```rust,ignore
//! use keel_validator::combinators::Not;
//! use keel_validator::foundation::Validate;
//!
//! // Boolean field that must not be set
//! let validator = Not::new(is_true());
//! assert!(validator.validate(&false).is_ok());
//! assert!(validator.validate(&true).is_err());
//! ```

use crate::descriptor::ValueDescriptor;
use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator succeeds, `Not` fails with code `"not"`
/// - If the inner validator fails, `Not` succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                "Validation should have failed but passed",
            )
            .with_param("inverted", inverted_code(&self.inner.descriptor()))),
            Err(_) => Ok(()),
        }
    }

    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::Inverted {
            inner: Box::new(self.inner.descriptor()),
        }
    }
}

fn inverted_code(descriptor: &ValueDescriptor) -> String {
    match descriptor {
        ValueDescriptor::Custom { code } => code.to_string(),
        other => serde_json::to_value(other)
            .ok()
            .and_then(|v| v.get("kind").and_then(|k| k.as_str()).map(str::to_owned))
            .unwrap_or_default(),
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::traits::ValidateExt;
    use crate::validators::{is_true, min_length};

    #[test]
    fn test_not_inverts_success() {
        let error = Not::new(is_true()).validate(&true).unwrap_err();
        assert_eq!(error.code, "not");
        assert_eq!(error.param("inverted"), Some("is_true"));
    }

    #[test]
    fn test_not_inverts_failure() {
        assert!(Not::new(is_true()).validate(&false).is_ok());
    }

    #[test]
    fn test_not_via_ext() {
        let validator = min_length(3).not();
        assert!(validator.validate(&"ab".to_string()).is_ok());
        assert!(validator.validate(&"abc".to_string()).is_err());
    }

    #[test]
    fn test_double_not() {
        let validator = not(not(is_true()));
        assert!(validator.validate(&true).is_ok());
        assert!(validator.validate(&false).is_err());
    }

    #[test]
    fn test_descriptor_is_inverted() {
        assert_eq!(
            not(is_true()).descriptor(),
            ValueDescriptor::Inverted {
                inner: Box::new(ValueDescriptor::IsTrue)
            }
        );
    }
}
