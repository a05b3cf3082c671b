//! Error types for validation failures
//!
//! Two channels exist and never mix:
//!
//! - [`ValidationError`] / [`ValidationErrors`] describe *bad input*. They are
//!   plain data, returned in `Result`s, cached inside containers and unioned
//!   across a model graph.
//! - [`ConfigurationError`] describes *bad wiring* (a null default, a
//!   duplicate field in a verification plan). It is raised at construction
//!   time and never ends up in a validated-value result.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use crate::foundation::path::FieldPath;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A value is mandated but the field was absent (or null where null is
    /// not accepted as a value).
    Required,
    /// A non-nullable position received an explicit null.
    NotNull,
    /// Raised by a value validator.
    Custom,
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single located validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use keel_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 3 characters")
///     .with_param("min", "3");
/// assert_eq!(error.path.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Failure classification.
    pub kind: ErrorKind,

    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "not_null", "min_length"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Location of the failure, root to leaf.
    pub path: FieldPath,

    /// Ordered key-value parameters (typically 0-3).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a custom error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ErrorKind::Custom,
            code: code.into(),
            message: message.into(),
            path: FieldPath::root(),
            params: Vec::new(),
        }
    }

    /// Creates a "required" error.
    pub fn required() -> Self {
        Self {
            kind: ErrorKind::Required,
            ..Self::new("required", "This field is required")
        }
    }

    /// Creates a "not_null" error.
    pub fn not_null() -> Self {
        Self {
            kind: ErrorKind::NotNull,
            ..Self::new("not_null", "Value must not be null")
        }
    }

    /// Creates a "custom" error with only a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the path of this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: FieldPath) -> Self {
        self.path = path;
        self
    }

    /// Prepends a property segment to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn under_property(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.path.prepend_property(name);
        self
    }

    /// Prepends an element index segment to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn under_index(mut self, index: usize) -> Self {
        self.path.prepend_index(index);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
///
/// Errors are accumulated, never deduplicated. Prefixing helpers apply a
/// path segment to every contained error at once, which is how a model or a
/// collection attributes the failures of its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error of `other`.
    pub fn append(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Prepends a property segment to every error.
    #[must_use]
    pub fn under_property(mut self, name: &Cow<'static, str>) -> Self {
        for error in &mut self.errors {
            error.path.prepend_property(name.clone());
        }
        self
    }

    /// Prepends an element index segment to every error.
    #[must_use]
    pub fn under_index(mut self, index: usize) -> Self {
        for error in &mut self.errors {
            error.path.prepend_index(index);
        }
        self
    }

    /// Renders `(path, message)` pairs for response bodies.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .map(|e| (e.path.to_string(), e.message.to_string()))
            .collect()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// Programmer error in validator or plan wiring.
///
/// Never part of a validation result. Surfaced at construction time, or
/// through [`PlanRegistry::prepare`](crate::model::PlanRegistry::prepare)
/// at application start-up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A default value (literal or factory result) was absent.
    #[error("default value for `{type_name}` must not be null")]
    NullDefault { type_name: &'static str },

    /// Two plan steps were registered under the same name.
    #[error("field `{field}` is registered more than once in the verification plan of `{model}`")]
    DuplicateField { model: &'static str, field: String },

    /// A regex pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A cached plan did not belong to the requested model type.
    #[error("verification plan registered for shape `{shape}` does not belong to `{model}`")]
    ShapeMismatch { shape: String, model: &'static str },
}

impl ConfigurationError {
    /// Creates a null-default error for `T`.
    #[must_use]
    pub fn null_default<T: ?Sized>() -> Self {
        Self::NullDefault {
            type_name: std::any::type_name::<T>(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
