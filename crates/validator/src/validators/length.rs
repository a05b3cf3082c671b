//! String length validators
//!
//! Length is measured in Unicode scalar values (chars).

use crate::descriptor::ValueDescriptor;
use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for String;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "Value must not be empty") }
    describe { ValueDescriptor::NotEmpty }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for String;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) {
        ValidationError::new(
            "min_length",
            format!("Must be at least {} characters", self.min),
        )
        .with_param("min", self.min.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    describe(self) { ValueDescriptor::MinLength { min: self.min } }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for String;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) {
        ValidationError::new(
            "max_length",
            format!("Must be at most {} characters", self.max),
        )
        .with_param("max", self.max.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    describe(self) { ValueDescriptor::MaxLength { max: self.max } }
    fn max_length(max: usize);
}
