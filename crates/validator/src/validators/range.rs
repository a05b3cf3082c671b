//! Numeric range validators
//!
//! Bounds are inclusive and work for any `PartialOrd + Display` value.

use std::fmt::Display;

use crate::descriptor::ValueDescriptor;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Send + Sync> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    describe(self) {
        ValueDescriptor::Range { min: Some(self.min.to_string()), max: None }
    }
    fn min(min: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Send + Sync> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    describe(self) {
        ValueDescriptor::Range { min: None, max: Some(self.max.to_string()) }
    }
    fn max(max: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Send + Sync> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::new(
            "out_of_range",
            format!("Value must be between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.to_string())
    }
    describe(self) {
        ValueDescriptor::Range {
            min: Some(self.min.to_string()),
            max: Some(self.max.to_string()),
        }
    }
    fn in_range(min: T, max: T);
}
