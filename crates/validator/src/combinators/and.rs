//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed. The
//! right validator is not run when the left one fails.
//!
//! # Examples
//!
//! ```rust,ignore
//! use keel_validator::combinators::And;
//! use keel_validator::foundation::Validate;
//!
//! let validator = And::new(min_length(5), max_length(20));
//! assert!(validator.validate(&"hello".to_string()).is_ok());
//! assert!(validator.validate(&"hi".to_string()).is_err());
//! ```

use crate::descriptor::ValueDescriptor;
use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }

    /// Flattens nested conjunctions into one `All` list.
    fn descriptor(&self) -> ValueDescriptor {
        let mut of = Vec::new();
        for part in [self.left.descriptor(), self.right.descriptor()] {
            match part {
                ValueDescriptor::All { of: nested } => of.extend(nested),
                other => of.push(other),
            }
        }
        ValueDescriptor::All { of }
    }
}

/// Creates an `And` combinator.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
