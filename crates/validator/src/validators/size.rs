//! Collection size validators

use crate::descriptor::ValueDescriptor;
use crate::foundation::{Validate, ValidationError};
use std::marker::PhantomData;

// ============================================================================
// MIN SIZE
// ============================================================================

/// Validates that a collection has at least a minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinSize<T> {
    min: usize,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for MinSize<T> {
    type Input = Vec<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size >= self.min {
            Ok(())
        } else {
            Err(ValidationError::new(
                "min_size",
                format!(
                    "Collection must have at least {} elements, got {}",
                    self.min, size
                ),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", size.to_string()))
        }
    }

    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::MinSize { min: self.min }
    }
}

/// Creates a validator that checks if a collection has at least a minimum size.
#[must_use]
pub fn min_size<T>(min: usize) -> MinSize<T> {
    MinSize {
        min,
        _phantom: PhantomData,
    }
}

// ============================================================================
// MAX SIZE
// ============================================================================

/// Validates that a collection does not exceed a maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxSize<T> {
    max: usize,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for MaxSize<T> {
    type Input = Vec<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "max_size",
                format!(
                    "Collection must have at most {} elements, got {}",
                    self.max, size
                ),
            )
            .with_param("max", self.max.to_string())
            .with_param("actual", size.to_string()))
        }
    }

    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::MaxSize { max: self.max }
    }
}

/// Creates a validator that checks if a collection has at most a maximum size.
#[must_use]
pub fn max_size<T>(max: usize) -> MaxSize<T> {
    MaxSize {
        max,
        _phantom: PhantomData,
    }
}
