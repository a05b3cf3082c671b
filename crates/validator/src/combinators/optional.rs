//! OPTIONAL combinator - validates `Option` values
//!
//! Lets a check written for `T` be attached to a container whose value is
//! `Option<T>` (optional and nullable policies). `None` always passes.

use crate::descriptor::ValueDescriptor;
use crate::foundation::{Validate, ValidationError};

/// Applies the inner validator to `Some` values only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalValue<V> {
    pub(crate) inner: V,
}

impl<V> OptionalValue<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for OptionalValue<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }

    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::Optional {
            inner: Box::new(self.inner.descriptor()),
        }
    }
}

/// Creates an [`OptionalValue`] combinator.
pub fn optional_value<V>(validator: V) -> OptionalValue<V> {
    OptionalValue::new(validator)
}
