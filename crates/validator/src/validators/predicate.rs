//! Closure-backed validator

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::descriptor::ValueDescriptor;
use crate::foundation::{Validate, ValidationError};

/// Validates a value with a boolean closure.
///
/// ```rust,ignore
/// let even = predicate("even", "Must be even", |n: &u32| n % 2 == 0);
/// ```
pub struct Predicate<T: ?Sized, F> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    test: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Creates a predicate validator reporting `code` and `message`.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        test: F,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            test,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Validate for Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if (self.test)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), self.message.clone()))
        }
    }

    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::Custom {
            code: self.code.clone(),
        }
    }
}

impl<T: ?Sized, F> std::fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Predicate`].
pub fn predicate<T: ?Sized, F>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    test: F,
) -> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    Predicate::new(code, message, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate() {
        let even = predicate("even", "Must be even", |n: &u32| n % 2 == 0);
        assert!(even.validate(&4).is_ok());
        let error = even.validate(&3).unwrap_err();
        assert_eq!(error.code, "even");
        assert_eq!(error.message, "Must be even");
        assert_eq!(
            even.descriptor(),
            ValueDescriptor::Custom {
                code: Cow::Borrowed("even")
            }
        );
    }
}
