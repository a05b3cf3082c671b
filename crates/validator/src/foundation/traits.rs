//! Core traits for value validation
//!
//! [`Validate`] is the trait every value check implements. Containers store
//! their checks as [`ValueValidator`] trait objects, which additionally see
//! the [`ModelContext`] of the enclosing model; every `Validate` is a
//! `ValueValidator` for its input type.

use crate::descriptor::ValueDescriptor;
use crate::foundation::{ModelContext, ValidationError};
use std::any::Any;
use std::borrow::Cow;
use std::marker::PhantomData;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all value validators implement.
///
/// # Examples
///
/// ```rust,ignore
/// use keel_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Must be even"))
///         }
///     }
/// }
/// ```
pub trait Validate: Send + Sync {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Static description of this check for schema tooling.
    fn descriptor(&self) -> ValueDescriptor {
        ValueDescriptor::Custom {
            code: Cow::Borrowed(short_type_name::<Self>()),
        }
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// CONTAINER-FACING VALIDATOR TRAIT
// ============================================================================

/// A value check as stored inside a container.
///
/// Implemented for every [`Validate`], and by [`ModelCheck`] for checks that
/// need the enclosing model.
pub trait ValueValidator<T: ?Sized>: Send + Sync {
    /// Checks `value`, owned by the model in `ctx`.
    fn check(&self, value: &T, ctx: &ModelContext<'_>) -> Result<(), ValidationError>;

    /// Static description of this check.
    fn describe(&self) -> ValueDescriptor;
}

impl<V: Validate> ValueValidator<V::Input> for V {
    fn check(&self, value: &V::Input, _ctx: &ModelContext<'_>) -> Result<(), ValidationError> {
        self.validate(value)
    }

    fn describe(&self) -> ValueDescriptor {
        self.descriptor()
    }
}

/// Cross-field check receiving the enclosing model.
///
/// The closure gets `None` when the container is verified detached or
/// against a model of another type.
pub struct ModelCheck<M, T: ?Sized, F> {
    code: Cow<'static, str>,
    check: F,
    _phantom: PhantomData<fn(&M, &T)>,
}

impl<M, T: ?Sized, F> ModelCheck<M, T, F> {
    /// Creates a model-aware check described by `code`.
    pub fn new(code: impl Into<Cow<'static, str>>, check: F) -> Self {
        Self {
            code: code.into(),
            check,
            _phantom: PhantomData,
        }
    }
}

impl<M, T, F> ValueValidator<T> for ModelCheck<M, T, F>
where
    M: Any,
    T: ?Sized,
    F: Fn(&T, Option<&M>) -> Result<(), ValidationError> + Send + Sync,
{
    fn check(&self, value: &T, ctx: &ModelContext<'_>) -> Result<(), ValidationError> {
        (self.check)(value, ctx.model::<M>())
    }

    fn describe(&self) -> ValueDescriptor {
        ValueDescriptor::Custom {
            code: self.code.clone(),
        }
    }
}

impl<M, T: ?Sized, F> std::fmt::Debug for ModelCheck<M, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelCheck")
            .field("code", &self.code)
            .field("check", &"<function>")
            .finish()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate`.
///
/// # Examples
///
/// ```rust,ignore
/// use keel_validator::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.validate(&"hello".to_string()).is_ok());
///
/// let forbidden = matches_regex("^admin")?.not();
/// assert!(forbidden.validate(&"admin1".to_string()).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND, short-circuiting on the
    /// first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Inverts the validator: passes when the inner check fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Lifts the validator to `Option<Input>`; `None` passes.
    fn optional(self) -> OptionalValue<Self>
    where
        Self::Input: Sized,
    {
        OptionalValue::new(self)
    }

    /// Replaces the error message reported on failure.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::OptionalValue;

// ============================================================================
// TESTS
// ============================================================================
