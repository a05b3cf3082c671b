//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::descriptor::ValueDescriptor;
use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the message (and optionally the code) of the inner validator's
/// error. Parameters of the original error are kept.
///
/// # Examples
///
/// ```rust,ignore
/// let name = min_length(3).with_message("Name is too short").with_code("name_short");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also overrides the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut error| {
            if let Some(code) = &self.code {
                error.code = code.clone();
            }
            error.message = self.message.clone();
            error
        })
    }

    fn descriptor(&self) -> ValueDescriptor {
        self.inner.descriptor()
    }
}
