//! The `Data<S>` value container
//!
//! A container pairs a presence policy and its attached value validators
//! (the *template*, shared between copies) with one bound raw input and its
//! memoized verification outcome (the *instance*).
//!
//! ```rust,ignore
//! let name = required::<String>().into_data().with_validator(min_length(3));
//!
//! let bound = name.with_value("Ada".to_string());
//! assert_eq!(bound.verify(&ModelContext::detached()), Ok(&"Ada".to_string()));
//! assert_eq!(bound.state(), DataState::Valid);
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::data::{DataState, Presence};
use crate::descriptor::DataDescriptor;
use crate::foundation::{
    ModelCheck, ModelContext, ValidationError, ValidationErrors, ValueValidator,
};
use crate::state::StateValidator;

type Outcome<V> = Result<V, ValidationErrors>;

/// Configuration shared by every instance bound from the same template.
struct Template<S: StateValidator> {
    validator: Arc<S>,
    checks: Vec<Arc<dyn ValueValidator<S::Value>>>,
    descriptor: OnceLock<DataDescriptor>,
}

impl<S: StateValidator> Template<S> {
    fn describe(&self) -> DataDescriptor {
        let mut values = self.validator.implicit_value_descriptors();
        values.extend(self.checks.iter().map(|check| check.describe()));
        DataDescriptor {
            state: self.validator.descriptor(),
            values,
        }
    }
}

/// A validated field: presence policy, value checks, bound input and cached
/// outcome.
///
/// Binding (`with_value`, `with_null`, `unset`) returns a new instance that
/// shares the template and starts unverified. The first [`verify`] computes
/// the outcome; later calls return the cached one regardless of context.
///
/// [`verify`]: Data::verify
pub struct Data<S: StateValidator> {
    template: Arc<Template<S>>,
    presence: Presence<S::Raw>,
    outcome: OnceLock<Outcome<S::Value>>,
}

impl<S: StateValidator> Data<S> {
    /// Creates an unset container for `validator` with no value checks.
    pub fn new(validator: S) -> Self {
        Self::from_template(
            Arc::new(Template {
                validator: Arc::new(validator),
                checks: Vec::new(),
                descriptor: OnceLock::new(),
            }),
            Presence::Unset,
        )
    }

    fn from_template(template: Arc<Template<S>>, presence: Presence<S::Raw>) -> Self {
        Self {
            template,
            presence,
            outcome: OnceLock::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Template configuration
    // ------------------------------------------------------------------------

    /// Attaches a value check, run after the checks already attached.
    ///
    /// Returns a new template; this instance's bound input is kept but its
    /// outcome is reset.
    #[must_use]
    pub fn with_validator<V>(self, validator: V) -> Self
    where
        V: ValueValidator<S::Value> + 'static,
    {
        let mut checks = self.template.checks.clone();
        checks.push(Arc::new(validator));
        Self::from_template(
            Arc::new(Template {
                validator: Arc::clone(&self.template.validator),
                checks,
                descriptor: OnceLock::new(),
            }),
            self.presence,
        )
    }

    /// Attaches a check that receives the enclosing model, if it is an `M`.
    #[must_use]
    pub fn with_model_check<M, F>(self, code: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        M: Any,
        F: Fn(&S::Value, Option<&M>) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.with_validator(ModelCheck::<M, S::Value, F>::new(code, check))
    }

    // ------------------------------------------------------------------------
    // Binding
    // ------------------------------------------------------------------------

    /// Binds a supplied value.
    #[must_use]
    pub fn with_value(&self, raw: S::Raw) -> Self {
        self.with_presence(Presence::Value(raw))
    }

    /// Binds an explicit null.
    #[must_use]
    pub fn with_null(&self) -> Self {
        self.with_presence(Presence::Null)
    }

    /// Binds an absent field.
    #[must_use]
    pub fn unset(&self) -> Self {
        self.with_presence(Presence::Unset)
    }

    /// Binds any presence state.
    #[must_use]
    pub fn with_presence(&self, presence: Presence<S::Raw>) -> Self {
        Self::from_template(Arc::clone(&self.template), presence)
    }

    /// Binds input that could not be decoded: the outcome is resolved to
    /// `errors` without running any check.
    #[must_use]
    pub fn with_errors(&self, errors: impl Into<ValidationErrors>) -> Self {
        let data = self.unset();
        let _ = data.outcome.set(Err(errors.into()));
        data
    }

    // ------------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------------

    /// Verifies the bound input against the model in `ctx`.
    ///
    /// Runs the presence policy, then content verification (collection
    /// elements, nested models), then the attached value checks in order,
    /// stopping at the first failing check. The outcome is computed once.
    ///
    /// Errors are reported relative to this container (empty path for its
    /// own failures).
    pub fn verify(&self, ctx: &ModelContext<'_>) -> Result<&S::Value, &ValidationErrors> {
        self.outcome.get_or_init(|| self.evaluate(ctx)).as_ref()
    }

    /// [`verify`](Self::verify) outside any model.
    pub fn verify_detached(&self) -> Result<&S::Value, &ValidationErrors> {
        self.verify(&ModelContext::detached())
    }

    fn evaluate(&self, ctx: &ModelContext<'_>) -> Outcome<S::Value> {
        let validator = &self.template.validator;
        let value = validator.validate(self.presence.clone())?;
        validator.verify_contents(&value, ctx)?;
        for check in &self.template.checks {
            check.check(&value, ctx)?;
        }
        Ok(value)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Observable state of the cached outcome.
    pub fn state(&self) -> DataState {
        match self.outcome.get() {
            None => DataState::NotVerified,
            Some(Ok(_)) => DataState::Valid,
            Some(Err(_)) => DataState::Invalid,
        }
    }

    /// The bound raw input.
    pub fn presence(&self) -> &Presence<S::Raw> {
        &self.presence
    }

    /// The validated value, once verified successfully.
    pub fn value(&self) -> Option<&S::Value> {
        self.outcome.get().and_then(|outcome| outcome.as_ref().ok())
    }

    /// The errors, once verified unsuccessfully.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.outcome.get().and_then(|outcome| outcome.as_ref().err())
    }

    /// The presence policy.
    pub fn validator(&self) -> &S {
        &self.template.validator
    }

    /// Static description of the template, computed once per template.
    pub fn descriptor(&self) -> &DataDescriptor {
        self.template
            .descriptor
            .get_or_init(|| self.template.describe())
    }
}

impl<S: StateValidator> Clone for Data<S> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            presence: self.presence.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

impl<S: StateValidator> From<S> for Data<S> {
    fn from(validator: S) -> Self {
        Self::new(validator)
    }
}

impl<S> fmt::Debug for Data<S>
where
    S: StateValidator,
    S::Raw: fmt::Debug,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("presence", &self.presence)
            .field("outcome", &self.outcome.get())
            .field("checks", &self.template.checks.len())
            .finish()
    }
}
