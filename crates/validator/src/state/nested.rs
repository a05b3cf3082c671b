//! Nested model policy

use crate::data::Presence;
use crate::descriptor::{StateDescriptor, ValueDescriptor};
use crate::foundation::{ModelContext, ValidationErrors};
use crate::model::Model;
use crate::state::{IntoNullable, StateValidator};

/// Wraps a presence policy whose value is itself a [`Model`]; an accepted
/// value is verified with its own plan.
///
/// `Option<M>` and `Vec<M>` are models too, so optional and list-valued
/// nested fields work the same way:
///
/// ```rust,ignore
/// let lines = required::<Vec<Line>>().nested().into_data();
/// // a failing `name` in the third line reports `lines[2].name`
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nested<S> {
    inner: S,
}

impl<S> Nested<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S> StateValidator for Nested<S>
where
    S: StateValidator,
    S::Value: Model,
{
    type Raw = S::Raw;
    type Value = S::Value;

    fn validate(&self, state: Presence<S::Raw>) -> Result<S::Value, ValidationErrors> {
        self.inner.validate(state)
    }

    fn verify_contents(
        &self,
        value: &S::Value,
        ctx: &ModelContext<'_>,
    ) -> Result<(), ValidationErrors> {
        self.inner.verify_contents(value, ctx)?;
        ctx.registry().verify(value)
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Nested {
            inner: Box::new(self.inner.descriptor()),
        }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        self.inner.implicit_value_descriptors()
    }
}

impl<S: IntoNullable> IntoNullable for Nested<S> {
    type Nullable = Nested<S::Nullable>;

    fn nullable(self) -> Self::Nullable {
        Nested::new(self.inner.nullable())
    }
}
