//! State validator catalog
//!
//! A state validator is the presence *policy* of a container: it turns a
//! [`Presence`] of raw input into a validated value or an error, and
//! describes itself for schema tooling.
//!
//! | policy                | value        | unset           | null            |
//! |-----------------------|--------------|-----------------|-----------------|
//! | [`Required`]          | `T`          | `Required`      | `Required`      |
//! | [`NullableRequired`]  | `Option<T>`  | `Required`      | `None`          |
//! | [`Optional`]          | `Option<T>`  | `None`          | `NotNull`       |
//! | [`OptionalNullable`]  | `Option<T>`  | `None`          | `None`          |
//! | [`Defaulted`]         | `T`          | default         | `NotNull`       |
//! | [`NullableDefaulted`] | `Option<T>`  | `Some(default)` | `None`          |
//!
//! Collections apply one of these policies to an array and verify every
//! element against an item template; see [`collection`].

pub mod collection;
pub mod nested;
pub mod scalar;

use crate::data::{Data, Presence};
use crate::descriptor::{StateDescriptor, ValueDescriptor};
use crate::foundation::{ModelContext, ValidationErrors};

pub use collection::{
    Collection, CollectionBuilder, DefaultedCollection, DefaultedNullableCollection, Elements,
    NullableDefaultedCollection, NullableDefaultedNullableCollection, NullableItems,
    NullableItemsBuilder, NullableRequiredCollection, OptionalCollection,
    OptionalNullableCollection, RequiredCollection, collection,
};
pub use nested::Nested;
pub use scalar::{
    Defaulted, IntoNullable, NullableDefaulted, NullableRequired, Optional, OptionalNullable,
    Required, defaulted, defaulted_with, nullable_required, optional, optional_nullable,
    required, try_defaulted, try_defaulted_with,
};

// ============================================================================
// STATE VALIDATOR TRAIT
// ============================================================================

/// Presence policy of a container.
///
/// Implementations are stateless apart from configuration captured at
/// construction (a default, a default factory, an item template).
pub trait StateValidator: Send + Sync + 'static {
    /// Raw input bound by adapters.
    type Raw: Clone + Send + Sync + 'static;

    /// Validated value.
    type Value: Clone + Send + Sync + 'static;

    /// Maps a presence state to a validated value.
    fn validate(&self, state: Presence<Self::Raw>) -> Result<Self::Value, ValidationErrors>;

    /// Verifies the contents of an accepted value (collection elements,
    /// nested models). Runs before attached value validators.
    fn verify_contents(
        &self,
        _value: &Self::Value,
        _ctx: &ModelContext<'_>,
    ) -> Result<(), ValidationErrors> {
        Ok(())
    }

    /// Static description of the policy.
    fn descriptor(&self) -> StateDescriptor;

    /// Checks implied by the policy itself (e.g. `Required`, `NotNull`).
    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        Vec::new()
    }
}

/// Conversion helpers for state validators.
pub trait StateValidatorExt: StateValidator + Sized {
    /// Wraps the policy in a fresh, unset container.
    fn into_data(self) -> Data<Self> {
        Data::new(self)
    }

    /// Verifies the value as a model after the policy accepts it.
    fn nested(self) -> Nested<Self> {
        Nested::new(self)
    }
}

impl<S: StateValidator> StateValidatorExt for S {}
