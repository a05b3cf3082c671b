//! Collection presence policies
//!
//! A collection binds `Vec<Option<T>>` (a decoded array whose elements may
//! be null), applies a scalar policy to the array as a whole and then
//! verifies every element against an item template.
//!
//! ```rust,ignore
//! let tags = collection(required::<String>().into_data().with_validator(not_empty()))
//!     .defaulted(Vec::new())
//!     .nullable();
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::combinators::each::{reject_null_items, validate_each};
use crate::data::{Data, Presence};
use crate::descriptor::{StateDescriptor, ValueDescriptor};
use crate::foundation::{ModelContext, ValidationErrors};
use crate::state::scalar::{
    Defaulted, NullableDefaulted, NullableRequired, Optional, OptionalNullable, Required,
};
use crate::state::{IntoNullable, StateValidator, defaulted, defaulted_with, optional, required};

// ============================================================================
// ELEMENTS
// ============================================================================

/// Access to the present elements of an accepted collection value.
///
/// Implemented for the value shapes the array policies produce: `Vec<T>`
/// and `Option<Vec<T>>`, with or without nullable elements. Null elements
/// and an absent array yield nothing.
pub trait Elements<T: 'static> {
    /// Iterates `(index, element)` over present elements.
    fn present(&self) -> impl Iterator<Item = (usize, &T)>;
}

impl<T: 'static> Elements<T> for Vec<T> {
    fn present(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<T: 'static> Elements<T> for Option<Vec<T>> {
    fn present(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().flat_map(|items| items.iter().enumerate())
    }
}

impl<T: 'static> Elements<T> for Vec<Option<T>> {
    fn present(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter()
            .enumerate()
            .filter_map(|(index, item)| item.as_ref().map(|item| (index, item)))
    }
}

impl<T: 'static> Elements<T> for Option<Vec<Option<T>>> {
    fn present(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().flat_map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| item.as_ref().map(|item| (index, item)))
        })
    }
}

// ============================================================================
// COLLECTION (NON-NULLABLE ITEMS)
// ============================================================================

/// Array policy `P` over items verified by the template `Data<S>`; null
/// elements are rejected with `NotNull` at their index.
pub struct Collection<P, S: StateValidator> {
    policy: P,
    item: Arc<Data<S>>,
}

impl<P, S: StateValidator> Collection<P, S> {
    fn new(policy: P, item: Data<S>) -> Self {
        Self {
            policy,
            item: Arc::new(item.unset()),
        }
    }

    /// The item template.
    pub fn item(&self) -> &Data<S> {
        &self.item
    }

    /// The array policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: Clone, S: StateValidator> Clone for Collection<P, S> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy.clone(),
            item: Arc::clone(&self.item),
        }
    }
}

impl<P: std::fmt::Debug, S: StateValidator> std::fmt::Debug for Collection<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("policy", &self.policy)
            .field("item", &self.item.descriptor())
            .finish()
    }
}

impl<P, S> StateValidator for Collection<P, S>
where
    S: StateValidator,
    P: StateValidator<Raw = Vec<S::Raw>>,
    P::Value: Elements<S::Raw>,
{
    type Raw = Vec<Option<S::Raw>>;
    type Value = P::Value;

    fn validate(&self, state: Presence<Self::Raw>) -> Result<Self::Value, ValidationErrors> {
        let state = state.try_map(reject_null_items)?;
        self.policy.validate(state)
    }

    fn verify_contents(
        &self,
        value: &Self::Value,
        ctx: &ModelContext<'_>,
    ) -> Result<(), ValidationErrors> {
        validate_each(&self.item, value.present(), ctx)
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Collection {
            policy: Box::new(self.policy.descriptor()),
            item: Box::new(self.item.descriptor().clone()),
            nullable_items: false,
        }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        self.policy.implicit_value_descriptors()
    }
}

impl<P: IntoNullable, S: StateValidator> IntoNullable for Collection<P, S> {
    type Nullable = Collection<P::Nullable, S>;

    fn nullable(self) -> Self::Nullable {
        Collection {
            policy: self.policy.nullable(),
            item: self.item,
        }
    }
}

// ============================================================================
// COLLECTION (NULLABLE ITEMS)
// ============================================================================

/// Array policy `P` over items verified by the template `Data<S>`; null
/// elements are accepted and skip item verification.
pub struct NullableItems<P, S: StateValidator> {
    policy: P,
    item: Arc<Data<S>>,
}

impl<P, S: StateValidator> NullableItems<P, S> {
    fn new(policy: P, item: Data<S>) -> Self {
        Self {
            policy,
            item: Arc::new(item.unset()),
        }
    }

    /// The item template.
    pub fn item(&self) -> &Data<S> {
        &self.item
    }
}

impl<P: Clone, S: StateValidator> Clone for NullableItems<P, S> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy.clone(),
            item: Arc::clone(&self.item),
        }
    }
}

impl<P: std::fmt::Debug, S: StateValidator> std::fmt::Debug for NullableItems<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NullableItems")
            .field("policy", &self.policy)
            .field("item", &self.item.descriptor())
            .finish()
    }
}

impl<P, S> StateValidator for NullableItems<P, S>
where
    S: StateValidator,
    P: StateValidator<Raw = Vec<Option<S::Raw>>>,
    P::Value: Elements<S::Raw>,
{
    type Raw = Vec<Option<S::Raw>>;
    type Value = P::Value;

    fn validate(&self, state: Presence<Self::Raw>) -> Result<Self::Value, ValidationErrors> {
        self.policy.validate(state)
    }

    fn verify_contents(
        &self,
        value: &Self::Value,
        ctx: &ModelContext<'_>,
    ) -> Result<(), ValidationErrors> {
        validate_each(&self.item, value.present(), ctx)
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Collection {
            policy: Box::new(self.policy.descriptor()),
            item: Box::new(self.item.descriptor().clone()),
            nullable_items: true,
        }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        self.policy.implicit_value_descriptors()
    }
}

impl<P: IntoNullable, S: StateValidator> IntoNullable for NullableItems<P, S> {
    type Nullable = NullableItems<P::Nullable, S>;

    fn nullable(self) -> Self::Nullable {
        NullableItems {
            policy: self.policy.nullable(),
            item: self.item,
        }
    }
}

// ============================================================================
// ALIASES
// ============================================================================

type RawOf<S> = <S as StateValidator>::Raw;

/// Required array, non-null items.
pub type RequiredCollection<S> = Collection<Required<Vec<RawOf<S>>>, S>;
/// Required-or-null array, non-null items.
pub type NullableRequiredCollection<S> = Collection<NullableRequired<Vec<RawOf<S>>>, S>;
/// Optional array, non-null items.
pub type OptionalCollection<S> = Collection<Optional<Vec<RawOf<S>>>, S>;
/// Optional-or-null array, non-null items.
pub type OptionalNullableCollection<S> = Collection<OptionalNullable<Vec<RawOf<S>>>, S>;
/// Defaulted array, non-null items.
pub type DefaultedCollection<S> = Collection<Defaulted<Vec<RawOf<S>>>, S>;
/// Defaulted-or-null array, non-null items.
pub type NullableDefaultedCollection<S> = Collection<NullableDefaulted<Vec<RawOf<S>>>, S>;
/// Defaulted array, nullable items.
pub type DefaultedNullableCollection<S> = NullableItems<Defaulted<Vec<Option<RawOf<S>>>>, S>;
/// Defaulted-or-null array, nullable items.
pub type NullableDefaultedNullableCollection<S> =
    NullableItems<NullableDefaulted<Vec<Option<RawOf<S>>>>, S>;

// ============================================================================
// BUILDERS
// ============================================================================

/// Starts a collection policy over the item template `item`.
///
/// The template's own presence is ignored; each element is bound into a
/// fresh copy of it.
pub fn collection<S: StateValidator>(item: Data<S>) -> CollectionBuilder<S> {
    CollectionBuilder { item }
}

/// Chooses the array policy of a collection with non-null items.
pub struct CollectionBuilder<S: StateValidator> {
    item: Data<S>,
}

impl<S: StateValidator> std::fmt::Debug for CollectionBuilder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionBuilder")
            .field("item", &self.item.descriptor())
            .finish()
    }
}

impl<S: StateValidator> CollectionBuilder<S> {
    /// The array must be supplied.
    pub fn required(self) -> RequiredCollection<S> {
        Collection::new(required(), self.item)
    }

    /// The array may be absent.
    pub fn optional(self) -> OptionalCollection<S> {
        Collection::new(optional(), self.item)
    }

    /// An absent array takes `default`.
    pub fn defaulted(self, default: Vec<S::Raw>) -> DefaultedCollection<S>
    where
        S::Raw: Serialize,
    {
        Collection::new(defaulted(default), self.item)
    }

    /// An absent array takes the result of `factory`.
    pub fn defaulted_with<F>(self, factory: F) -> DefaultedCollection<S>
    where
        F: Fn() -> Vec<S::Raw> + Send + Sync + 'static,
    {
        Collection::new(defaulted_with(factory), self.item)
    }

    /// Accepts null elements.
    pub fn nullable_items(self) -> NullableItemsBuilder<S> {
        NullableItemsBuilder { item: self.item }
    }
}

/// Chooses the array policy of a collection with nullable items.
pub struct NullableItemsBuilder<S: StateValidator> {
    item: Data<S>,
}

impl<S: StateValidator> std::fmt::Debug for NullableItemsBuilder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NullableItemsBuilder")
            .field("item", &self.item.descriptor())
            .finish()
    }
}

impl<S: StateValidator> NullableItemsBuilder<S> {
    /// The array must be supplied.
    pub fn required(self) -> NullableItems<Required<Vec<Option<S::Raw>>>, S> {
        NullableItems::new(required(), self.item)
    }

    /// The array may be absent.
    pub fn optional(self) -> NullableItems<Optional<Vec<Option<S::Raw>>>, S> {
        NullableItems::new(optional(), self.item)
    }

    /// An absent array takes `default`.
    pub fn defaulted(self, default: Vec<Option<S::Raw>>) -> DefaultedNullableCollection<S>
    where
        S::Raw: Serialize,
    {
        NullableItems::new(defaulted(default), self.item)
    }

    /// An absent array takes the result of `factory`.
    pub fn defaulted_with<F>(self, factory: F) -> DefaultedNullableCollection<S>
    where
        F: Fn() -> Vec<Option<S::Raw>> + Send + Sync + 'static,
    {
        NullableItems::new(defaulted_with(factory), self.item)
    }
}
