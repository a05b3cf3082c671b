//! Scalar presence policies
//!
//! Every policy maps `Presence<T>` to its value type. See the table in the
//! [module docs](super) for the exact outcomes.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::data::Presence;
use crate::descriptor::{StateDescriptor, ValueDescriptor};
use crate::foundation::{ConfigurationError, ValidationError, ValidationErrors};
use crate::state::StateValidator;

// ============================================================================
// NULLABLE TRANSITION
// ============================================================================

/// Transition of a policy to its nullable counterpart.
///
/// `Required -> NullableRequired`, `Optional -> OptionalNullable`,
/// `Defaulted -> NullableDefaulted` (the default source is kept).
pub trait IntoNullable {
    /// The nullable policy.
    type Nullable;

    /// Accepts an explicit null as a value.
    fn nullable(self) -> Self::Nullable;
}

// ============================================================================
// STATELESS POLICIES
// ============================================================================

macro_rules! stateless_policy {
    ($(#[$meta:meta])* $name:ident, $factory:ident) => {
        $(#[$meta])*
        pub struct $name<T> {
            _phantom: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            #[must_use]
            pub const fn new() -> Self {
                Self { _phantom: PhantomData }
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), std::any::type_name::<T>())
            }
        }

        #[must_use]
        pub const fn $factory<T>() -> $name<T> {
            $name::new()
        }
    };
}

stateless_policy!(
    /// A value must be supplied; null is rejected as missing.
    Required,
    required
);
stateless_policy!(
    /// The field must be present, but null is an accepted value.
    NullableRequired,
    nullable_required
);
stateless_policy!(
    /// The field may be absent; null is rejected.
    Optional,
    optional
);
stateless_policy!(
    /// The field may be absent or null.
    OptionalNullable,
    optional_nullable
);

impl<T: Clone + Send + Sync + 'static> StateValidator for Required<T> {
    type Raw = T;
    type Value = T;

    fn validate(&self, state: Presence<T>) -> Result<T, ValidationErrors> {
        match state {
            Presence::Value(value) => Ok(value),
            Presence::Unset | Presence::Null => Err(ValidationError::required().into()),
        }
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Required { nullable: false }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        vec![ValueDescriptor::Required, ValueDescriptor::NotNull]
    }
}

impl<T: Clone + Send + Sync + 'static> StateValidator for NullableRequired<T> {
    type Raw = T;
    type Value = Option<T>;

    fn validate(&self, state: Presence<T>) -> Result<Option<T>, ValidationErrors> {
        match state {
            Presence::Value(value) => Ok(Some(value)),
            Presence::Null => Ok(None),
            Presence::Unset => Err(ValidationError::required().into()),
        }
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Required { nullable: true }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        vec![ValueDescriptor::Required]
    }
}

impl<T: Clone + Send + Sync + 'static> StateValidator for Optional<T> {
    type Raw = T;
    type Value = Option<T>;

    fn validate(&self, state: Presence<T>) -> Result<Option<T>, ValidationErrors> {
        match state {
            Presence::Value(value) => Ok(Some(value)),
            Presence::Unset => Ok(None),
            Presence::Null => Err(ValidationError::not_null().into()),
        }
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Optional { nullable: false }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        vec![ValueDescriptor::NotNull]
    }
}

impl<T: Clone + Send + Sync + 'static> StateValidator for OptionalNullable<T> {
    type Raw = T;
    type Value = Option<T>;

    fn validate(&self, state: Presence<T>) -> Result<Option<T>, ValidationErrors> {
        Ok(match state {
            Presence::Value(value) => Some(value),
            Presence::Unset | Presence::Null => None,
        })
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Optional { nullable: true }
    }
}

impl<T> IntoNullable for Required<T> {
    type Nullable = NullableRequired<T>;

    fn nullable(self) -> NullableRequired<T> {
        NullableRequired::new()
    }
}

impl<T> IntoNullable for Optional<T> {
    type Nullable = OptionalNullable<T>;

    fn nullable(self) -> OptionalNullable<T> {
        OptionalNullable::new()
    }
}

// ============================================================================
// DEFAULT SOURCE
// ============================================================================

type DefaultFactory<T> = Arc<dyn Fn() -> Option<T> + Send + Sync>;

/// Where a defaulted policy gets its value from.
enum DefaultSource<T> {
    /// A value fixed at construction, described by its JSON form.
    Literal {
        value: T,
        described: Option<serde_json::Value>,
    },
    /// Invoked once per unset evaluation.
    Factory(DefaultFactory<T>),
}

impl<T: Clone> DefaultSource<T> {
    fn literal(value: T) -> Self
    where
        T: Serialize,
    {
        let described = serde_json::to_value(&value).ok();
        Self::Literal { value, described }
    }

    /// # Panics
    ///
    /// Panics if a factory returns no value.
    fn resolve(&self) -> T {
        match self {
            Self::Literal { value, .. } => value.clone(),
            Self::Factory(factory) => match factory() {
                Some(value) => value,
                None => {
                    let err = ConfigurationError::null_default::<T>();
                    error!(error = %err, "default factory returned no value");
                    panic!("{err}");
                }
            },
        }
    }

    fn described(&self) -> Option<serde_json::Value> {
        match self {
            Self::Literal { described, .. } => described.clone(),
            Self::Factory(_) => None,
        }
    }
}

impl<T: Clone> Clone for DefaultSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal { value, described } => Self::Literal {
                value: value.clone(),
                described: described.clone(),
            },
            Self::Factory(factory) => Self::Factory(Arc::clone(factory)),
        }
    }
}

impl<T> fmt::Debug for DefaultSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { described, .. } => f
                .debug_struct("Literal")
                .field("value", described)
                .finish(),
            Self::Factory(_) => f.write_str("Factory"),
        }
    }
}

// ============================================================================
// DEFAULTED POLICIES
// ============================================================================

/// Absent fields take a default; null is rejected.
#[derive(Clone, Debug)]
pub struct Defaulted<T> {
    default: DefaultSource<T>,
}

/// Absent fields take a default; null is an accepted value.
#[derive(Clone, Debug)]
pub struct NullableDefaulted<T> {
    default: DefaultSource<T>,
}

impl<T: Clone + Send + Sync + 'static> StateValidator for Defaulted<T> {
    type Raw = T;
    type Value = T;

    fn validate(&self, state: Presence<T>) -> Result<T, ValidationErrors> {
        match state {
            Presence::Value(value) => Ok(value),
            Presence::Unset => Ok(self.default.resolve()),
            Presence::Null => Err(ValidationError::not_null().into()),
        }
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Defaulted {
            nullable: false,
            default: self.default.described(),
        }
    }

    fn implicit_value_descriptors(&self) -> Vec<ValueDescriptor> {
        vec![ValueDescriptor::NotNull]
    }
}

impl<T: Clone + Send + Sync + 'static> StateValidator for NullableDefaulted<T> {
    type Raw = T;
    type Value = Option<T>;

    fn validate(&self, state: Presence<T>) -> Result<Option<T>, ValidationErrors> {
        match state {
            Presence::Value(value) => Ok(Some(value)),
            Presence::Unset => Ok(Some(self.default.resolve())),
            Presence::Null => Ok(None),
        }
    }

    fn descriptor(&self) -> StateDescriptor {
        StateDescriptor::Defaulted {
            nullable: true,
            default: self.default.described(),
        }
    }
}

impl<T: Clone> IntoNullable for Defaulted<T> {
    type Nullable = NullableDefaulted<T>;

    fn nullable(self) -> NullableDefaulted<T> {
        NullableDefaulted {
            default: self.default,
        }
    }
}

/// Defaulted policy with a literal default.
pub fn defaulted<T: Clone + Serialize>(value: T) -> Defaulted<T> {
    Defaulted {
        default: DefaultSource::literal(value),
    }
}

/// Defaulted policy with a literal default that may be absent.
///
/// # Errors
///
/// Returns [`ConfigurationError::NullDefault`] for `None`.
pub fn try_defaulted<T: Clone + Serialize>(
    value: Option<T>,
) -> Result<Defaulted<T>, ConfigurationError> {
    value
        .map(defaulted)
        .ok_or_else(ConfigurationError::null_default::<T>)
}

/// Defaulted policy whose default is produced by `factory`.
///
/// The factory runs on every unset evaluation and never at construction or
/// description time.
pub fn defaulted_with<T, F>(factory: F) -> Defaulted<T>
where
    T: Clone,
    F: Fn() -> T + Send + Sync + 'static,
{
    Defaulted {
        default: DefaultSource::Factory(Arc::new(move || Some(factory()))),
    }
}

/// Defaulted policy whose factory may fail to produce a value.
///
/// A factory returning `None` is a wiring error: verification of an unset
/// field logs it and panics.
pub fn try_defaulted_with<T, F>(factory: F) -> Defaulted<T>
where
    T: Clone,
    F: Fn() -> Option<T> + Send + Sync + 'static,
{
    Defaulted {
        default: DefaultSource::Factory(Arc::new(factory)),
    }
}
