//! Presence state of a field's raw input and the observable verification
//! state of a container.

/// Whether a field's raw input was absent, explicitly null, or supplied.
///
/// A serialization adapter maps "field missing" to [`Presence::Unset`],
/// "field present as null" to [`Presence::Null`] and "field present with a
/// value" to [`Presence::Value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    /// The field was absent from the input.
    #[default]
    Unset,
    /// The field was present and null.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> Presence<T> {
    /// Converts a decoded nullable value: `None` becomes [`Presence::Null`].
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }

    /// Borrows the supplied value.
    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Self::Unset => Presence::Unset,
            Self::Null => Presence::Null,
            Self::Value(value) => Presence::Value(value),
        }
    }

    /// Maps the supplied value, keeping `Unset` and `Null`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Presence<U> {
        match self {
            Self::Unset => Presence::Unset,
            Self::Null => Presence::Null,
            Self::Value(value) => Presence::Value(f(value)),
        }
    }

    /// Fallible [`map`](Self::map).
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Presence<U>, E> {
        Ok(match self {
            Self::Unset => Presence::Unset,
            Self::Null => Presence::Null,
            Self::Value(value) => Presence::Value(f(value)?),
        })
    }

    /// Returns true unless the field was absent.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Returns true for an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the supplied value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }
}

/// Observable state of a container's cached verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataState {
    /// `verify` has not run on this container instance.
    NotVerified,
    /// Verified successfully; the outcome is cached.
    Valid,
    /// Verified with errors; the outcome is cached.
    Invalid,
}

impl DataState {
    /// Returns true once the outcome is cached.
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::NotVerified)
    }
}
