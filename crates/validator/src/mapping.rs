//! Mapping chains
//!
//! Sequential, dependent validation: verify a source container, then turn
//! its value into something else with a step that may fail on its own.
//! Source errors propagate unchanged (no path segment is added) and the
//! mapper is never called for an invalid source.
//!
//! ```rust,ignore
//! let port = required::<String>().into_data();
//! let parsed = try_map(&port.with_value("8080".into()), &ModelContext::detached(), |raw| {
//!     raw.parse::<u16>()
//!         .map_err(|_| ValidationError::new("port", "Not a port number"))
//! });
//! assert_eq!(parsed, Ok(8080));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::data::{Data, Presence};
use crate::foundation::{ModelContext, ValidationErrors};
use crate::state::StateValidator;

/// Verifies `source` and maps its value with an infallible `f`.
///
/// # Errors
///
/// Returns the source's errors if it is invalid.
pub fn map<S, U, F>(source: &Data<S>, ctx: &ModelContext<'_>, f: F) -> Result<U, ValidationErrors>
where
    S: StateValidator,
    F: FnOnce(&S::Value) -> U,
{
    source.verify(ctx).map(f).map_err(Clone::clone)
}

/// Verifies `source` and maps its value with a fallible `f`.
///
/// # Errors
///
/// Returns the source's errors if it is invalid, otherwise the mapper's
/// error as is.
pub fn try_map<S, U, E, F>(
    source: &Data<S>,
    ctx: &ModelContext<'_>,
    f: F,
) -> Result<U, ValidationErrors>
where
    S: StateValidator,
    E: Into<ValidationErrors>,
    F: FnOnce(&S::Value) -> Result<U, E>,
{
    let value = source.verify(ctx).map_err(Clone::clone)?;
    f(value).map_err(Into::into)
}

type Mapper<V, U> = Arc<dyn Fn(&V) -> Result<U, ValidationErrors> + Send + Sync>;

/// A reusable source template paired with a fallible mapper.
pub struct Mapping<S: StateValidator, U> {
    source: Data<S>,
    mapper: Mapper<S::Value, U>,
}

impl<S: StateValidator, U: 'static> Mapping<S, U> {
    /// Pairs `source` with `mapper`.
    pub fn new<E, F>(source: Data<S>, mapper: F) -> Self
    where
        E: Into<ValidationErrors>,
        F: Fn(&S::Value) -> Result<U, E> + Send + Sync + 'static,
    {
        Self {
            source: source.unset(),
            mapper: Arc::new(move |value: &S::Value| mapper(value).map_err(Into::into)),
        }
    }

    /// Appends a step that runs only if every previous step succeeded.
    #[must_use]
    pub fn then<V, E, F>(self, next: F) -> Mapping<S, V>
    where
        V: 'static,
        E: Into<ValidationErrors>,
        F: Fn(U) -> Result<V, E> + Send + Sync + 'static,
    {
        let previous = self.mapper;
        Mapping {
            source: self.source,
            mapper: Arc::new(move |value: &S::Value| {
                previous(value).and_then(|mapped| next(mapped).map_err(Into::into))
            }),
        }
    }

    /// Binds `raw` into the source template, verifies it against `ctx` and
    /// maps the value.
    ///
    /// # Errors
    ///
    /// Returns the source's errors, or the first failing step's error.
    pub fn map(
        &self,
        ctx: &ModelContext<'_>,
        raw: Presence<S::Raw>,
    ) -> Result<U, ValidationErrors> {
        let source = self.source.with_presence(raw);
        try_map(&source, ctx, |value| (self.mapper)(value))
    }

    /// The source template.
    pub fn source(&self) -> &Data<S> {
        &self.source
    }
}

impl<S: StateValidator, U> Clone for Mapping<S, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

impl<S: StateValidator, U> fmt::Debug for Mapping<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("source", self.source.descriptor())
            .finish_non_exhaustive()
    }
}
