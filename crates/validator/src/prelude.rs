//! Prelude module for convenient imports.
//!
//! Provides a single `use keel_validator::prelude::*;` import that brings
//! in the container, the presence policies, the model traits, all built-in
//! validators and the combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use keel_validator::prelude::*;
//!
//! let username = required::<String>().into_data().with_validator(min_length(3).and(max_length(20)));
//! let age = optional::<u32>().into_data().with_validator(in_range(18, 100).optional());
//! let tags = collection(required::<String>().into_data()).defaulted(Vec::new());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, paths
// ============================================================================

pub use crate::foundation::{
    ConfigurationError, ErrorKind, FieldPath, ModelCheck, ModelContext, PathSegment, Validate,
    ValidateExt, ValidationError, ValidationErrors, ValueValidator,
};

// ============================================================================
// CONTAINERS AND POLICIES
// ============================================================================

pub use crate::data::{Data, DataState, Presence};
pub use crate::state::{
    IntoNullable, Nested, StateValidator, StateValidatorExt, collection, defaulted,
    defaulted_with, nullable_required, optional, optional_nullable, required, try_defaulted,
    try_defaulted_with,
};
pub use crate::state::{
    Defaulted, NullableDefaulted, NullableRequired, Optional, OptionalNullable, Required,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::config::VerifierConfig;
pub use crate::mapping::Mapping;
pub use crate::model::{DynamicModel, Model, PlanBuilder, PlanRegistry};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, Not, OptionalValue, WithMessage, and, not};
