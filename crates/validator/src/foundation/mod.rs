//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the crate:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`ValueValidator`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConfigurationError`]
//! - **Paths**: [`FieldPath`], [`PathSegment`]
//! - **Context**: [`ModelContext`]
//!
//! # Error algebra
//!
//! A failing container produces errors with an empty path. Each enclosing
//! level prepends its own segment as the errors travel outwards:
//!
//! ```rust,ignore
//! // `name` is unset in the third element of `items`
//! assert_eq!(errors.errors()[0].path.to_string(), "items[2].name");
//! ```

pub mod context;
pub mod error;
pub mod path;
pub mod traits;

pub use context::ModelContext;
pub use error::{ConfigurationError, ErrorKind, ValidationError, ValidationErrors};
pub use path::{FieldPath, PathSegment};
pub use traits::{ModelCheck, Validate, ValidateExt, ValueValidator};
