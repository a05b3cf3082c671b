//! Validator combinators
//!
//! Composition of value validators, and the per-element helpers used by
//! collection policies.
//!
//! - [`And`]: both checks must pass, short-circuiting
//! - [`Not`]: inverts a check; described as `Inverted`
//! - [`OptionalValue`]: lifts a check to `Option<T>`
//! - [`WithMessage`]: overrides the reported message or code
//! - [`validate_each`], [`reject_null_items`]: element-wise collection checks

pub mod and;
pub mod each;
pub mod message;
pub mod not;
pub mod optional;

pub use and::{And, and};
pub use each::{reject_null_items, validate_each};
pub use message::WithMessage;
pub use not::{Not, not};
pub use optional::{OptionalValue, optional_value};
