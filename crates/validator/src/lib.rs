//! # keel-validator
//!
//! Presence-aware validation for request models.
//!
//! Every validated field is a [`Data`](data::Data) container that tells apart
//! an *absent* field, an explicit *null* and a supplied value. A presence
//! policy (a [`StateValidator`](state::StateValidator)) decides what each of
//! those means; attached value validators then check the accepted value.
//! Models declare their containers once and are verified as a unit, with
//! every error located by a path such as `items[2].name`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keel_validator::prelude::*;
//!
//! struct Signup {
//!     email: Data<Required<String>>,
//!     nickname: Data<Optional<String>>,
//! }
//!
//! impl Model for Signup {
//!     fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
//!         plan.data("email", |s: &Signup| &s.email)
//!             .data("nickname", |s: &Signup| &s.nickname);
//!     }
//! }
//!
//! let email = required::<String>().into_data().with_validator(matches_regex(".+@.+")?);
//! let nickname = optional::<String>().into_data().with_validator(min_length(3).optional());
//!
//! let signup = Signup {
//!     email: email.unset(),
//!     nickname: nickname.with_null(),
//! };
//! let errors = keel_validator::verify(&signup).unwrap_err();
//! assert_eq!(errors.entries()[0], ("email".into(), "This field is required".into()));
//! ```
//!
//! ## Presence policies
//!
//! - **Scalar**: [`Required`](state::Required), [`Optional`](state::Optional),
//!   [`Defaulted`](state::Defaulted) and their nullable forms
//! - **Collection**: [`collection`](state::collection) over an item template
//! - **Nested**: [`Nested`](state::Nested) for values that are models
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the fundamental error type for all validators; boxing
// it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Closure-backed plan steps and mappers have inherently long types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod data;
pub mod descriptor;
pub mod foundation;
mod macros;
pub mod mapping;
pub mod model;
pub mod prelude;
pub mod state;
pub mod validators;

pub use model::verify;
