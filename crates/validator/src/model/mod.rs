//! Model verification
//!
//! A model declares its validated fields once, in [`Model::describe`]. The
//! declaration is compiled into a [`VerificationPlan`] the first time a
//! shape is verified and cached in a [`PlanRegistry`]; later verifications
//! of the same shape only execute the cached plan.
//!
//! Executing a plan verifies every step against the model and unions the
//! errors, each prefixed with the step's name.
//!
//! ```rust,ignore
//! struct Signup {
//!     email: Data<Required<String>>,
//!     age: Data<Optional<u32>>,
//! }
//!
//! impl Model for Signup {
//!     fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
//!         plan.data("email", |s: &Signup| &s.email)
//!             .data("age", |s: &Signup| &s.age);
//!     }
//! }
//!
//! keel_validator::verify(&signup)?;
//! ```

pub mod dynamic;
pub mod leaf;
pub mod plan;
pub mod registry;

use std::any::{Any, TypeId};
use std::fmt;

pub use dynamic::DynamicModel;
pub use plan::{MemberIter, PlanBuilder, VerificationPlan};
pub use registry::{PlanRegistry, verify};

/// A type whose validated fields are verified as a unit.
pub trait Model: Any + Send + Sync + Sized {
    /// Declares the plan steps of this model.
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>);

    /// Cache key of this model's plan; one plan per type.
    fn shape(&self) -> ShapeKey {
        ShapeKey::of::<Self>()
    }
}

/// Identity of a plan in a [`PlanRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeKey(TypeId);

impl ShapeKey {
    /// The key of `M`.
    pub fn of<M: Any>() -> Self {
        Self(TypeId::of::<M>())
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// ============================================================================
// CONTAINER MODELS
// ============================================================================

/// `None` passes; `Some` is verified without adding a path segment.
impl<M: Model> Model for Option<M> {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.nested_optional("", Option::as_ref);
    }
}

/// Every element is verified; errors are prefixed with the element index.
impl<M: Model> Model for Vec<M> {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.nested_each("", Vec::as_slice);
    }
}
