//! Model context passed through verification.
//!
//! Containers are verified *against* the model that owns them, so value
//! validators can perform cross-field checks. The model is carried
//! type-erased and recovered with [`ModelContext::model`]. The context also
//! names the plan registry used for nested models.

use std::any::Any;
use std::fmt;

use crate::model::PlanRegistry;

/// Borrowed, type-erased reference to the model being verified.
#[derive(Clone, Copy, Default)]
pub struct ModelContext<'a> {
    model: Option<&'a (dyn Any + Send + Sync)>,
    registry: Option<&'a PlanRegistry>,
}

impl<'a> ModelContext<'a> {
    /// Context for a container verified on its own, outside any model.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            model: None,
            registry: None,
        }
    }

    /// Context for a container owned by `model`.
    pub fn of<M: Any + Send + Sync>(model: &'a M) -> Self {
        Self {
            model: Some(model),
            registry: None,
        }
    }

    /// Routes nested model verification through `registry`.
    #[must_use]
    pub fn with_registry(mut self, registry: &'a PlanRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Registry for nested models; the global registry unless one was set.
    pub fn registry(&self) -> &'a PlanRegistry {
        match self.registry {
            Some(registry) => registry,
            None => PlanRegistry::global(),
        }
    }

    /// Returns the owning model if it is an `M`.
    pub fn model<M: Any>(&self) -> Option<&'a M> {
        self.model.and_then(|m| m.downcast_ref::<M>())
    }

    /// Returns true if no model is attached.
    pub fn is_detached(&self) -> bool {
        self.model.is_none()
    }
}

impl fmt::Debug for ModelContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelContext")
            .field("attached", &self.model.is_some())
            .field("registry", &self.registry.is_some())
            .finish()
    }
}
