//! Plan registry
//!
//! Plans are compiled once per [`ShapeKey`] and published into a
//! copy-on-write map: readers load the current map without locking, and a
//! builder lock makes sure each shape is compiled exactly once even when
//! many threads verify the same new shape at the same time.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, error, trace};

use crate::config::VerifierConfig;
use crate::descriptor::ModelDescriptor;
use crate::foundation::{ConfigurationError, ValidationErrors};
use crate::model::{Model, ShapeKey, VerificationPlan};

type PlanMap = HashMap<ShapeKey, Arc<dyn Any + Send + Sync>>;

static GLOBAL: OnceLock<PlanRegistry> = OnceLock::new();

/// Build-once/publish-once cache of verification plans.
pub struct PlanRegistry {
    plans: ArcSwap<PlanMap>,
    build_lock: Mutex<()>,
    config: VerifierConfig,
}

impl PlanRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(VerifierConfig::default())
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn with_config(config: VerifierConfig) -> Self {
        Self {
            plans: ArcSwap::from_pointee(HashMap::with_capacity(config.initial_capacity)),
            build_lock: Mutex::new(()),
            config,
        }
    }

    /// The process-wide registry used by [`verify`] and by nested models
    /// verified without an explicit registry.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Configures the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns `config` back if the global registry already exists.
    pub fn install_global(config: VerifierConfig) -> Result<(), VerifierConfig> {
        GLOBAL
            .set(Self::with_config(config))
            .map_err(|registry| registry.config)
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Plans
    // ------------------------------------------------------------------------

    /// Returns the plan of `model`'s shape, compiling and publishing it on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] of a plan that fails to compile,
    /// or [`ConfigurationError::ShapeMismatch`] if the shape key is cached
    /// for another model type.
    pub fn plan<M: Model>(
        &self,
        model: &M,
    ) -> Result<Arc<VerificationPlan<M>>, ConfigurationError> {
        let key = model.shape();
        if let Some(plan) = self.lookup::<M>(&key)? {
            return Ok(plan);
        }

        let _guard = self.build_lock.lock();
        if let Some(plan) = self.lookup::<M>(&key)? {
            return Ok(plan);
        }

        let plan = Arc::new(VerificationPlan::compile(model)?);
        debug!(
            model = type_name::<M>(),
            shape = %key,
            steps = plan.len(),
            "verification plan compiled"
        );

        let mut next = PlanMap::clone(&self.plans.load());
        next.insert(key, Arc::clone(&plan) as Arc<dyn Any + Send + Sync>);
        self.plans.store(Arc::new(next));
        Ok(plan)
    }

    fn lookup<M: Model>(
        &self,
        key: &ShapeKey,
    ) -> Result<Option<Arc<VerificationPlan<M>>>, ConfigurationError> {
        let plans = self.plans.load();
        let Some(plan) = plans.get(key) else {
            return Ok(None);
        };
        Arc::clone(plan)
            .downcast::<VerificationPlan<M>>()
            .map(Some)
            .map_err(|_| ConfigurationError::ShapeMismatch {
                shape: key.to_string(),
                model: type_name::<M>(),
            })
    }

    /// Compiles and publishes the plan of `model`'s shape ahead of time.
    ///
    /// # Errors
    ///
    /// See [`plan`](Self::plan).
    pub fn prepare<M: Model>(&self, model: &M) -> Result<(), ConfigurationError> {
        self.plan(model).map(|_| ())
    }

    /// Describes `model`'s plan.
    ///
    /// The descriptor is captured when the plan is compiled, so container
    /// descriptors come from the first instance of the shape to be verified
    /// or prepared. Later instances with differently configured templates
    /// get that same descriptor back.
    ///
    /// # Errors
    ///
    /// See [`plan`](Self::plan).
    pub fn describe<M: Model>(&self, model: &M) -> Result<ModelDescriptor, ConfigurationError> {
        self.plan(model).map(|plan| plan.descriptor().clone())
    }

    /// Number of published plans.
    pub fn plan_count(&self) -> usize {
        self.plans.load().len()
    }

    /// Drops every published plan.
    pub fn clear(&self) {
        let _guard = self.build_lock.lock();
        let dropped = self.plans.swap(Arc::new(PlanMap::new())).len();
        debug!(dropped, "verification plans cleared");
    }

    // ------------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------------

    /// Verifies `model`: every plan step runs and all errors are returned.
    ///
    /// # Panics
    ///
    /// Panics if the model's plan cannot be compiled. That is a wiring
    /// error; call [`prepare`](Self::prepare) at start-up to surface it as
    /// a `Result` instead.
    pub fn verify<M: Model>(&self, model: &M) -> Result<(), ValidationErrors> {
        let plan = match self.plan(model) {
            Ok(plan) => plan,
            Err(err) => {
                error!(
                    model = type_name::<M>(),
                    error = %err,
                    "verification plan is misconfigured"
                );
                panic!("{err}");
            }
        };
        if self.config.trace_execution {
            trace!(model = type_name::<M>(), steps = plan.len(), "executing verification plan");
        }
        plan.execute(model, self)
    }
}

impl Default for PlanRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlanRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanRegistry")
            .field("plans", &self.plan_count())
            .field("config", &self.config)
            .finish()
    }
}

/// Verifies `model` with the global registry.
///
/// # Panics
///
/// See [`PlanRegistry::verify`].
pub fn verify<M: Model>(model: &M) -> Result<(), ValidationErrors> {
    PlanRegistry::global().verify(model)
}
