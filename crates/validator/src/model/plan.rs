//! Verification plans
//!
//! A plan is the compiled form of [`Model::describe`]: an ordered list of
//! steps, each verifying one field of the model and attributing its errors
//! to the field's name.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::HashSet;

use crate::data::{Data, Member};
use crate::descriptor::{Cardinality, ModelDescriptor, PropertyDescriptor, Relation};
use crate::foundation::{ConfigurationError, ModelContext, ValidationErrors};
use crate::model::{Model, PlanRegistry};
use crate::state::StateValidator;

type StepFn<M> = Box<dyn Fn(&M, &ModelContext<'_>) -> Result<(), ValidationErrors> + Send + Sync>;

/// Named members walked by [`PlanBuilder::members`].
pub type MemberIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Member)> + 'a>;

struct Step<M> {
    run: StepFn<M>,
}

// ============================================================================
// PLAN BUILDER
// ============================================================================

/// Collects the steps of a model's plan.
///
/// Names must be unique within a model; an empty name adds no path segment
/// (used to flatten wrapper models).
pub struct PlanBuilder<'m, M> {
    model: &'m M,
    steps: Vec<Step<M>>,
    properties: Vec<PropertyDescriptor>,
    names: HashSet<String>,
    error: Option<ConfigurationError>,
}

impl<'m, M: Model> PlanBuilder<'m, M> {
    fn new(model: &'m M) -> Self {
        Self {
            model,
            steps: Vec::new(),
            properties: Vec::new(),
            names: HashSet::new(),
            error: None,
        }
    }

    /// Verifies the container returned by `accessor` under `name`.
    pub fn data<S, F>(&mut self, name: impl Into<Cow<'static, str>>, accessor: F) -> &mut Self
    where
        S: StateValidator,
        F: Fn(&M) -> &Data<S> + Send + Sync + 'static,
    {
        let name = name.into();
        let descriptor = accessor(self.model).descriptor().clone();
        let segment = name.clone();
        self.push(
            name,
            Relation::Data { descriptor },
            Box::new(move |model: &M, ctx: &ModelContext<'_>| {
                accessor(model)
                    .verify(ctx)
                    .map(|_| ())
                    .map_err(|errors| errors.clone().under_property(&segment))
            }),
        )
    }

    /// Verifies a type-erased container under `name`; an instance without
    /// the member passes this step.
    ///
    /// The step is registered whether or not the compiling instance has the
    /// member, so every later instance of the shape is still verified.
    pub fn member<F>(&mut self, name: impl Into<Cow<'static, str>>, accessor: F) -> &mut Self
    where
        F: Fn(&M) -> Option<&dyn Member> + Send + Sync + 'static,
    {
        let name = name.into();
        let relation = match accessor(self.model) {
            Some(member) => Relation::Data {
                descriptor: member.member_descriptor().clone(),
            },
            None => Relation::Member,
        };
        let segment = name.clone();
        self.push(
            name,
            relation,
            Box::new(move |model: &M, ctx: &ModelContext<'_>| match accessor(model) {
                Some(member) => member
                    .verify_member(ctx)
                    .map_err(|errors| errors.clone().under_property(&segment)),
                None => Ok(()),
            }),
        )
    }

    /// Verifies a run-time set of named members in one step; each member's
    /// errors are prefixed with its name.
    pub fn members<F>(&mut self, accessor: F) -> &mut Self
    where
        F: for<'a> Fn(&'a M) -> MemberIter<'a> + Send + Sync + 'static,
    {
        self.push(
            Cow::Borrowed(""),
            Relation::Members,
            Box::new(move |model: &M, ctx: &ModelContext<'_>| {
                let mut errors = ValidationErrors::new();
                for (name, member) in accessor(model) {
                    if let Err(failed) = member.verify_member(ctx) {
                        let segment = Cow::Owned(name.to_owned());
                        errors.append(failed.clone().under_property(&segment));
                    }
                }
                errors.into_result(())
            }),
        )
    }

    /// Verifies a plain (non-container) field as a model under `alias`.
    pub fn nested<N, F>(&mut self, alias: impl Into<Cow<'static, str>>, accessor: F) -> &mut Self
    where
        N: Model,
        F: Fn(&M) -> &N + Send + Sync + 'static,
    {
        let alias = alias.into();
        let segment = alias.clone();
        self.push(
            alias,
            nested_relation::<N>(Cardinality::One),
            Box::new(move |model: &M, ctx: &ModelContext<'_>| {
                ctx.registry()
                    .verify(accessor(model))
                    .map_err(|errors| errors.under_property(&segment))
            }),
        )
    }

    /// Like [`nested`](Self::nested); `None` passes.
    pub fn nested_optional<N, F>(
        &mut self,
        alias: impl Into<Cow<'static, str>>,
        accessor: F,
    ) -> &mut Self
    where
        N: Model,
        F: Fn(&M) -> Option<&N> + Send + Sync + 'static,
    {
        let alias = alias.into();
        let segment = alias.clone();
        self.push(
            alias,
            nested_relation::<N>(Cardinality::Optional),
            Box::new(move |model: &M, ctx: &ModelContext<'_>| match accessor(model) {
                Some(nested) => ctx
                    .registry()
                    .verify(nested)
                    .map_err(|errors| errors.under_property(&segment)),
                None => Ok(()),
            }),
        )
    }

    /// Verifies every element as a model; errors read `alias[i].field`.
    pub fn nested_each<N, F>(
        &mut self,
        alias: impl Into<Cow<'static, str>>,
        accessor: F,
    ) -> &mut Self
    where
        N: Model,
        F: Fn(&M) -> &[N] + Send + Sync + 'static,
    {
        let alias = alias.into();
        let segment = alias.clone();
        self.push(
            alias,
            nested_relation::<N>(Cardinality::Many),
            Box::new(move |model: &M, ctx: &ModelContext<'_>| {
                let registry: &PlanRegistry = ctx.registry();
                let mut errors = ValidationErrors::new();
                for (index, element) in accessor(model).iter().enumerate() {
                    if let Err(failed) = registry.verify(element) {
                        errors.append(failed.under_index(index));
                    }
                }
                errors
                    .into_result(())
                    .map_err(|errors| errors.under_property(&segment))
            }),
        )
    }

    fn push(&mut self, name: Cow<'static, str>, relation: Relation, run: StepFn<M>) -> &mut Self {
        if !name.is_empty() && !self.names.insert(name.to_string()) {
            self.error.get_or_insert(ConfigurationError::DuplicateField {
                model: type_name::<M>(),
                field: name.to_string(),
            });
            return self;
        }
        self.properties.push(PropertyDescriptor {
            name: name.into_owned(),
            relation,
        });
        self.steps.push(Step { run });
        self
    }

    fn build(self) -> Result<VerificationPlan<M>, ConfigurationError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(VerificationPlan {
            steps: self.steps,
            descriptor: ModelDescriptor {
                model: type_name::<M>(),
                properties: self.properties,
            },
        })
    }
}

fn nested_relation<N: Model>(cardinality: Cardinality) -> Relation {
    Relation::Nested {
        model: type_name::<N>(),
        cardinality,
    }
}

// ============================================================================
// VERIFICATION PLAN
// ============================================================================

/// Compiled, immutable verification steps of one model shape.
pub struct VerificationPlan<M> {
    steps: Vec<Step<M>>,
    descriptor: ModelDescriptor,
}

impl<M: Model> VerificationPlan<M> {
    /// Compiles the plan declared by `model`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateField`] if a name is declared
    /// twice.
    pub fn compile(model: &M) -> Result<Self, ConfigurationError> {
        let mut builder = PlanBuilder::new(model);
        model.describe(&mut builder);
        builder.build()
    }

    /// Runs every step and unions their errors in step order.
    ///
    /// Nested models are verified through `registry`.
    pub fn execute(&self, model: &M, registry: &PlanRegistry) -> Result<(), ValidationErrors> {
        let ctx = ModelContext::of(model).with_registry(registry);
        let mut errors = ValidationErrors::new();
        for step in &self.steps {
            if let Err(failed) = (step.run)(model, &ctx) {
                errors.append(failed);
            }
        }
        errors.into_result(())
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Static description of the plan.
    pub fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }
}

impl<M> std::fmt::Debug for VerificationPlan<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationPlan")
            .field("model", &self.descriptor.model)
            .field("steps", &self.steps.len())
            .finish()
    }
}
