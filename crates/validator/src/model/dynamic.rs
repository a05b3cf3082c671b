//! Dynamic models
//!
//! A [`DynamicModel`] is an ordered map from property name to container,
//! for payloads whose fields are only known at run time. Every dynamic
//! model shares one plan whose single step walks the members, so payload
//! keys never grow the registry.

use std::any::type_name;

use indexmap::IndexMap;

use crate::data::{Data, Member};
use crate::descriptor::{ModelDescriptor, PropertyDescriptor, Relation};
use crate::model::{MemberIter, Model, PlanBuilder};
use crate::state::StateValidator;

/// Ordered property bag of type-erased containers.
///
/// ```rust,ignore
/// let payload = DynamicModel::new()
///     .with_member("name", required::<String>().into_data().with_value("Ada".into()))
///     .with_member("age", optional::<u32>().into_data().with_null());
///
/// let errors = keel_validator::verify(&payload).unwrap_err();
/// assert_eq!(errors.errors()[0].path.to_string(), "age");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicModel {
    members: IndexMap<String, Box<dyn Member>>,
}

impl DynamicModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a member, keeping the position of a replaced key.
    #[must_use]
    pub fn with_member<S: StateValidator>(
        mut self,
        name: impl Into<String>,
        data: Data<S>,
    ) -> Self {
        self.set_member(name, data);
        self
    }

    /// Adds or replaces a member; returns the previous one.
    pub fn set_member<S: StateValidator>(
        &mut self,
        name: impl Into<String>,
        data: Data<S>,
    ) -> Option<Box<dyn Member>> {
        self.members.insert(name.into(), Box::new(data))
    }

    /// The member stored under `name`.
    pub fn get_member(&self, name: &str) -> Option<&dyn Member> {
        self.members.get(name).map(|member| &**member)
    }

    /// The member under `name`, if it is a `Data<S>`.
    pub fn get<S: StateValidator>(&self, name: &str) -> Option<&Data<S>> {
        self.get_member(name)?.as_any().downcast_ref::<Data<S>>()
    }

    /// Removes a member, keeping the order of the rest.
    pub fn remove_member(&mut self, name: &str) -> Option<Box<dyn Member>> {
        self.members.shift_remove(name)
    }

    /// Member names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Describes this instance's members in order.
    ///
    /// The shared plan describes a single run-time member step; use this
    /// for the per-payload schema.
    pub fn descriptor(&self) -> ModelDescriptor {
        ModelDescriptor {
            model: type_name::<Self>(),
            properties: self
                .members
                .iter()
                .map(|(name, member)| PropertyDescriptor {
                    name: name.clone(),
                    relation: Relation::Data {
                        descriptor: member.member_descriptor().clone(),
                    },
                })
                .collect(),
        }
    }

    fn entries(&self) -> MemberIter<'_> {
        Box::new(
            self.members
                .iter()
                .map(|(name, member)| (name.as_str(), &**member)),
        )
    }
}

impl Model for DynamicModel {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.members(DynamicModel::entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataState;
    use crate::model::PlanRegistry;
    use crate::state::{Optional, Required, StateValidatorExt, optional, required};

    fn payload() -> DynamicModel {
        DynamicModel::new()
            .with_member("name", required::<String>().into_data().with_value("Ada".into()))
            .with_member("age", optional::<u32>().into_data().with_null())
    }

    #[test]
    fn test_typed_access() {
        let model = payload();
        assert!(model.get::<Required<String>>("name").is_some());
        assert!(model.get::<Optional<String>>("name").is_none());
        assert!(model.get::<Required<String>>("missing").is_none());
        assert_eq!(model.names().collect::<Vec<_>>(), vec!["name", "age"]);
    }

    #[test]
    fn test_verification_uses_member_names() {
        let registry = PlanRegistry::new();
        let model = payload();
        let errors = registry.verify(&model).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].path.to_string(), "age");
        assert_eq!(
            model.get::<Optional<u32>>("age").map(Data::state),
            Some(DataState::Invalid)
        );
    }

    #[test]
    fn test_one_plan_for_every_member_set() {
        let registry = PlanRegistry::new();
        for i in 0..64 {
            let model = DynamicModel::new()
                .with_member(format!("k{i}"), optional::<String>().into_data());
            registry.prepare(&model).unwrap();
        }
        registry.prepare(&payload()).unwrap();
        assert_eq!(registry.plan_count(), 1);
    }

    #[test]
    fn test_members_added_after_compile_are_verified() {
        let registry = PlanRegistry::new();
        registry.prepare(&DynamicModel::new()).unwrap();

        let errors = registry.verify(&payload()).unwrap_err();
        assert_eq!(errors.errors()[0].path.to_string(), "age");
    }

    #[test]
    fn test_instance_descriptor() {
        let descriptor = payload().descriptor();
        let names: Vec<_> = descriptor.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert!(matches!(
            descriptor.property("age").map(|p| &p.relation),
            Some(Relation::Data { .. })
        ));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut model = payload();
        let previous = model.set_member("name", optional::<String>().into_data());
        assert!(previous.is_some());
        assert_eq!(model.names().collect::<Vec<_>>(), vec!["name", "age"]);
        assert!(model.remove_member("name").is_some());
        assert_eq!(model.len(), 1);
    }
}
