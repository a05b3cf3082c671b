//! Static schema descriptors
//!
//! Descriptors mirror validator *configuration* (required-ness, nullability,
//! statically known defaults, nested item shapes, attached value checks).
//! They are plain serializable data for schema generators and are never
//! consulted while verifying.

use serde::Serialize;
use std::borrow::Cow;

// ============================================================================
// STATE DESCRIPTOR
// ============================================================================

/// Presence policy of a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StateDescriptor {
    /// A value must be supplied.
    Required { nullable: bool },
    /// The field may be absent.
    Optional { nullable: bool },
    /// Absent fields take a default.
    ///
    /// `default` is only present for literal defaults; factory defaults are
    /// not evaluated for description.
    Defaulted {
        nullable: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<serde_json::Value>,
    },
    /// An array whose elements are verified against `item`.
    Collection {
        policy: Box<StateDescriptor>,
        item: Box<DataDescriptor>,
        nullable_items: bool,
    },
    /// A value that is itself a model and is verified recursively.
    Nested { inner: Box<StateDescriptor> },
}

impl StateDescriptor {
    /// Returns true if an explicit null is an accepted value.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Required { nullable }
            | Self::Optional { nullable }
            | Self::Defaulted { nullable, .. } => *nullable,
            Self::Collection { policy, .. } => policy.is_nullable(),
            Self::Nested { inner } => inner.is_nullable(),
        }
    }

    /// Returns true if the field must be present in the input.
    pub fn is_required(&self) -> bool {
        match self {
            Self::Required { .. } => true,
            Self::Optional { .. } | Self::Defaulted { .. } => false,
            Self::Collection { policy, .. } => policy.is_required(),
            Self::Nested { inner } => inner.is_required(),
        }
    }
}

// ============================================================================
// VALUE DESCRIPTOR
// ============================================================================

/// A secondary check applied to a validated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueDescriptor {
    /// Implied by required policies.
    Required,
    /// Implied by non-nullable policies.
    NotNull,
    MinLength { min: usize },
    MaxLength { max: usize },
    NotEmpty,
    /// Inclusive bounds, rendered with `Display`.
    Range {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
    },
    MinSize { min: usize },
    MaxSize { max: usize },
    Pattern { pattern: String },
    IsTrue,
    IsFalse,
    /// A check with no structured description.
    Custom { code: Cow<'static, str> },
    /// The wrapped check must fail.
    Inverted { inner: Box<ValueDescriptor> },
    /// Every wrapped check must pass.
    All { of: Vec<ValueDescriptor> },
    /// The wrapped check applies only when a value is present.
    Optional { inner: Box<ValueDescriptor> },
}

// ============================================================================
// DATA DESCRIPTOR
// ============================================================================

/// Full description of a container template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataDescriptor {
    /// Presence policy.
    pub state: StateDescriptor,
    /// Implicit checks of the policy followed by attached value checks.
    pub values: Vec<ValueDescriptor>,
}

impl DataDescriptor {
    /// Returns true if any value check is an inverted check.
    pub fn has_inverted_checks(&self) -> bool {
        self.values
            .iter()
            .any(|v| matches!(v, ValueDescriptor::Inverted { .. }))
    }
}

// ============================================================================
// MODEL DESCRIPTOR
// ============================================================================

/// Description of a model shape, in plan order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    /// Model type name.
    pub model: &'static str,
    /// One entry per plan step.
    pub properties: Vec<PropertyDescriptor>,
}

impl ModelDescriptor {
    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A single plan step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub relation: Relation,
}

/// How a property participates in verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "relation", rename_all = "snake_case")]
pub enum Relation {
    /// A validated container field.
    Data { descriptor: DataDescriptor },
    /// A non-container field whose contents are verified as a model.
    Nested {
        model: &'static str,
        cardinality: Cardinality,
    },
    /// A type-erased container that the describing instance did not have.
    Member,
    /// Named containers that vary per instance.
    Members,
}

/// Number of nested models behind a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    One,
    Optional,
    Many,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_state_flags() {
        let collection = StateDescriptor::Collection {
            policy: Box::new(StateDescriptor::Defaulted {
                nullable: true,
                default: None,
            }),
            item: Box::new(DataDescriptor {
                state: StateDescriptor::Required { nullable: false },
                values: vec![ValueDescriptor::Required],
            }),
            nullable_items: false,
        };
        assert!(collection.is_nullable());
        assert!(!collection.is_required());
        assert!(StateDescriptor::Required { nullable: false }.is_required());
    }

    #[test]
    fn test_serialized_shape() {
        let descriptor = DataDescriptor {
            state: StateDescriptor::Defaulted {
                nullable: false,
                default: Some(json!(3)),
            },
            values: vec![
                ValueDescriptor::NotNull,
                ValueDescriptor::Inverted {
                    inner: Box::new(ValueDescriptor::IsTrue),
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "state": { "kind": "defaulted", "nullable": false, "default": 3 },
                "values": [
                    { "kind": "not_null" },
                    { "kind": "inverted", "inner": { "kind": "is_true" } }
                ]
            })
        );
        assert!(descriptor.has_inverted_checks());
    }

    #[test]
    fn test_property_flattening() {
        let property = PropertyDescriptor {
            name: "lines".into(),
            relation: Relation::Nested {
                model: "Line",
                cardinality: Cardinality::Many,
            },
        };
        assert_eq!(
            serde_json::to_value(&property).unwrap(),
            json!({ "name": "lines", "relation": "nested", "model": "Line", "cardinality": "many" })
        );
    }
}
