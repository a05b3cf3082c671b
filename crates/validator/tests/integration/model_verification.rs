//! Whole-model verification: error union, paths, cross-field checks.

use crate::support::{Line, line, order};
use keel_validator::descriptor::{Cardinality, Relation, StateDescriptor, ValueDescriptor};
use keel_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn valid_order_passes() {
    let order = order(Some("Ada"), vec![line(Some("pen"), Some(2)), line(Some("ink"), None)]);
    let registry = PlanRegistry::new();
    assert!(registry.verify(&order).is_ok());
    assert_eq!(order.lines[1].quantity.value(), Some(&1));
}

#[test]
fn errors_are_unioned_in_plan_order() {
    let order = order(
        None,
        vec![
            line(Some("pen"), Some(2)),
            line(Some(""), Some(200)),
            line(None, None),
        ],
    );
    let errors = PlanRegistry::new().verify(&order).unwrap_err();

    assert_eq!(
        errors.entries(),
        vec![
            ("customer".to_string(), "This field is required".to_string()),
            ("items[1].name".to_string(), "Value must not be empty".to_string()),
            (
                "items[1].quantity".to_string(),
                "Value must be between 1 and 99".to_string()
            ),
            ("items[2].name".to_string(), "This field is required".to_string()),
        ]
    );
    assert_eq!(errors.errors()[2].code, "out_of_range");
}

#[test]
fn failing_fields_keep_their_state() {
    let order = order(Some("A"), vec![line(Some("pen"), Some(2))]);
    let _ = PlanRegistry::new().verify(&order);

    assert_eq!(order.customer.state(), DataState::Invalid);
    assert_eq!(order.note.state(), DataState::Valid);
    assert_eq!(order.lines[0].name.state(), DataState::Valid);

    let cached = order.customer.errors().unwrap();
    assert!(cached.errors()[0].path.is_empty(), "cached errors are unprefixed");
}

#[test]
fn error_report_rendering() {
    let order = order(None, vec![line(Some("pen"), None), line(None, Some(3))]);
    let errors = PlanRegistry::new().verify(&order).unwrap_err();

    insta::assert_snapshot!(errors.to_string().trim_end(), @r"
    Validation failed with 2 error(s):
      1. customer: This field is required
      2. items[1].name: This field is required
    ");
}

// ============================================================================
// NESTED CONTAINERS
// ============================================================================

struct Basket {
    owner: Data<Required<String>>,
    lines: Data<Nested<Required<Vec<Line>>>>,
}

impl Model for Basket {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.data("owner", |b: &Basket| &b.owner)
            .data("items", |b: &Basket| &b.lines);
    }
}

fn basket(lines: Option<Vec<Line>>) -> Basket {
    let template = required::<Vec<Line>>().nested().into_data();
    Basket {
        owner: required::<String>().into_data().with_value("Grace".into()),
        lines: match lines {
            Some(lines) => template.with_value(lines),
            None => template.unset(),
        },
    }
}

#[test]
fn nested_container_paths() {
    let basket = basket(Some(vec![
        line(Some("pen"), None),
        line(Some("ink"), None),
        line(None, None),
    ]));
    let errors = PlanRegistry::new().verify(&basket).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].path.to_string(), "items[2].name");
    assert_eq!(errors.errors()[0].kind, ErrorKind::Required);
}

#[test]
fn absent_nested_container_is_required() {
    let basket = basket(None);
    let errors = PlanRegistry::new().verify(&basket).unwrap_err();
    assert_eq!(
        errors.entries(),
        vec![("items".to_string(), "This field is required".to_string())]
    );
}

#[test]
fn nested_plans_are_shared() {
    let registry = PlanRegistry::new();
    registry.verify(&basket(Some(vec![line(Some("pen"), None)]))).unwrap();
    registry.verify(&order(Some("Ada"), vec![line(Some("pen"), None)])).unwrap();

    // Basket, Vec<Line>, Line, Order
    assert_eq!(registry.plan_count(), 4);
}

// ============================================================================
// CROSS-FIELD CHECKS
// ============================================================================

struct PasswordChange {
    password: Data<Required<String>>,
    confirmation: Data<Required<String>>,
}

impl Model for PasswordChange {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.data("password", |p: &PasswordChange| &p.password)
            .data("confirmation", |p: &PasswordChange| &p.confirmation);
    }
}

fn password_change(password: &str, confirmation: &str) -> PasswordChange {
    let password_template = required::<String>().into_data().with_validator(min_length(8));
    let confirmation_template = required::<String>().into_data().with_model_check(
        "matches_password",
        |confirmation: &String, model: Option<&PasswordChange>| match model {
            Some(model) if model.password.presence().value() != Some(confirmation) => Err(
                ValidationError::new("matches_password", "Passwords do not match"),
            ),
            _ => Ok(()),
        },
    );
    PasswordChange {
        password: password_template.with_value(password.into()),
        confirmation: confirmation_template.with_value(confirmation.into()),
    }
}

#[test]
fn model_check_sees_enclosing_model() {
    let registry = PlanRegistry::new();
    assert!(registry.verify(&password_change("correct horse", "correct horse")).is_ok());

    let errors = registry
        .verify(&password_change("correct horse", "battery staple"))
        .unwrap_err();
    assert_eq!(
        errors.entries(),
        vec![("confirmation".to_string(), "Passwords do not match".to_string())]
    );
}

#[test]
fn model_check_detached_gets_no_model() {
    let change = password_change("correct horse", "battery staple");
    assert!(change.confirmation.verify_detached().is_ok());
}

// ============================================================================
// DESCRIPTORS
// ============================================================================

#[test]
fn model_descriptor_lists_steps() {
    let order = order(Some("Ada"), Vec::new());
    let descriptor = PlanRegistry::new().describe(&order).unwrap();

    let names: Vec<_> = descriptor.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["customer", "note", "items"]);

    let Some(Relation::Data { descriptor: customer }) =
        descriptor.property("customer").map(|p| &p.relation)
    else {
        panic!("customer is a data property");
    };
    assert_eq!(customer.state, StateDescriptor::Required { nullable: false });
    assert_eq!(
        customer.values,
        vec![
            ValueDescriptor::Required,
            ValueDescriptor::NotNull,
            ValueDescriptor::MinLength { min: 2 },
        ]
    );

    assert!(matches!(
        descriptor.property("items").map(|p| &p.relation),
        Some(Relation::Nested {
            cardinality: Cardinality::Many,
            ..
        })
    ));
}

#[test]
fn global_verify_entry_point() {
    let order = order(Some("Ada"), vec![line(Some("pen"), Some(5))]);
    assert!(keel_validator::verify(&order).is_ok());
    assert!(PlanRegistry::global().plan_count() >= 2);
}
