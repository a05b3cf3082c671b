//! Run-time shaped payloads.

use crate::support::{Line, line};
use keel_validator::descriptor::Relation;
use keel_validator::prelude::*;
use pretty_assertions::assert_eq;

fn settings(theme: Option<&str>, retries: Option<u8>) -> DynamicModel {
    let theme_template = required::<String>().into_data().with_validator(not_empty());
    let retries_template = defaulted(3u8).into_data().with_validator(max(5u8));
    DynamicModel::new()
        .with_member(
            "theme",
            theme.map_or_else(|| theme_template.unset(), |t| theme_template.with_value(t.into())),
        )
        .with_member(
            "retries",
            retries.map_or_else(|| retries_template.unset(), |r| retries_template.with_value(r)),
        )
}

#[test]
fn dynamic_members_verify_like_fields() {
    let registry = PlanRegistry::new();
    let ok = settings(Some("dark"), None);
    assert!(registry.verify(&ok).is_ok());
    assert_eq!(ok.get::<Defaulted<u8>>("retries").and_then(Data::value), Some(&3));

    let errors = registry.verify(&settings(None, Some(9))).unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["theme", "retries"]);
}

#[test]
fn payload_keys_share_one_plan() {
    let registry = PlanRegistry::new();
    for i in 0..500 {
        let payload =
            DynamicModel::new().with_member(format!("k{i}"), required::<String>().into_data());
        let errors = registry.verify(&payload).unwrap_err();
        assert_eq!(errors.errors()[0].path.to_string(), format!("k{i}"));
    }
    assert_eq!(registry.plan_count(), 1);

    let text = DynamicModel::new().with_member("value", optional::<String>().into_data());
    let number = DynamicModel::new().with_member("value", optional::<i64>().into_data());
    registry.prepare(&text).unwrap();
    registry.prepare(&number).unwrap();
    assert_eq!(registry.plan_count(), 1);
}

#[test]
fn payload_descriptor_lists_members() {
    let mut extended = settings(Some("dark"), None);
    extended.set_member("locale", optional::<String>().into_data());

    let descriptor = extended.descriptor();
    let names: Vec<_> = descriptor.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["theme", "retries", "locale"]);
    assert!(matches!(
        descriptor.property("locale").map(|p| &p.relation),
        Some(Relation::Data { .. })
    ));

    let shared = PlanRegistry::new().describe(&extended).unwrap();
    assert_eq!(shared.properties.len(), 1);
    assert_eq!(shared.properties[0].relation, Relation::Members);
}

/// A static model holding a dynamic one.
struct Envelope {
    kind: Data<Required<String>>,
    payload: DynamicModel,
    lines: Option<Vec<Line>>,
}

impl Model for Envelope {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.data("kind", |e: &Envelope| &e.kind)
            .nested("payload", |e: &Envelope| &e.payload)
            .nested_optional("lines", |e: &Envelope| e.lines.as_ref());
    }
}

#[test]
fn dynamic_model_nested_in_static_model() {
    let envelope = Envelope {
        kind: required::<String>().into_data().with_value("settings".into()),
        payload: settings(None, None),
        lines: Some(vec![line(Some("pen"), None), line(None, None)]),
    };
    let errors = PlanRegistry::new().verify(&envelope).unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["payload.theme", "lines[1].name"]);
}

#[test]
fn clones_are_independent() {
    let original = settings(None, None);
    let copy = original.clone();
    let _ = PlanRegistry::new().verify(&original);

    assert_eq!(
        original.get_member("theme").map(|m| m.member_state()),
        Some(DataState::Invalid)
    );
    assert_eq!(
        copy.get_member("theme").map(|m| m.member_state()),
        Some(DataState::NotVerified)
    );
}
