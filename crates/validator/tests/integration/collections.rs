//! Collection policies inside models.

use keel_validator::descriptor::StateDescriptor;
use keel_validator::prelude::*;
use keel_validator::state::{DefaultedNullableCollection, OptionalCollection, RequiredCollection};
use pretty_assertions::assert_eq;

fn tag() -> Data<Required<String>> {
    required::<String>().into_data().with_validator(min_length(2))
}

struct Post {
    tags: Data<RequiredCollection<Required<String>>>,
    aliases: Data<DefaultedNullableCollection<Required<String>>>,
    labels: Data<OptionalCollection<Required<String>>>,
}

impl Model for Post {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        plan.data("tags", |p: &Post| &p.tags)
            .data("aliases", |p: &Post| &p.aliases)
            .data("labels", |p: &Post| &p.labels);
    }
}

fn post(tags: Presence<Vec<Option<String>>>) -> Post {
    Post {
        tags: collection(tag())
            .required()
            .into_data()
            .with_validator(max_size(3))
            .with_presence(tags),
        aliases: collection(tag())
            .nullable_items()
            .defaulted(vec![Some("rust".into()), None])
            .into_data(),
        labels: collection(tag()).optional().into_data(),
    }
}

fn some(items: &[&str]) -> Vec<Option<String>> {
    items.iter().map(|item| Some((*item).to_string())).collect()
}

#[test]
fn valid_post() {
    let post = post(Presence::Value(some(&["rust", "io"])));
    assert!(PlanRegistry::new().verify(&post).is_ok());
    assert_eq!(post.aliases.value(), Some(&vec![Some("rust".to_string()), None]));
    assert_eq!(post.labels.value(), Some(&None));
}

#[test]
fn item_errors_carry_index() {
    let post = post(Presence::Value(some(&["rust", "x", "io"])));
    let errors = PlanRegistry::new().verify(&post).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].path.to_string(), "tags[1]");
    assert_eq!(errors.errors()[0].code, "min_length");
}

#[test]
fn every_null_item_is_reported() {
    let post = post(Presence::Value(vec![None, Some("rust".into()), None]));
    let errors = PlanRegistry::new().verify(&post).unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["tags[0]", "tags[2]"]);
    assert!(errors.iter().all(|e| e.kind == ErrorKind::NotNull));
}

#[test]
fn array_checks_run_after_items() {
    let wide = post(Presence::Value(some(&["ab", "cd", "ef", "gh"])));
    let errors = PlanRegistry::new().verify(&wide).unwrap_err();
    assert_eq!(errors.errors()[0].code, "max_size");
    assert_eq!(errors.errors()[0].path.to_string(), "tags");

    let bad_item = post(Presence::Value(some(&["ab", "c", "ef", "gh"])));
    let errors = PlanRegistry::new().verify(&bad_item).unwrap_err();
    assert_eq!(errors.len(), 1, "array checks are skipped when an item fails");
    assert_eq!(errors.errors()[0].path.to_string(), "tags[1]");
}

#[test]
fn null_array_is_rejected() {
    let post = post(Presence::Null);
    let errors = PlanRegistry::new().verify(&post).unwrap_err();
    assert_eq!(errors.errors()[0].path.to_string(), "tags");
    assert_eq!(errors.errors()[0].kind, ErrorKind::Required);
}

#[test]
fn nullable_items_skip_nulls_but_verify_values() {
    let aliases = collection(tag())
        .nullable_items()
        .required()
        .into_data()
        .with_value(vec![None, Some("x".into()), Some("ok".into())]);
    let errors = aliases.verify_detached().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].path.to_string(), "[1]");
}

#[test]
fn default_contents_are_verified() {
    let aliases = collection(tag())
        .defaulted(vec!["x".into()])
        .into_data()
        .unset();
    let errors = aliases.verify_detached().unwrap_err();
    assert_eq!(errors.errors()[0].path.to_string(), "[0]");
}

#[test]
fn nullable_collection_accepts_null() {
    let tags = collection(tag()).required().nullable().into_data().with_null();
    assert_eq!(tags.verify_detached(), Ok(&None));
}

#[test]
fn collection_descriptor() {
    let post = post(Presence::Unset);
    let StateDescriptor::Collection {
        item,
        nullable_items,
        ..
    } = &post.aliases.descriptor().state
    else {
        panic!("aliases is a collection");
    };
    assert!(*nullable_items);
    assert_eq!(item.state, StateDescriptor::Required { nullable: false });
}
