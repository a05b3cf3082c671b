//! Shared containers and registries across threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use keel_validator::prelude::*;

#[test]
fn shared_container_is_verified_once() {
    static FACTORY_CALLS: AtomicUsize = AtomicUsize::new(0);

    let data = defaulted_with(|| {
        FACTORY_CALLS.fetch_add(1, Ordering::SeqCst);
        42u64
    })
    .into_data()
    .with_validator(min(10u64))
    .unset();

    let results: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| *data.verify_detached().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|value| *value == 42));
    assert_eq!(FACTORY_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(data.state(), DataState::Valid);
}

static DESCRIBE_CALLS: AtomicUsize = AtomicUsize::new(0);

struct Probe {
    label: Data<Required<String>>,
}

impl Model for Probe {
    fn describe(&self, plan: &mut PlanBuilder<'_, Self>) {
        DESCRIBE_CALLS.fetch_add(1, Ordering::SeqCst);
        plan.data("label", |p: &Probe| &p.label);
    }
}

#[test]
fn registry_compiles_each_shape_once_under_contention() {
    let registry = PlanRegistry::new();
    let template = required::<String>().into_data().with_validator(not_empty());

    thread::scope(|scope| {
        for worker in 0..16 {
            let registry = &registry;
            let template = &template;
            scope.spawn(move || {
                for round in 0..50 {
                    let probe = Probe {
                        label: template.with_value(format!("{worker}-{round}")),
                    };
                    assert!(registry.verify(&probe).is_ok());
                }
            });
        }
    });

    assert_eq!(registry.plan_count(), 1);
    assert_eq!(DESCRIBE_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn invalid_outcome_is_shared_across_threads() {
    let data = required::<String>()
        .into_data()
        .with_validator(min_length(5))
        .with_value("abc".into());

    let codes: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| data.verify_detached().unwrap_err().errors()[0].code.to_string())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(codes.iter().all(|code| code == "min_length"));
}
