//! Registry diagnostics through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use crate::support::{line, order};
use keel_validator::prelude::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn compilation_is_logged_once() {
    let registry = PlanRegistry::new();
    let logs = captured(|| {
        registry.verify(&order(Some("Ada"), vec![line(Some("pen"), None)])).unwrap();
        registry.verify(&order(Some("Ada"), Vec::new())).unwrap();
    });

    assert_eq!(logs.matches("verification plan compiled").count(), 2, "{logs}");
    assert!(!logs.contains("executing verification plan"));
}

#[test]
fn execution_tracing_is_opt_in() {
    let registry = PlanRegistry::with_config(VerifierConfig::default().with_trace_execution(true));
    let logs = captured(|| {
        registry.verify(&order(Some("Ada"), Vec::new())).unwrap();
    });
    assert!(logs.contains("executing verification plan"), "{logs}");
}
