//! Tests for recording failed outcomes as tracing events.

use std::io;
use std::sync::{Arc, Mutex};

use outcome_rail::prelude::*;
use tracing::subscriber::DefaultGuard;

/// Collects formatted events emitted while its guard is alive.
#[derive(Clone, Default)]
pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub(crate) fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn trace_failure_records_operation_and_codes() {
    let captured = Captured::default();
    let _guard = captured.install();

    let outcome = Outcome::<u8>::failure_many([Error::empty("A"), Error::empty("B")]).trace_failure("load_user");

    assert_eq!(outcome.errors().len(), 2);
    let output = captured.output();
    assert!(output.contains("WARN"));
    assert!(output.contains("operation failed"));
    assert!(output.contains("load_user"));
    assert!(output.contains("error_count=2"));
    assert!(output.contains("A.Empty, B.Empty"));
}

#[test]
fn trace_failure_is_silent_on_success() {
    let captured = Captured::default();
    let _guard = captured.install();

    let outcome = success(1).trace_failure("load_user");

    assert!(outcome.is_success());
    assert!(captured.output().is_empty());
}

#[test]
fn messages_are_not_recorded() {
    let captured = Captured::default();
    let _guard = captured.install();

    let _ = Outcome::<()>::failure(Error::new("Card.Declined", "card 4111 declined")).trace_failure("charge");

    let output = captured.output();
    assert!(output.contains("Card.Declined"));
    assert!(!output.contains("4111"));
}
