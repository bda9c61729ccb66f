//! Tests for the OutcomeFutureExt trait.

use std::future::{pending, ready};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use outcome_rail::async_ext::{InspectFailure, MapOutcome};
use outcome_rail::prelude_async::*;
use tokio::time::timeout;

#[test]
fn wrappers_are_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<MapOutcome<std::future::Ready<Outcome<u8>>, fn(u8) -> u16>>();
    assert_sync::<MapOutcome<std::future::Ready<Outcome<u8>>, fn(u8) -> u16>>();
    assert_send::<InspectFailure<std::future::Ready<Outcome<u8>>, fn(&[Error])>>();
}

#[tokio::test]
async fn map_outcome_runs_only_on_success() {
    let calls = AtomicU32::new(0);

    let mapped = ready(success(20))
        .map_outcome(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            x + 1
        })
        .await;
    assert_eq!(mapped.into_value(), 21);

    let skipped = ready(Outcome::<i32>::failure(Error::empty("A")))
        .map_outcome(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            x + 1
        })
        .await;
    assert_eq!(skipped.errors(), [Error::empty("A")]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn inspect_failure_sees_errors_and_passes_them_through() {
    let seen = AtomicU32::new(0);

    let outcome = ready(Outcome::<()>::failure_many([Error::empty("A"), Error::empty("B")]))
        .inspect_failure(|errors| {
            seen.store(errors.len() as u32, Ordering::SeqCst);
        })
        .await;

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(outcome.errors().len(), 2);

    let untouched = ready(success(1)).inspect_failure(|_| panic!("success must not be inspected")).await;
    assert!(untouched.is_success());
}

#[tokio::test]
async fn chained_async_steps_short_circuit() {
    let calls = AtomicU32::new(0);

    let outcome = async { Outcome::<u32>::failure(Error::not_found("User")) }
        .and_then_async(|id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { success(id) }
        })
        .ensure_async(|_| pending::<bool>(), Error::conflict("User"))
        .map_async(|id| async move { id * 2 });
    let outcome = timeout(Duration::from_millis(50), outcome).await.unwrap();

    assert_eq!(outcome.errors(), [Error::not_found("User")]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chained_async_steps_on_success() {
    let outcome = async { success(3_u32) }
        .and_then_async(|x| async move { success(x + 1) })
        .ensure_async(|x| ready(*x == 4), Error::invalid_value("Counter"))
        .map_async(|x| async move { x * 10 })
        .await;

    assert_eq!(outcome.into_value(), 40);
}
