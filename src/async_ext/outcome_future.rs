//! Future wrappers applying synchronous steps to a pending outcome.
//!
//! [`MapOutcome`] and [`InspectFailure`] wrap a `Future<Output = Outcome<T>>`
//! and apply their closure once the inner future resolves, only on the
//! matching track.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;
use crate::types::Error;

pin_project! {
    /// A future that maps the value of the outcome it resolves to.
    ///
    /// Created by [`OutcomeFutureExt::map_outcome`](super::OutcomeFutureExt::map_outcome).
    ///
    /// # Cancel Safety
    ///
    /// `MapOutcome` is cancel-safe if the inner future is cancel-safe.
    /// The mapping closure is only called when the inner future resolves
    /// to a success.
    #[must_use = "futures do nothing unless polled"]
    pub struct MapOutcome<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapOutcome<Fut, F> {
    /// Creates a new `MapOutcome` from a future and a mapping closure.
    #[inline]
    pub fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T, U> Future for MapOutcome<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| match this.f.take() {
            Some(f) => outcome.map(f),
            None => panic!("MapOutcome polled after completion"),
        })
    }
}

impl<Fut, F, T, U> FusedFuture for MapOutcome<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none() || self.future.is_terminated()
    }
}

pin_project! {
    /// A future that observes the errors of the outcome it resolves to.
    ///
    /// Created by [`OutcomeFutureExt::inspect_failure`](super::OutcomeFutureExt::inspect_failure).
    /// The outcome is passed through unchanged.
    #[must_use = "futures do nothing unless polled"]
    pub struct InspectFailure<Fut, F> {
        #[pin]
        future: Fut,
        action: Option<F>,
    }
}

impl<Fut, F> InspectFailure<Fut, F> {
    /// Creates a new `InspectFailure` from a future and an observer.
    #[inline]
    pub fn new(future: Fut, action: F) -> Self {
        Self { future, action: Some(action) }
    }
}

impl<Fut, F, T> Future for InspectFailure<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(&[Error]),
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| match this.action.take() {
            Some(action) => outcome.on_failure(action),
            None => panic!("InspectFailure polled after completion"),
        })
    }
}

impl<Fut, F, T> FusedFuture for InspectFailure<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce(&[Error]),
{
    fn is_terminated(&self) -> bool {
        self.action.is_none() || self.future.is_terminated()
    }
}
