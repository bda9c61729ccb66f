//! Tracing for pending outcomes.
//!
//! [`FutureTracingExt`] is the future counterpart of
//! [`OutcomeTracingExt`](crate::OutcomeTracingExt): the failure event is
//! emitted under a span captured when the wrapper is built.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::outcome::Outcome;
use crate::traits::trace_failure::emit_failure;

/// Extension trait for futures that record a failed outcome under a span.
///
/// The span is captured when the wrapper is created, so the event is
/// attributed to the caller's context even if the future is polled
/// elsewhere.
pub trait FutureTracingExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Captures the current span; records a failure under it on resolution.
    fn traced(self, operation: &'static str) -> TracedOutcome<Self> {
        TracedOutcome { inner: self, span: Span::current(), operation }
    }

    /// Like [`traced`](Self::traced), with an explicit span.
    fn traced_in(self, span: Span, operation: &'static str) -> TracedOutcome<Self> {
        TracedOutcome { inner: self, span, operation }
    }
}

impl<F, T> FutureTracingExt<T> for F where F: Future<Output = Outcome<T>> {}

pin_project! {
    /// Future wrapper that records a failed outcome as a `tracing` event.
    ///
    /// Created by [`FutureTracingExt::traced`] or [`FutureTracingExt::traced_in`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedOutcome<F> {
        #[pin]
        inner: F,
        span: Span,
        operation: &'static str,
    }
}

impl<F, T> Future for TracedOutcome<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => {
                let operation = *this.operation;
                let span = &*this.span;
                Poll::Ready(outcome.on_failure(|errors| emit_failure(span, operation, errors)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
