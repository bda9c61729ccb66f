//! Tracing integration for outcome-rail.
//!
//! The core never logs. [`OutcomeTracingExt`] lets the boundary report
//! failures to the `tracing` ecosystem as structured events carrying the
//! operation name, the number of errors and their codes. Messages are not
//! recorded.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::{self, Display};

use tracing::Span;

use crate::outcome::Outcome;
use crate::types::Error;

/// Comma-separated error codes, formatted lazily.
struct Codes<'a>(&'a [Error]);

impl Display for Codes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(error.code())?;
        }
        Ok(())
    }
}

pub(crate) fn emit_failure(span: &Span, operation: &str, errors: &[Error]) {
    tracing::warn!(
        parent: span,
        operation,
        error_count = errors.len(),
        codes = %Codes(errors),
        "operation failed"
    );
}

/// Extension trait recording failed outcomes as `tracing` events.
///
/// # Example
///
/// ```rust
/// use outcome_rail::{Error, Outcome, OutcomeTracingExt};
///
/// let outcome = Outcome::<u32>::failure(Error::not_found("User")).trace_failure("load_user");
/// assert!(outcome.is_failure());
/// ```
pub trait OutcomeTracingExt: Sized {
    /// Emits a `WARN` event under the current span if the outcome failed.
    fn trace_failure(self, operation: &str) -> Self;

    /// Like [`trace_failure`](Self::trace_failure), under an explicit span.
    fn trace_failure_in(self, span: &Span, operation: &str) -> Self;
}

impl<T> OutcomeTracingExt for Outcome<T> {
    fn trace_failure(self, operation: &str) -> Self {
        self.trace_failure_in(&Span::current(), operation)
    }

    fn trace_failure_in(self, span: &Span, operation: &str) -> Self {
        self.on_failure(|errors| emit_failure(span, operation, errors))
    }
}
