//! Programmer-error conditions raised by the outcome core.
//!
//! These never travel through the failure track. The panicking constructors
//! and accessors of [`Outcome`](crate::Outcome) raise them as panics; the
//! `try_*` twins hand them back as typed errors for callers that must check
//! untrusted input, such as deserialized payloads.
use core::fmt::{self, Display};

use crate::types::{Error, ErrorVec};

/// An attempt to build an outcome whose success flag disagrees with its errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// A success was given one or more errors.
    SuccessWithErrors {
        /// How many errors were supplied.
        count: usize,
    },
    /// A failure was given no errors.
    FailureWithoutErrors,
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuccessWithErrors { count } => {
                write!(f, "invariant violation: a successful outcome cannot carry errors ({count} given)")
            },
            Self::FailureWithoutErrors => {
                f.write_str("invariant violation: a failed outcome must carry at least one error")
            },
        }
    }
}

impl core::error::Error for InvariantViolation {}

/// An attempt to read the value of a failed outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAccess {
    errors: ErrorVec<Error>,
}

impl InvalidAccess {
    pub(crate) fn new(errors: &[Error]) -> Self {
        Self { errors: errors.iter().cloned().collect() }
    }

    /// The errors of the outcome that was read.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl Display for InvalidAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot access the value of a failed outcome")?;
        let mut codes = self.errors.iter().map(Error::code);
        if let Some(first) = codes.next() {
            write!(f, " [{first}")?;
            for code in codes {
                write!(f, ", {code}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl core::error::Error for InvalidAccess {}
