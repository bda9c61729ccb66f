//! The [`Outcome`] type: success with a value, or failure with errors.
//!
//! An `Outcome<T>` is the railway on which every domain rule and workflow
//! step runs. It has exactly two states and the constructors keep them
//! honest: a success never carries errors and a failure always carries at
//! least one. `Outcome` without a parameter is the untyped form, used by
//! steps that only report whether they passed.
//!
//! - [`combinators`] holds the single-track steps (map, ensure, on_success, ...)
//!   that short-circuit on the first failure.
//! - [`combine`] holds the aggregating steps ([`combine()`], zip, collect)
//!   that run every input and report every error.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! const OUT_OF_RANGE: Error = Error::from_static("Number.OutOfRange", "Number must exceed 10.");
//!
//! let outcome = Outcome::success(5).ensure(|x| *x > 10, OUT_OF_RANGE);
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.errors(), [OUT_OF_RANGE]);
//! ```
use core::fmt;

use crate::types::{Error, ErrorListDisplay, ErrorVec, InvalidAccess, InvariantViolation};

pub mod combinators;
pub mod combine;
#[cfg(feature = "serde")]
mod serde_impl;

pub use combine::*;

/// The result of an operation: a value, or one or more errors.
///
/// Equality compares the state, the errors in order, and the value when
/// successful.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T = ()> {
    state: State<T>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(ErrorVec<Error>),
}

/// Wraps a value as a successful outcome.
///
/// This is the ergonomic `T -> Outcome<T>` conversion for domain code.
///
/// # Examples
///
/// ```
/// use outcome_rail::success;
///
/// assert_eq!(success(3).into_value(), 3);
/// ```
#[inline]
pub fn success<T>(value: T) -> Outcome<T> {
    Outcome::success(value)
}

impl Outcome {
    /// The untyped success.
    #[inline]
    pub const fn unit() -> Self {
        Self { state: State::Success(()) }
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { state: State::Success(value) }
    }

    /// Creates a failed outcome from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let outcome = Outcome::<i32>::failure(Error::not_found("User"));
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.errors()[0].code(), "User.NotFound");
    /// ```
    #[inline]
    pub fn failure(error: Error) -> Self {
        Self { state: State::Failure(smallvec::smallvec![error]) }
    }

    /// Creates a failed outcome from a collection of errors, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics with [`InvariantViolation::FailureWithoutErrors`] if `errors` is
    /// empty. Use [`try_failure_many`](Self::try_failure_many) when the
    /// collection may legitimately be empty.
    #[track_caller]
    pub fn failure_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        match Self::try_failure_many(errors) {
            Ok(outcome) => outcome,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Checked form of [`failure_many`](Self::failure_many).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{InvariantViolation, Outcome};
    ///
    /// let empty = Outcome::<()>::try_failure_many([]);
    /// assert_eq!(empty, Err(InvariantViolation::FailureWithoutErrors));
    /// ```
    pub fn try_failure_many<I>(errors: I) -> Result<Self, InvariantViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: ErrorVec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            Err(InvariantViolation::FailureWithoutErrors)
        } else {
            Ok(Self { state: State::Failure(errors) })
        }
    }

    /// Builds an outcome from a raw state, rejecting combinations that break
    /// the success ⇔ no-errors invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, InvariantViolation, Outcome};
    ///
    /// assert!(Outcome::from_parts(Some(1), []).unwrap().is_success());
    /// assert_eq!(
    ///     Outcome::from_parts(Some(1), [Error::empty("Name")]),
    ///     Err(InvariantViolation::SuccessWithErrors { count: 1 })
    /// );
    /// ```
    pub fn from_parts<I>(value: Option<T>, errors: I) -> Result<Self, InvariantViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: ErrorVec<Error> = errors.into_iter().collect();
        match (value, errors.is_empty()) {
            (Some(value), true) => Ok(Self::success(value)),
            (Some(_), false) => Err(InvariantViolation::SuccessWithErrors { count: errors.len() }),
            (None, false) => Ok(Self { state: State::Failure(errors) }),
            (None, true) => Err(InvariantViolation::FailureWithoutErrors),
        }
    }

    /// Failure from an already non-empty error collection.
    #[inline]
    pub(crate) fn from_failed(errors: ErrorVec<Error>) -> Self {
        debug_assert!(!errors.is_empty(), "{}", InvariantViolation::FailureWithoutErrors);
        Self { state: State::Failure(errors) }
    }

    /// Wraps a `Result` whose error side is already a domain [`Error`].
    #[inline]
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Translates a technical failure into a single domain error.
    ///
    /// The underlying error is dropped; nothing of it reaches the errors of
    /// the returned outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// const SAVE_FAILED: Error = Error::from_static("User.PersistenceFailed", "The user could not be saved.");
    ///
    /// let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk on fire"));
    /// let outcome = Outcome::from_result_or(io, SAVE_FAILED);
    /// assert_eq!(outcome.errors(), [SAVE_FAILED]);
    /// ```
    #[inline]
    pub fn from_result_or<E>(result: Result<T, E>, error: Error) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(_) => Self::failure(error),
        }
    }

    /// Fails with `error` when `value` is `None`.
    #[inline]
    pub fn from_option(value: Option<T>, error: Error) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::failure(error),
        }
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The errors in the order they were discovered; empty on success.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            State::Success(_) => &[],
            State::Failure(errors) => errors,
        }
    }

    /// Consumes the outcome and returns its errors; empty on success.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> ErrorVec<Error> {
        match self.state {
            State::Success(_) => ErrorVec::new(),
            State::Failure(errors) => errors,
        }
    }

    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidAccess`] if the outcome is a failure.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(errors) => panic!("{}", InvalidAccess::new(errors)),
        }
    }

    /// Borrows the value of a success; `None` on failure.
    #[must_use]
    #[inline]
    pub fn success_value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Checked form of [`value`](Self::value).
    pub fn try_value(&self) -> Result<&T, InvalidAccess> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(errors) => Err(InvalidAccess::new(errors)),
        }
    }

    /// Consumes the outcome and returns the value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidAccess`] if the outcome is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(errors) => panic!("{}", InvalidAccess::new(&errors)),
        }
    }

    /// The value, or `T::default()` on failure. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let failed = Outcome::<u32>::failure(Error::not_found("Order"));
    /// assert_eq!(failed.value_or_default(), 0);
    /// ```
    #[must_use]
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        match &self.state {
            State::Success(value) => value.clone(),
            State::Failure(_) => T::default(),
        }
    }

    /// Consuming form of [`value_or_default`](Self::value_or_default).
    #[must_use]
    pub fn into_value_or_default(self) -> T
    where
        T: Default,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => T::default(),
        }
    }

    /// Converts to `Option<T>`, dropping the errors.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Borrows the value inside a new outcome, cloning the errors on failure.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match &self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(errors) => Outcome::from_failed(errors.clone()),
        }
    }

    /// Converts into a `Result` with all errors on the `Err` side.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorVec<Error>> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(errors) => Err(errors),
        }
    }

    /// Drops the value, keeping only whether the outcome succeeded.
    #[inline]
    pub fn discard(self) -> Outcome {
        match self.state {
            State::Success(_) => Outcome::unit(),
            State::Failure(errors) => Outcome::from_failed(errors),
        }
    }

    /// Returns a [`Display`](core::fmt::Display) builder for the errors.
    #[inline]
    pub fn display_errors(&self) -> ErrorListDisplay<'_> {
        ErrorListDisplay::new(self.errors())
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorVec<Error>> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(errors) => f.debug_tuple("Failure").field(&errors.as_slice()).finish(),
        }
    }
}
