//! Short-circuiting combinators.
//!
//! Every step here looks at the state of one outcome. A failure passes
//! through with its errors untouched and the supplied closure is never
//! called, so later steps cannot observe or act on a missing value.
use crate::outcome::{Outcome, State};
use crate::types::Error;

impl<T> Outcome<T> {
    /// Transforms the value of a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::success(21).map(|x| x * 2).into_value(), 42);
    ///
    /// let failed = Outcome::<i32>::failure(Error::empty("Amount"));
    /// assert_eq!(failed.clone().map(|x| x * 2).errors(), failed.errors());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(errors) => Outcome::from_failed(errors),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// fn halve(x: i32) -> Outcome<i32> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure(Error::invalid_value("Half"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(halve).and_then(halve).into_value(), 2);
    /// assert!(Outcome::success(6).and_then(halve).and_then(halve).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(errors) => Outcome::from_failed(errors),
        }
    }

    /// Fails with `error` unless `predicate` holds for the value.
    ///
    /// The predicate is not evaluated if the outcome has already failed, and
    /// the value is discarded when it does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// const OUT_OF_RANGE: Error = Error::from_static("Number.OutOfRange", "Number must exceed 10.");
    ///
    /// assert!(Outcome::success(11).ensure(|x| *x > 10, OUT_OF_RANGE).is_success());
    /// assert_eq!(Outcome::success(5).ensure(|x| *x > 10, OUT_OF_RANGE).errors(), [OUT_OF_RANGE]);
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let State::Success(value) = &self.state {
            if !predicate(value) {
                return Self::failure(error);
            }
        }
        self
    }

    /// Like [`ensure`](Self::ensure), but builds the error from the rejected value.
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Error,
    {
        if let State::Success(value) = &self.state {
            if !predicate(value) {
                return Self::failure(error(value));
            }
        }
        self
    }

    /// Runs `action` on the value of a success and returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = Outcome::success(7).on_success(|x| seen.push(*x));
    /// assert_eq!(outcome.into_value(), 7);
    /// assert_eq!(seen, [7]);
    /// ```
    #[inline]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            action(value);
        }
        self
    }

    /// Runs `action` on the errors of a failure and returns the outcome unchanged.
    ///
    /// Typically used at the boundary to log a failure before rendering it.
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&[Error]),
    {
        if let State::Failure(errors) = &self.state {
            action(errors);
        }
        self
    }

    /// Replaces a failure with the outcome produced by `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let cached = Outcome::<&str>::failure(Error::not_found("Cache"))
    ///     .or_else(|_| Outcome::success("fallback"));
    /// assert_eq!(cached.into_value(), "fallback");
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(&[Error]) -> Self,
    {
        if let State::Failure(errors) = &self.state {
            return f(errors);
        }
        self
    }

    /// Transforms every error of a failure, keeping their order.
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        match self.state {
            State::Success(value) => Self::success(value),
            State::Failure(errors) => Self::from_failed(errors.into_iter().map(f).collect()),
        }
    }

    /// Eliminates the outcome into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let status = |outcome: Outcome<u32>| outcome.fold(|_| 200, |_| 400);
    /// assert_eq!(status(Outcome::success(1)), 200);
    /// assert_eq!(status(Outcome::failure(Error::empty("Id"))), 400);
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&[Error]) -> R,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(errors) => on_failure(&errors),
        }
    }
}

impl Outcome {
    /// Continues an untyped success with a value-producing step.
    ///
    /// On failure the callback is not invoked and the same errors are carried
    /// into the new outcome type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::unit().then_map(|| "created").into_value(), "created");
    ///
    /// let failed: Outcome = Outcome::failure(Error::empty("Name"));
    /// assert!(failed.then_map(|| "created").is_failure());
    /// ```
    #[inline]
    pub fn then_map<C, F>(self, f: F) -> Outcome<C>
    where
        F: FnOnce() -> C,
    {
        self.map(|()| f())
    }

    /// Continues an untyped success with a step that may fail.
    #[inline]
    pub fn then<C, F>(self, f: F) -> Outcome<C>
    where
        F: FnOnce() -> Outcome<C>,
    {
        self.and_then(|()| f())
    }
}
