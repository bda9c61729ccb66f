//! Asynchronous counterparts of the short-circuiting combinators.
//!
//! Each method mirrors its synchronous twin; only the step supplied by the
//! caller is asynchronous. The step is invoked, and awaited, only while the
//! outcome is a success. A failure completes on the first poll without
//! invoking the step, so a cheap format check that fails never triggers a
//! storage round-trip.

use core::future::Future;

use crate::outcome::Outcome;
use crate::types::Error;

impl<T> Outcome<T> {
    /// Transforms the value of a success with an asynchronous function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// # tokio_test_block_on(async {
    /// let doubled = Outcome::success(21).map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled.into_value(), 42);
    /// # });
    /// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
    /// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
    /// # }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.into_result() {
            Ok(value) => Outcome::success(f(value).await),
            Err(errors) => Outcome::from_failed(errors),
        }
    }

    /// Chains an asynchronous step that may itself fail, such as a repository lookup.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.into_result() {
            Ok(value) => f(value).await,
            Err(errors) => Outcome::from_failed(errors),
        }
    }

    /// Fails with `error` unless the asynchronous `predicate` holds.
    ///
    /// The predicate receives a reference to the value and must return a
    /// future that does not borrow it; clone what the check needs.
    pub async fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let check = self.success_value().map(predicate);
        let holds = match check {
            Some(check) => check.await,
            None => true,
        };
        if holds {
            self
        } else {
            Self::failure(error)
        }
    }

    /// Runs an asynchronous side effect on a success and returns the outcome unchanged.
    pub async fn on_success_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        let effect = self.success_value().map(action);
        if let Some(effect) = effect {
            effect.await;
        }
        self
    }

    /// Chains an asynchronous step that can be interrupted.
    ///
    /// The step reports interruption, such as cancellation, through the
    /// outer `Err`. That error is returned as-is and never folded into the
    /// failure track. On failure the step is not invoked and the result is
    /// `Ok` with the same errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Cancelled;
    ///
    /// # tokio_test_block_on(async {
    /// let interrupted = Outcome::success(1)
    ///     .try_and_then_async(|_| async { Err::<Outcome<i32>, _>(Cancelled) })
    ///     .await;
    /// assert_eq!(interrupted, Err(Cancelled));
    /// # });
    /// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
    /// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
    /// # }
    /// ```
    pub async fn try_and_then_async<U, E, F, Fut>(self, f: F) -> Result<Outcome<U>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<Outcome<U>, E>>,
    {
        match self.into_result() {
            Ok(value) => f(value).await,
            Err(errors) => Ok(Outcome::from_failed(errors)),
        }
    }
}

impl Outcome {
    /// Continues an untyped success with an asynchronous value-producing step.
    pub async fn then_map_async<C, F, Fut>(self, f: F) -> Outcome<C>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = C>,
    {
        self.map_async(|()| f()).await
    }

    /// Continues an untyped success with an asynchronous step that may fail.
    pub async fn then_async<C, F, Fut>(self, f: F) -> Outcome<C>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<C>>,
    {
        self.and_then_async(|()| f()).await
    }
}
