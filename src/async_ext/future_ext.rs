//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Lets a pending outcome, such as the result of a repository call, be
//! chained with the same combinators as a ready one without an intermediate
//! `.await`.

use core::future::Future;

use crate::outcome::Outcome;
use crate::types::Error;

use super::outcome_future::{InspectFailure, MapOutcome};

/// Extension trait chaining combinators onto futures that resolve to an [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn find_price(sku: &str) -> Outcome<u32> {
///     match sku {
///         "apple" => Outcome::success(3),
///         _ => Outcome::failure(Error::not_found("Product")),
///     }
/// }
///
/// # tokio_test_block_on(async {
/// let total = find_price("apple")
///     .map_outcome(|price| price * 4)
///     .ensure_async(|total| std::future::ready(*total < 100), Error::too_long("Order", 100))
///     .await;
/// assert_eq!(total.into_value(), 12);
///
/// let missing = find_price("pear").map_outcome(|price| price * 4).await;
/// assert_eq!(missing.errors()[0].code(), "Product.NotFound");
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Maps the value once the future resolves to a success.
    fn map_outcome<U, F>(self, f: F) -> MapOutcome<Self, F>
    where
        F: FnOnce(T) -> U,
    {
        MapOutcome::new(self, f)
    }

    /// Observes the errors once the future resolves to a failure.
    fn inspect_failure<F>(self, action: F) -> InspectFailure<Self, F>
    where
        F: FnOnce(&[Error]),
    {
        InspectFailure::new(self, action)
    }

    /// Awaits the outcome, then applies [`Outcome::map_async`].
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::and_then_async`].
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::ensure_async`].
    fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.ensure_async(predicate, error).await }
    }
}

impl<Fut, T> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
