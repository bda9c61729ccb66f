//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async-specific items.
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`combine!`]
//! - **Types**: [`Outcome`], [`Error`], [`ErrorAccumulator`]
//! - **Traits**: [`ZipAll`], [`ResultOutcomeExt`], [`OptionOutcomeExt`], [`IntoOutcome`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`OutcomeFutureExt`](crate::async_ext::OutcomeFutureExt) -
//!   combinators on `Future<Output = Outcome<T>>`
//! - **Traits** (`tracing` feature): [`FutureTracingExt`](crate::async_ext::FutureTracingExt)
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn load_balance(account: u32) -> Outcome<i64> {
//!     match account {
//!         1 => Outcome::success(250),
//!         _ => Outcome::failure(Error::not_found("Account")),
//!     }
//! }
//!
//! # tokio_test_block_on(async {
//! let withdrawal = success(1_u32)
//!     .and_then_async(load_balance)
//!     .ensure_async(|balance| std::future::ready(*balance >= 100), Error::invalid_value("Amount"))
//!     .map_outcome(|balance| balance - 100)
//!     .await;
//! assert_eq!(withdrawal.into_value(), 150);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::OutcomeFutureExt;

#[cfg(feature = "tracing")]
pub use crate::async_ext::FutureTracingExt;
