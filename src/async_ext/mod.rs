//! Async extensions for outcome-rail.
//!
//! This module provides the asynchronous combinators. They keep the same
//! short-circuit rule as the sync counterparts: a failed outcome never
//! invokes, and never waits on, the asynchronous step that follows it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::application::UserRepository;
//! use outcome_rail::domain::{User, UserId};
//! use outcome_rail::Outcome;
//!
//! async fn rename(repo: &impl UserRepository, raw_id: &str, first: &str, last: &str) -> Outcome<User> {
//!     UserId::parse(raw_id)
//!         .and_then_async(|id| repo.get_by_id(id))
//!         .await
//!         .and_then(|user| user.update_name(first, last))
//! }
//! ```

mod future_ext;
mod outcome_async;
mod outcome_future;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use future_ext::OutcomeFutureExt;
pub use outcome_future::{InspectFailure, MapOutcome};
#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureTracingExt, TracedOutcome};
