//! Traits connecting outcomes to the rest of the type system.
//!
//! - [`Failable`]: type-erased access to the errors of any outcome, used by
//!   [`combine`](crate::combine()) to aggregate outcomes of different value types
//! - [`ResultOutcomeExt`]: translates a technical `Result` into an outcome
//!   carrying one domain error
//! - [`OptionOutcomeExt`]: turns a missing value into a failure
//! - [`IntoOutcome`]: lifts any value onto the success track
//! - `OutcomeTracingExt` (`tracing` feature): records a failure as a
//!   structured event
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, OptionOutcomeExt, ResultOutcomeExt};
//!
//! const NOT_FOUND: Error = Error::from_static("User.NotFound", "User was not found.");
//!
//! let parsed = "42".parse::<u32>().or_error(Error::invalid_format("UserId"));
//! assert_eq!(parsed.into_value(), 42);
//!
//! let missing = None::<u32>.ok_or_error(NOT_FOUND);
//! assert_eq!(missing.errors(), [NOT_FOUND]);
//! ```

pub mod failable;
pub mod into_outcome;
pub mod result_ext;
#[cfg(feature = "tracing")]
pub mod trace_failure;

pub use failable::Failable;
pub use into_outcome::IntoOutcome;
pub use result_ext::{OptionOutcomeExt, ResultOutcomeExt};
#[cfg(feature = "tracing")]
pub use trace_failure::OutcomeTracingExt;
