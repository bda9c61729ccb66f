//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`combine!`]
//! - **Types**: [`Outcome`], [`Error`], [`ErrorAccumulator`]
//! - **Functions**: [`success`], [`combine`](crate::combine())
//! - **Traits**: [`ZipAll`], [`ResultOutcomeExt`], [`OptionOutcomeExt`], [`IntoOutcome`]
//! - **Traits** (`tracing` feature): `OutcomeTracingExt`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.trim()
//!         .parse::<u16>()
//!         .or_error(Error::invalid_format("Port"))
//!         .ensure(|port| *port >= 1024, Error::invalid_value("Port"))
//! }
//!
//! let ports: Outcome<Vec<u16>> = ["8080", "80", "http"].into_iter().map(parse_port).collect();
//! let codes: Vec<_> = ports.errors().iter().map(Error::code).collect();
//! assert_eq!(codes, ["Port.InvalidValue", "Port.InvalidFormat"]);
//! ```

pub use crate::combine;
pub use crate::outcome::{success, Outcome, ZipAll};
pub use crate::traits::{IntoOutcome, OptionOutcomeExt, ResultOutcomeExt};
pub use crate::types::{Error, ErrorAccumulator};
#[cfg(feature = "tracing")]
pub use crate::traits::OutcomeTracingExt;
