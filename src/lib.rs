//! # outcome-rail
//!
//! Railway-oriented composition of operations that can fail with domain
//! errors.
//!
//! An [`Outcome<T>`] is either a success carrying a `T` or a failure
//! carrying one or more [`Error`]s, never both. Two families of combinators
//! move outcomes along the rail:
//!
//! - **Aggregating**: [`combine`](crate::combine()), [`combine!`],
//!   [`Outcome::zip`], [`ZipAll`] and `collect` inspect every input and
//!   report all errors in input order. Use them for independent checks.
//! - **Short-circuiting**: [`Outcome::map`], [`Outcome::and_then`],
//!   [`Outcome::ensure`] and [`Outcome::on_success`] skip their step on a
//!   failure and pass the errors through unchanged. Use them for dependent
//!   steps.
//!
//! The `async` feature adds the asynchronous short-circuiting combinators and
//! a reference [`application`] layer; `tracing` records failed workflows as
//! structured events.
//!
//! # Examples
//!
//! ## Aggregating independent checks
//!
//! ```
//! use outcome_rail::{combine, success, Error};
//!
//! let name = "";
//! let age = 212;
//!
//! let checked = combine![
//!     success(name).ensure(|n| !n.is_empty(), Error::empty("Name")),
//!     success(age).ensure(|a| *a < 150, Error::invalid_value("Age")),
//! ];
//!
//! assert_eq!(checked.display_errors().to_string(), "Name.Empty: Name must not be empty.; Age.InvalidValue: Age has an invalid value.");
//! ```
//!
//! ## Short-circuiting dependent steps
//!
//! ```
//! use outcome_rail::{Error, Outcome, ResultOutcomeExt};
//!
//! const OUT_OF_RANGE: Error = Error::from_static("Quantity.OutOfRange", "Quantity must be positive.");
//!
//! let parsed: Outcome<i32> = "x".parse::<i32>().or_error(Error::invalid_format("Quantity"));
//! let checked = parsed.ensure(|q| *q > 0, OUT_OF_RANGE).map(|q| q * 2);
//!
//! assert_eq!(checked.errors(), [Error::invalid_format("Quantity")]);
//! ```
//!
//! ## Value objects
//!
//! ```
//! use outcome_rail::domain::{first_name, last_name, FullName};
//!
//! let full_name = FullName::create("", "");
//! assert_eq!(full_name.errors(), [first_name::errors::EMPTY, last_name::errors::EMPTY]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

/// Reference value objects and the `User` aggregate
pub mod domain;
/// The `combine!` macro
pub mod macros;
/// The `Outcome` type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits bridging `Result`, `Option` and plain values onto the rail
pub mod traits;
/// `Error`, violations, accumulation and rendering
pub mod types;

/// Reference async workflows over a user repository (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod application;

/// Async combinators and future extensions (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod prelude_async;

pub use outcome::{combine, success, Outcome, ZipAll};
pub use traits::*;
pub use types::{
    Error, ErrorAccumulator, ErrorFormatConfig, ErrorFormatter, ErrorListDisplay, ErrorVec,
    InvalidAccess, InvariantViolation,
};
