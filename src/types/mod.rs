//! Error values and the supporting types of the outcome core.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ErrorAccumulator, Outcome};
//!
//! let mut acc = ErrorAccumulator::new();
//! acc.push(Error::empty("FirstName"));
//! acc.push(Error::empty("LastName"));
//!
//! let outcome: Outcome = acc.finish();
//! assert_eq!(outcome.errors().len(), 2);
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error;
pub mod error_formatter;
pub mod violation;

pub use accumulator::*;
pub use error::*;
pub use error_formatter::*;
pub use violation::*;

/// SmallVec-backed collection used for the errors of a failed outcome.
///
/// Uses inline storage for one element, the common case of a single
/// violated rule or a failed lookup.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
