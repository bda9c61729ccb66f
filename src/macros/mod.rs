//! Ergonomic macros for aggregating outcomes.
//!
//! - [`macro@crate::combine`] - Combines outcomes of different value types into
//!   one untyped [`Outcome`](crate::Outcome), reporting every error in order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{combine, Error, Outcome};
//!
//! let id = Outcome::success(7_u64);
//! let name = Outcome::<&str>::failure(Error::empty("Name"));
//! let email = Outcome::<String>::failure(Error::invalid_format("Email"));
//!
//! let checked = combine![id, name, email];
//! let codes: Vec<_> = checked.errors().iter().map(Error::code).collect();
//! assert_eq!(codes, ["Name.Empty", "Email.InvalidFormat"]);
//! ```

/// Combines any number of outcomes, of any value types, into one untyped outcome.
///
/// Expands to a call to [`combine`](crate::combine()) over `&dyn Failable`
/// references, so the inputs are only borrowed and remain usable afterwards.
/// Every input is inspected; the errors of all failing inputs are reported
/// in the order the inputs are written.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Outcome};
///
/// let number = Outcome::success(1);
/// let text = Outcome::success("a");
/// assert!(combine![number, text].is_success());
/// assert_eq!(number.into_value(), 1);
/// ```
#[macro_export]
macro_rules! combine {
    ($($outcome:expr),+ $(,)?) => {
        $crate::combine([$(&$outcome as &dyn $crate::Failable),+])
    };
}
