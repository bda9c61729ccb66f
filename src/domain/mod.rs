//! Reference domain built on [`Outcome`](crate::Outcome).
//!
//! Value objects validate their raw input in a `create` constructor that
//! returns an `Outcome`. Independent rules are aggregated with
//! [`combine!`](crate::combine) or [`zip`](crate::Outcome::zip) so a caller
//! sees every problem at once; dependent rules short-circuit with
//! [`ensure`](crate::Outcome::ensure) and [`and_then`](crate::Outcome::and_then).
//!
//! Every type keeps its error values in a nested `errors` module of
//! `const` items, so callers and tests compare against the same catalog.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::domain::{email, name, Email, Name};
//! use outcome_rail::ZipAll;
//!
//! let form = (Name::create(""), Email::create("")).zip_all();
//! assert_eq!(form.errors(), [name::errors::EMPTY, email::errors::EMPTY]);
//! ```

pub mod email;
pub mod first_name;
pub mod full_name;
pub mod last_name;
pub mod name;
pub mod password;
pub mod user;

mod text;

pub use email::Email;
pub use first_name::FirstName;
pub use full_name::FullName;
pub use last_name::LastName;
pub use name::Name;
pub use password::Password;
pub use user::{User, UserId};
