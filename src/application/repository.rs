//! Persistence port for the `User` aggregate.

use core::future::Future;

use crate::domain::{Email, User, UserId};
use crate::outcome::Outcome;

/// Storage of [`User`] aggregates.
///
/// Every method reports expected conditions, such as a missing user or a
/// duplicate, as a failed [`Outcome`] carrying one error from
/// [`user::errors`](crate::domain::user::errors). Implementations translate
/// their technical failures into `User.PersistenceFailed` and never expose
/// the underlying detail.
pub trait UserRepository: Send + Sync {
    /// Allocates a fresh identifier.
    fn next_id(&self) -> impl Future<Output = Outcome<UserId>> + Send;

    /// Loads a user, failing with `User.NotFound`.
    fn get_by_id(&self, id: UserId) -> impl Future<Output = Outcome<User>> + Send;

    /// Returns `true` when no stored user has `email`.
    ///
    /// Takes the address by value so that the returned future does not
    /// borrow from the caller's outcome.
    fn is_email_unique(&self, email: Email) -> impl Future<Output = bool> + Send;

    /// Stores a new user, failing with `User.Conflict` when its id or email is taken.
    fn add(&self, user: User) -> impl Future<Output = Outcome> + Send;

    /// Replaces a stored user, failing with `User.NotFound` when it is missing
    /// and with `User.EmailNotUnique` when another user holds its email.
    fn update(&self, user: User) -> impl Future<Output = Outcome> + Send;
}
