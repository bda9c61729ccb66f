use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::domain::user::errors;
use crate::domain::{Email, User, UserId};
use crate::outcome::Outcome;
use crate::traits::{OptionOutcomeExt, ResultOutcomeExt};

use super::UserRepository;

/// A [`UserRepository`] kept in process memory.
///
/// Reads recover from a poisoned lock since the map is never left half
/// written. Writes on a poisoned lock fail with `User.PersistenceFailed`.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicU64,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self { users: RwLock::new(BTreeMap::new()), next_id: AtomicU64::new(1) }
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<UserId, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn next_id(&self) -> Outcome<UserId> {
        UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn get_by_id(&self, id: UserId) -> Outcome<User> {
        self.read().get(&id).cloned().ok_or_error(errors::NOT_FOUND)
    }

    async fn is_email_unique(&self, email: Email) -> bool {
        self.read().values().all(|user| *user.email() != email)
    }

    async fn add(&self, user: User) -> Outcome {
        self.users
            .write()
            .or_error(errors::PERSISTENCE_FAILED)
            .ensure(
                |users| {
                    !users.contains_key(&user.id())
                        && users.values().all(|existing| existing.email() != user.email())
                },
                errors::CONFLICT,
            )
            .map(|mut users| {
                users.insert(user.id(), user);
            })
    }

    async fn update(&self, user: User) -> Outcome {
        self.users
            .write()
            .or_error(errors::PERSISTENCE_FAILED)
            .ensure(|users| users.contains_key(&user.id()), errors::NOT_FOUND)
            .ensure(
                |users| users.values().all(|existing| existing.id() == user.id() || existing.email() != user.email()),
                errors::EMAIL_NOT_UNIQUE,
            )
            .map(|mut users| {
                users.insert(user.id(), user);
            })
    }
}
