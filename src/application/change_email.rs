use std::sync::Arc;

#[cfg(feature = "tracing")]
use crate::async_ext::FutureTracingExt;
use crate::domain::user::errors;
use crate::domain::UserId;
use crate::outcome::Outcome;

use super::UserRepository;

#[derive(Debug, Clone, Default)]
pub struct ChangeUserEmail {
    pub user_id: String,
    pub email: String,
}

/// Moves a user to a new email address.
///
/// The new address must differ from the current one and must not belong to
/// another user.
pub struct ChangeUserEmailHandler<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> ChangeUserEmailHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: ChangeUserEmail) -> Outcome {
        let repository = &*self.repository;

        let flow = async {
            UserId::parse(&command.user_id)
                .and_then_async(|id| repository.get_by_id(id))
                .await
                .and_then(|user| user.update_email(&command.email))
                .ensure_async(
                    |user| repository.is_email_unique(user.email().clone()),
                    errors::EMAIL_NOT_UNIQUE,
                )
                .await
                .and_then_async(|user| repository.update(user))
                .await
        };

        #[cfg(feature = "tracing")]
        let flow = flow.traced("change_user_email");

        flow.await
    }
}
