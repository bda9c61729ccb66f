use std::sync::Arc;

#[cfg(feature = "tracing")]
use crate::async_ext::FutureTracingExt;
use crate::domain::UserId;
use crate::outcome::Outcome;

use super::UserRepository;

#[derive(Debug, Clone, Default)]
pub struct RenameUser {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Loads a user, replaces both name parts and stores the result.
pub struct RenameUserHandler<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> RenameUserHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: RenameUser) -> Outcome {
        let repository = &*self.repository;

        let flow = async {
            UserId::parse(&command.user_id)
                .and_then_async(|id| repository.get_by_id(id))
                .await
                .and_then(|user| user.update_name(&command.first_name, &command.last_name))
                .and_then_async(|user| repository.update(user))
                .await
        };

        #[cfg(feature = "tracing")]
        let flow = flow.traced("rename_user");

        flow.await
    }
}
