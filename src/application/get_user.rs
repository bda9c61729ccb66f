use std::sync::Arc;

#[cfg(feature = "tracing")]
use crate::async_ext::FutureTracingExt;
use crate::async_ext::OutcomeFutureExt;
use crate::domain::{User, UserId};
use crate::outcome::Outcome;

use super::UserRepository;

#[derive(Debug, Clone, Default)]
pub struct GetUser {
    pub user_id: String,
}

/// Read model returned to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            first_name: user.full_name().first().to_string(),
            last_name: user.full_name().last().to_string(),
            email: user.email().to_string(),
        }
    }
}

pub struct GetUserHandler<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> GetUserHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUser) -> Outcome<UserResponse> {
        let repository = &*self.repository;

        let flow = UserId::parse(&query.user_id)
            .and_then_async(|id| repository.get_by_id(id))
            .map_outcome(|user| UserResponse::from(&user));

        #[cfg(feature = "tracing")]
        let flow = flow.traced("get_user");

        flow.await
    }
}
