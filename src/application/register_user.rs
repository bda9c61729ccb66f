use std::sync::Arc;

use crate::async_ext::OutcomeFutureExt;
#[cfg(feature = "tracing")]
use crate::async_ext::FutureTracingExt;
use crate::domain::user::errors;
use crate::domain::{Email, FullName, Password, User, UserId};
use crate::outcome::{Outcome, ZipAll};

use super::UserRepository;

/// Raw input of the registration workflow.
#[derive(Debug, Clone, Default)]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Registers a new user.
///
/// The input is validated as a whole, so one call reports every field
/// error. Only a valid request reaches the repository: the email
/// uniqueness check, id allocation and insert short-circuit in that order.
pub struct RegisterUserHandler<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> RegisterUserHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: RegisterUser) -> Outcome<UserId> {
        let repository = &*self.repository;

        let flow = (
            FullName::create(&command.first_name, &command.last_name),
            Email::create(&command.email),
            Password::create(&command.password),
        )
            .zip_all()
            .ensure_async(
                |(_, email, _)| repository.is_email_unique(email.clone()),
                errors::EMAIL_NOT_UNIQUE,
            )
            .and_then_async(|(full_name, email, password)| {
                repository
                    .next_id()
                    .map_outcome(move |id| User::create(id, full_name, email, password))
            })
            .and_then_async(|user| {
                let id = user.id();
                repository.add(user).map_outcome(move |()| id)
            });

        #[cfg(feature = "tracing")]
        let flow = flow.traced("register_user");

        flow.await
    }
}
