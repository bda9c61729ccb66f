//! Reference workflows over the [`domain`](crate::domain) types.
//!
//! Each handler parses and validates its raw command with the synchronous
//! combinators and reaches the [`UserRepository`] only through the async
//! ones, so invalid input never costs a storage call. With the `tracing`
//! feature every failed workflow is recorded as a `WARN` event carrying the
//! workflow name and the error codes.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use outcome_rail::application::*;
//!
//! # tokio_test_block_on(async {
//! let repository = Arc::new(InMemoryUserRepository::new());
//! let register = RegisterUserHandler::new(Arc::clone(&repository));
//!
//! let id = register
//!     .handle(RegisterUser {
//!         first_name: "Ada".into(),
//!         last_name: "Lovelace".into(),
//!         email: "ada@example.com".into(),
//!         password: "Secr3tPass".into(),
//!     })
//!     .await
//!     .into_value();
//!
//! let user = GetUserHandler::new(repository)
//!     .handle(GetUser { user_id: id.to_string() })
//!     .await;
//! assert_eq!(user.into_value().email, "ada@example.com");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod change_email;
mod get_user;
mod in_memory;
mod register_user;
mod rename_user;
mod repository;

pub use change_email::{ChangeUserEmail, ChangeUserEmailHandler};
pub use get_user::{GetUser, GetUserHandler, UserResponse};
pub use in_memory::InMemoryUserRepository;
pub use register_user::{RegisterUser, RegisterUserHandler};
pub use rename_user::{RenameUser, RenameUserHandler};
pub use repository::UserRepository;
