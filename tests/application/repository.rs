use outcome_rail::application::{InMemoryUserRepository, UserRepository};
use outcome_rail::domain::{user, Email, FullName, Password, User, UserId};

fn user(id: u64, email: &str) -> User {
    User::create(
        UserId::new(id).into_value(),
        FullName::create("Ada", "Lovelace").into_value(),
        Email::create(email).into_value(),
        Password::create("Secr3tPass").into_value(),
    )
}

#[tokio::test]
async fn added_users_can_be_loaded() {
    let repository = InMemoryUserRepository::new();
    assert!(repository.is_empty());

    repository.add(user(1, "ada@example.com")).await.into_value();

    let loaded = repository.get_by_id(UserId::new(1).into_value()).await;
    assert_eq!(loaded.into_value(), user(1, "ada@example.com"));
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let repository = InMemoryUserRepository::new();
    let loaded = repository.get_by_id(UserId::new(9).into_value()).await;
    assert_eq!(loaded.errors(), [user::errors::NOT_FOUND]);
}

#[tokio::test]
async fn duplicate_id_or_email_conflicts() {
    let repository = InMemoryUserRepository::new();
    repository.add(user(1, "ada@example.com")).await.into_value();

    assert_eq!(repository.add(user(1, "other@example.com")).await.errors(), [user::errors::CONFLICT]);
    assert_eq!(repository.add(user(2, "ada@example.com")).await.errors(), [user::errors::CONFLICT]);
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn email_uniqueness_reflects_stored_users() {
    let repository = InMemoryUserRepository::new();
    let email = Email::create("ada@example.com").into_value();
    assert!(repository.is_email_unique(email.clone()).await);

    repository.add(user(1, "ada@example.com")).await.into_value();
    assert!(!repository.is_email_unique(email).await);
}

#[tokio::test]
async fn update_requires_an_existing_user() {
    let repository = InMemoryUserRepository::new();
    assert_eq!(repository.update(user(1, "ada@example.com")).await.errors(), [user::errors::NOT_FOUND]);

    repository.add(user(1, "ada@example.com")).await.into_value();
    let renamed = user(1, "ada@example.com").update_name("Augusta", "King").into_value();
    assert!(repository.update(renamed.clone()).await.is_success());
    assert_eq!(repository.get_by_id(renamed.id()).await.into_value(), renamed);
}

#[tokio::test]
async fn update_rejects_an_email_held_by_another_user() {
    let repository = InMemoryUserRepository::new();
    repository.add(user(1, "ada@example.com")).await.into_value();
    repository.add(user(2, "grace@example.com")).await.into_value();

    let taken = user(2, "grace@example.com").update_email("ada@example.com").into_value();
    assert_eq!(repository.update(taken).await.errors(), [user::errors::EMAIL_NOT_UNIQUE]);
    assert_eq!(
        repository.get_by_id(UserId::new(2).into_value()).await.into_value().email().as_str(),
        "grace@example.com"
    );

    let own = user(2, "grace@example.com").update_name("Grace", "Hopper").into_value();
    assert!(repository.update(own).await.is_success());
}
