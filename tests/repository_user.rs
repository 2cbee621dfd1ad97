use contacts_api::domain::entities::NewUser;
use contacts_api::domain::repositories::{StoreError, UserRepository};
use contacts_api::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "00$11".to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.create(new_user("user")).await.unwrap();

    assert_eq!(
        repo.find_by_username("user").await.unwrap(),
        Some(user)
    );
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_username(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("admin")).await.unwrap();
    let err = repo.create(new_user("admin")).await.unwrap_err();

    assert_eq!(
        err,
        StoreError::UniqueViolation {
            constraint: "users_username_key".to_string()
        }
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_password_advances_timestamp(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let user = repo.create(new_user("user")).await.unwrap();

    let updated = repo
        .update_password("user", "22$33")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.password_hash, "22$33");
    assert!(updated.updated_at > user.updated_at);
    assert!(repo.update_password("nobody", "x$y").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let user = repo.create(new_user("user")).await.unwrap();

    assert_eq!(repo.delete("user").await.unwrap(), Some(user));
    assert!(repo.delete("user").await.unwrap().is_none());
    assert!(repo.list().await.unwrap().is_empty());
}
