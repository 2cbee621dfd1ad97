use contacts_api::domain::entities::{self, Contact, ContactFields, ObjectId};
use contacts_api::domain::repositories::{ContactRepository, StoreError};
use contacts_api::infrastructure::persistence::PgContactRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgContactRepository {
    PgContactRepository::new(Arc::new(pool))
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_contact(pool: PgPool) {
    let repo = repo(pool);

    let contact = repo
        .create(ContactFields::new("Stewart", "Copeland"))
        .await
        .unwrap();

    assert_eq!(contact.first_name, "Stewart");
    assert_eq!(contact.created_at, contact.updated_at);
    assert_eq!(
        repo.find_by_id(&contact.id).await.unwrap(),
        Some(contact)
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_duplicate_names(pool: PgPool) {
    let repo = repo(pool);

    repo.create(ContactFields::new("Frank", "Zappa")).await.unwrap();
    let err = repo
        .create(ContactFields::new("Frank", "Zappa"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::UniqueViolation {
            constraint: "contacts_first_name_last_name_key".to_string()
        }
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_blank_names_hit_check_constraint(pool: PgPool) {
    let repo = repo(pool);

    let err = repo.create(ContactFields::new("", "Zappa")).await.unwrap_err();

    match err {
        StoreError::Validation(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, "firstName");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_in_creation_order(pool: PgPool) {
    let repo = repo(pool);

    for (first, last) in [("Terry", "Bozzio"), ("Neal", "Peart"), ("Tim", "Alexander")] {
        repo.create(ContactFields::new(first, last)).await.unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.first_name)
        .collect();

    assert_eq!(names, vec!["Terry", "Neal", "Tim"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_updates_names_and_timestamp(pool: PgPool) {
    let repo = repo(pool);
    let mut contact = repo
        .create(ContactFields::new("Dave", "Lombardo"))
        .await
        .unwrap();
    let created_at = contact.created_at;

    contact.first_name = "David".to_string();
    contact.touch(entities::now());
    let saved = repo.save(&contact).await.unwrap();

    assert_eq!(saved.first_name, "David");
    assert_eq!(saved.created_at, created_at);
    assert!(saved.updated_at > created_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_into_taken_pair(pool: PgPool) {
    let repo = repo(pool);
    repo.create(ContactFields::new("Frank", "Zappa")).await.unwrap();
    let mut other = repo
        .create(ContactFields::new("Dweezil", "Zappa"))
        .await
        .unwrap();

    other.first_name = "Frank".to_string();
    let err = repo.save(&other).await.unwrap_err();

    assert!(matches!(err, StoreError::UniqueViolation { .. }));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_and_remove_missing(pool: PgPool) {
    let repo = repo(pool);
    let now = entities::now();
    let ghost = Contact::new(
        ObjectId::new(),
        "Ghost".to_string(),
        "Writer".to_string(),
        now,
        now,
    );

    assert_eq!(repo.save(&ghost).await.unwrap_err(), StoreError::Missing);
    assert_eq!(repo.remove(&ghost.id).await.unwrap_err(), StoreError::Missing);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_remove_contact(pool: PgPool) {
    let repo = repo(pool);
    let contact = repo
        .create(ContactFields::new("Neal", "Peart"))
        .await
        .unwrap();

    repo.remove(&contact.id).await.unwrap();

    assert!(repo.find_by_id(&contact.id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    assert!(repo(pool).ping().await.is_ok());
}
