//! Contact CRUD service.

use std::sync::Arc;
use validator::Validate;

use crate::domain::entities::{self, Contact, ContactPatch, ObjectId};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Service for reading and mutating contacts.
///
/// Field rules are checked here before every write. Name uniqueness is left to
/// the repository: the write is attempted and a conflict comes back as a
/// [`StoreError::UniqueViolation`](crate::domain::repositories::StoreError),
/// which `AppError` classifies.
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Lists all contacts in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// Looks a contact up by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn find(&self, id: &ObjectId) -> Result<Option<Contact>, AppError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates a contact from submitted fields merged onto empty defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every blank field.
    /// Returns [`AppError::UniquenessConflict`] if the name pair is taken.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create(&self, patch: ContactPatch) -> Result<Contact, AppError> {
        let fields = patch.into_fields();
        fields.validate()?;

        Ok(self.repository.create(fields).await?)
    }

    /// Merges `patch` onto a loaded contact and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every blank field.
    /// Returns [`AppError::UniquenessConflict`] if the new name pair is taken.
    /// Returns [`AppError::NotFound`] if the contact vanished since it was loaded.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update(&self, mut contact: Contact, patch: ContactPatch) -> Result<Contact, AppError> {
        contact.apply(patch);
        contact.fields().validate()?;
        contact.touch(entities::now());

        Ok(self.repository.save(&contact).await?)
    }

    /// Deletes a loaded contact and hands it back as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the contact vanished since it was loaded.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete(&self, contact: Contact) -> Result<Contact, AppError> {
        self.repository.remove(&contact.id).await?;
        Ok(contact)
    }

    /// Checks that the contact store answers.
    pub async fn health_check(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactFields;
    use crate::domain::repositories::{MockContactRepository, StoreError};
    use chrono::{TimeDelta, Utc};

    fn create_test_contact(first: &str, last: &str) -> Contact {
        let now = Utc::now() - TimeDelta::seconds(10);
        Contact::new(
            ObjectId::new(),
            first.to_string(),
            last.to_string(),
            now,
            now,
        )
    }

    fn patch(first: Option<&str>, last: Option<&str>) -> ContactPatch {
        ContactPatch {
            first_name: first.map(|v| Some(v.to_string())),
            last_name: last.map(|v| Some(v.to_string())),
        }
    }

    #[tokio::test]
    async fn test_create_success_trims_fields() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo
            .expect_create()
            .withf(|fields| fields == &ContactFields::new("Frank", "Zappa"))
            .times(1)
            .returning(|fields| Ok(create_test_contact(&fields.first_name, &fields.last_name)));

        let service = ContactService::new(Arc::new(mock_repo));

        let contact = service
            .create(patch(Some("  Frank "), Some("Zappa  ")))
            .await
            .unwrap();

        assert_eq!(contact.first_name, "Frank");
        assert_eq!(contact.last_name, "Zappa");
    }

    #[tokio::test]
    async fn test_create_blank_never_reaches_store() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo.expect_create().times(0);

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service.create(ContactPatch::default()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_error_info().details["fields"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_conflict_is_classified() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(StoreError::UniqueViolation {
                constraint: "contacts_first_name_last_name_key".to_string(),
            })
        });

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service
            .create(patch(Some("Create2"), Some("Create2")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UniquenessConflict { .. }));
    }

    #[tokio::test]
    async fn test_update_merges_and_advances_timestamp() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo
            .expect_save()
            .times(1)
            .returning(|contact| Ok(contact.clone()));

        let service = ContactService::new(Arc::new(mock_repo));
        let original = create_test_contact("Terry", "Bozzio");

        let updated = service
            .update(original.clone(), patch(Some("Tery"), None))
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.first_name, "Tery");
        assert_eq!(updated.last_name, "Bozzio");
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at > original.updated_at);
    }

    #[tokio::test]
    async fn test_update_null_field_is_rejected() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo.expect_save().times(0);

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service
            .update(
                create_test_contact("Neal", "Peart"),
                ContactPatch {
                    first_name: None,
                    last_name: Some(None),
                },
            )
            .await
            .unwrap_err();

        let info = err.to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["fields"][0]["field"], "lastName");
    }

    #[tokio::test]
    async fn test_update_vanished_contact_is_not_found() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(StoreError::Missing));

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service
            .update(create_test_contact("Tim", "Alexander"), ContactPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_returns_contact() {
        let mut mock_repo = MockContactRepository::new();
        let contact = create_test_contact("Dave", "Lombardo");
        let id = contact.id;

        mock_repo
            .expect_remove()
            .withf(move |removed| *removed == id)
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(mock_repo));

        let deleted = service.delete(contact.clone()).await.unwrap();

        assert_eq!(deleted, contact);
    }

    #[tokio::test]
    async fn test_list_backend_error_is_internal() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(StoreError::Backend("connection refused".to_string())));

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service.list().await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
