//! PostgreSQL implementation of contact repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{self, Contact, ContactFields, ObjectId};
use crate::domain::repositories::{ContactRepository, StoreError};

/// PostgreSQL repository for contacts.
///
/// Name uniqueness is enforced by the `contacts_first_name_last_name_key`
/// unique index and blank names by check constraints; both surface as
/// [`StoreError`] variants through `From<sqlx::Error>`.
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: String,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for Contact {
    type Error = StoreError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let id: ObjectId = row
            .id
            .parse()
            .map_err(|e: entities::InvalidObjectId| StoreError::Backend(e.to_string()))?;

        Ok(Contact::new(
            id,
            row.first_name,
            row.last_name,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, created_at, updated_at
            FROM contacts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Contact>, StoreError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, created_at, updated_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn create(&self, fields: ContactFields) -> Result<Contact, StoreError> {
        let now = entities::now();

        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (id, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(ObjectId::new().to_string())
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(now)
        .fetch_one(self.pool.as_ref())
        .await?;

        Contact::try_from(row)
    }

    async fn save(&self, contact: &Contact) -> Result<Contact, StoreError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts SET
                first_name = $2,
                last_name  = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(contact.id.to_string())
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(contact.updated_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Contact::try_from).transpose()?.ok_or(StoreError::Missing)
    }

    async fn remove(&self, id: &ObjectId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.to_string())
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
