//! In-process contact store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use validator::Validate;

use crate::domain::entities::{self, Contact, ContactFields, ObjectId};
use crate::domain::repositories::{ContactRepository, StoreError};
use crate::domain::validation::violations;

/// Name of the unique index reported on conflicts, matching the PostgreSQL schema.
pub const CONTACT_NAME_INDEX: &str = "contacts_first_name_last_name_key";

/// Contact repository kept in memory.
///
/// All writes take a single lock, so the uniqueness check and the insert or
/// update it guards happen atomically. Data is lost when the process exits.
#[derive(Default)]
pub struct MemoryContactRepository {
    table: RwLock<ContactTable>,
}

#[derive(Default)]
struct ContactTable {
    rows: Vec<Contact>,
    names: HashMap<(String, String), ObjectId>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_key(first_name: &str, last_name: &str) -> (String, String) {
    (first_name.to_string(), last_name.to_string())
}

fn check_fields(fields: &ContactFields) -> Result<(), StoreError> {
    fields
        .validate()
        .map_err(|errors| StoreError::Validation(violations(&errors)))
}

fn unique_violation() -> StoreError {
    StoreError::UniqueViolation {
        constraint: CONTACT_NAME_INDEX.to_string(),
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Contact>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.id == *id).cloned())
    }

    async fn create(&self, fields: ContactFields) -> Result<Contact, StoreError> {
        check_fields(&fields)?;

        let mut table = self.table.write().await;
        let key = name_key(&fields.first_name, &fields.last_name);

        if table.names.contains_key(&key) {
            return Err(unique_violation());
        }

        let now = entities::now();
        let contact = Contact::new(
            ObjectId::new(),
            fields.first_name,
            fields.last_name,
            now,
            now,
        );

        table.names.insert(key, contact.id);
        table.rows.push(contact.clone());

        Ok(contact)
    }

    async fn save(&self, contact: &Contact) -> Result<Contact, StoreError> {
        check_fields(&contact.fields())?;

        let mut table = self.table.write().await;
        let pos = table
            .rows
            .iter()
            .position(|c| c.id == contact.id)
            .ok_or(StoreError::Missing)?;

        let key = name_key(&contact.first_name, &contact.last_name);
        if let Some(owner) = table.names.get(&key)
            && *owner != contact.id
        {
            return Err(unique_violation());
        }

        let stored = &table.rows[pos];
        let old_key = name_key(&stored.first_name, &stored.last_name);
        let updated = Contact {
            created_at: stored.created_at,
            ..contact.clone()
        };

        table.names.remove(&old_key);
        table.names.insert(key, contact.id);
        table.rows[pos] = updated.clone();

        Ok(updated)
    }

    async fn remove(&self, id: &ObjectId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let pos = table
            .rows
            .iter()
            .position(|c| c.id == *id)
            .ok_or(StoreError::Missing)?;

        let removed = table.rows.remove(pos);
        table
            .names
            .remove(&name_key(&removed.first_name, &removed.last_name));

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
