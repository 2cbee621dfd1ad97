//! In-process user store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{self, NewUser, ObjectId, User};
use crate::domain::repositories::{StoreError, UserRepository};

/// Name of the unique index reported on conflicts, matching the PostgreSQL schema.
pub const USERNAME_INDEX: &str = "users_username_key";

/// User repository kept in memory, in creation order.
#[derive(Default)]
pub struct MemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut rows = self.rows.write().await;

        if rows.iter().any(|u| u.username == new_user.username) {
            return Err(StoreError::UniqueViolation {
                constraint: USERNAME_INDEX.to_string(),
            });
        }

        let now = entities::now();
        let user = User {
            id: ObjectId::new(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };

        rows.push(user.clone());
        Ok(user)
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut rows = self.rows.write().await;

        let Some(user) = rows.iter_mut().find(|u| u.username == username) else {
            return Ok(None);
        };

        user.password_hash = password_hash.to_string();
        user.updated_at = entities::now().max(user.updated_at + chrono::TimeDelta::microseconds(1));

        Ok(Some(user.clone()))
    }

    async fn delete(&self, username: &str) -> Result<Option<User>, StoreError> {
        let mut rows = self.rows.write().await;

        let removed = rows
            .iter()
            .position(|u| u.username == username)
            .map(|pos| rows.remove(pos));

        Ok(removed)
    }
}
