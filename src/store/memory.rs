//! In-memory store implementations.
//!
//! Used by the test suite in place of Postgres. Records live in a `Vec`
//! behind a mutex, so listing preserves insertion order exactly like the
//! `ORDER BY created_at` queries in the Postgres implementations.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::links::{Link, LinkStore};
use super::users::{User, UserStore};
use super::StoreError;

/// In-memory credential store.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

/// In-memory link store.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: Mutex<Vec<Link>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find_all(&self) -> Result<Vec<Link>, StoreError> {
        Ok(self.links.lock().unwrap().clone())
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().filter(|l| l.owner == owner).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, StoreError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, name: &str, url: &str, owner: &str) -> Result<Link, StoreError> {
        let now = Utc::now();
        let link = Link {
            id: Uuid::new_v4(),
            name: name.to_string(),
            url: url.to_string(),
            owner: owner.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.links.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        url: &str,
        owner: &str,
    ) -> Result<bool, StoreError> {
        let mut links = self.links.lock().unwrap();
        match links.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                link.name = name.to_string();
                link.url = url.to_string();
                link.owner = owner.to_string();
                link.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.id != id);
        Ok(links.len() < before)
    }
}
