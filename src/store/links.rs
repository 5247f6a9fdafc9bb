//! Link records and link-store operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::StoreError;

/// A named URL bookmark owned by exactly one user.
///
/// The `owner` field holds the owning user's display name. Ownership is
/// best-effort: there is no foreign key back to the users collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    /// Unique link ID.
    pub id: Uuid,
    /// Display label, matched by the landing-page search.
    pub name: String,
    /// Target URL.
    pub url: String,
    /// Display name of the owning user.
    pub owner: String,
    /// Created at timestamp.
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Link-store operations used by the link management service.
///
/// Listing operations return records in insertion order; the search filter
/// and the management view both rely on that ordering.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// All links, regardless of owner.
    async fn find_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Links whose owner equals `owner` exactly.
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError>;

    /// A single link by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, StoreError>;

    /// Insert a new link, assigning its id and timestamps.
    async fn insert(&self, name: &str, url: &str, owner: &str) -> Result<Link, StoreError>;

    /// Replace the name/url/owner fields of the link with this id.
    /// Returns `false` if no record matched.
    async fn update(
        &self,
        id: Uuid,
        name: &str,
        url: &str,
        owner: &str,
    ) -> Result<bool, StoreError>;

    /// Delete the link with this id. Returns `false` if no record matched.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Postgres-backed link store.
pub struct PgLinkStore {
    pool: PgPool,
}

impl PgLinkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn find_all(&self) -> Result<Vec<Link>, StoreError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, name, url, owner, created_at, updated_at
            FROM links
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, name, url, owner, created_at, updated_at
            FROM links
            WHERE owner = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, name, url, owner, created_at, updated_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn insert(&self, name: &str, url: &str, owner: &str) -> Result<Link, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (id, name, url, owner, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, url, owner, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(url)
        .bind(owner)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(link)
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        url: &str,
        owner: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET name = $1, url = $2, owner = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(name)
        .bind(url)
        .bind(owner)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
