//! Ownership-aware link CRUD.

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::service::IdentityClaim;
use crate::error::AppError;
use crate::store::{Link, LinkStore};

/// Authorizes and performs link operations, scoped to the caller's
/// identity.
///
/// Taking `&IdentityClaim` on every privileged operation makes the
/// authorization requirement part of the signature: there is no way to
/// call `create`, `update` or `delete` without having authenticated
/// first. The owner recorded on a link always comes from the claim, never
/// from client-supplied data.
#[derive(Clone)]
pub struct LinkService {
    links: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(links: Arc<dyn LinkStore>) -> Self {
        Self { links }
    }

    /// All links regardless of owner, in store order. No authorization
    /// check: this feeds the anonymous landing-page search.
    pub async fn list_public(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.find_all().await?)
    }

    /// Only the links owned by the calling identity, in store order.
    pub async fn list_owned(&self, claim: &IdentityClaim) -> Result<Vec<Link>, AppError> {
        Ok(self.links.find_by_owner(&claim.name).await?)
    }

    /// Insert a new link owned by the calling identity.
    pub async fn create(
        &self,
        claim: &IdentityClaim,
        name: &str,
        url: &str,
    ) -> Result<Link, AppError> {
        require_fields(&[("name", name), ("url", url)])?;

        let link = self.links.insert(name, url, &claim.name).await?;
        tracing::info!("link added: {} by {}", link.name, claim.name);
        Ok(link)
    }

    /// Replace the name and url of a link the caller owns.
    ///
    /// The link must exist and its current owner must equal the caller's
    /// display name; the owner field stays the caller's name.
    pub async fn update(
        &self,
        claim: &IdentityClaim,
        id: Uuid,
        name: &str,
        url: &str,
    ) -> Result<(), AppError> {
        require_fields(&[("name", name), ("url", url)])?;
        self.load_owned(claim, id).await?;

        let updated = self.links.update(id, name, url, &claim.name).await?;
        if !updated {
            // Deleted between the ownership check and the write.
            return Err(AppError::NotFound);
        }
        tracing::info!("link updated: {} by {}", id, claim.name);
        Ok(())
    }

    /// Delete a link the caller owns.
    pub async fn delete(&self, claim: &IdentityClaim, id: Uuid) -> Result<(), AppError> {
        self.load_owned(claim, id).await?;

        let deleted = self.links.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound);
        }
        tracing::info!("link deleted: {} by {}", id, claim.name);
        Ok(())
    }

    /// Load a link and refuse unless the caller owns it.
    async fn load_owned(&self, claim: &IdentityClaim, id: Uuid) -> Result<Link, AppError> {
        let link = self.links.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if link.owner != claim.name {
            tracing::warn!(
                "ownership violation: {} attempted to modify link {} owned by {}",
                claim.name,
                id,
                link.owner
            );
            return Err(AppError::Forbidden);
        }
        Ok(link)
    }
}

/// Reject the operation unless every named field is non-empty.
fn require_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_fields(&missing))
    }
}
