//! Application State
//!
//! [`AppState`] is the router's state: the auth service and the link
//! management service, each holding its store behind a trait object.
//! Cloning is cheap (everything is behind `Arc`), and handlers extract it
//! with `State<AppState>`.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::service::AuthService;
use crate::links::service::LinkService;
use crate::store::{LinkStore, PgLinkStore, PgUserStore, UserStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Credential verification and registration.
    pub auth: AuthService,
    /// Ownership-aware link CRUD.
    pub links: LinkService,
}

impl AppState {
    /// Build state from explicit services. Tests use this with in-memory
    /// stores and a low bcrypt cost.
    pub fn new(auth: AuthService, links: LinkService) -> Self {
        Self { auth, links }
    }

    /// Build state from arbitrary store implementations, with production
    /// hashing cost.
    pub fn with_stores(users: Arc<dyn UserStore>, links: Arc<dyn LinkStore>) -> Self {
        Self {
            auth: AuthService::new(users),
            links: LinkService::new(links),
        }
    }

    /// Build state backed by a Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::with_stores(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgLinkStore::new(pool)),
        )
    }
}
