//! Persistence Layer
//!
//! Two collections back the application: `users` (the credential store)
//! and `links`. Each is exposed through a trait so the services above it
//! never see a concrete driver:
//!
//! - [`UserStore`] / [`LinkStore`] - the operations the core needs
//! - [`PgUserStore`] / [`PgLinkStore`] - sqlx/Postgres implementations
//! - [`MemoryUserStore`] / [`MemoryLinkStore`] - in-memory implementations
//!   used by the test suite
//!
//! Records are keyed by a UUID assigned at insert time. The store performs
//! no multi-record transactions; each operation is a single atomic write.

pub mod links;
pub mod memory;
pub mod users;

pub use links::{Link, LinkStore, PgLinkStore};
pub use memory::{MemoryLinkStore, MemoryUserStore};
pub use users::{PgUserStore, User, UserStore};

use thiserror::Error;

/// A persistence operation failed.
///
/// Carries the driver error for operator logs; clients only ever see a
/// generic failure message.
#[derive(Debug, Error)]
#[error("store operation failed: {0}")]
pub struct StoreError(#[from] sqlx::Error);
