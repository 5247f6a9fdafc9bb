//! Authentication Core
//!
//! This module implements the security-relevant heart of the application:
//!
//! - [`password`] - bcrypt hashing and constant-time verification
//! - [`service`] - credential verification against the user store,
//!   producing an [`IdentityClaim`], plus registration
//! - [`session`] - signed, expiring session tokens carrying the claim
//! - [`identity`] - the client-session identity holder and its durable
//!   storage key
//! - [`handlers`] - the login and register HTTP endpoints
//!
//! # Flow
//!
//! A caller submits credentials; the service verifies them and returns an
//! identity claim; the handler mints a signed token from the claim; every
//! later privileged request presents the token, which the middleware
//! verifies back into a claim. The claim's display name is the
//! authorization key for link ownership.

pub mod handlers;
pub mod identity;
pub mod password;
pub mod service;
pub mod session;

pub use handlers::{login, register};
pub use identity::{IdentityHolder, IdentityStorage, MemoryStorage, SessionState};
pub use service::{AuthService, IdentityClaim};
