//! Linkbox - Main Library
//!
//! Linkbox is a small web application for storing and managing named URL
//! bookmarks ("links"). Registered users authenticate with email/password,
//! manage their own links through an authenticated API, and anyone can
//! search the full set of links from the public landing page.
//!
//! # Module Structure
//!
//! - **`auth`** - Authentication core: password hashing, credential
//!   verification, session tokens, and the client-session identity holder
//! - **`links`** - Link management: authorized create/read/update/delete
//!   over the link store
//! - **`search`** - The landing-page search filter
//! - **`store`** - Persistence seam: `UserStore`/`LinkStore` traits with
//!   Postgres and in-memory implementations
//! - **`error`** - The application error taxonomy and its HTTP mapping
//! - **`middleware`** - Request authentication (bearer-token extractor)
//! - **`routes`** - The axum router
//! - **`server`** - Configuration, state, and application assembly
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, AppError>`. Client-fixable errors
//! (validation, bad credentials, ownership violations) carry a user-facing
//! message; infrastructure failures are logged server-side and surfaced as
//! a generic message, never exposing internals.

/// Authentication core
pub mod auth;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Link management service and handlers
pub mod links;

/// Request authentication middleware
pub mod middleware;

/// HTTP route configuration
pub mod routes;

/// Landing-page search filter
pub mod search;

/// Server configuration, state, and assembly
pub mod server;

/// Persistence layer
pub mod store;
