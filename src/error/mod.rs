//! Application Error Types
//!
//! This module defines the error taxonomy used across the application and
//! its conversion into HTTP responses.
//!
//! # Error Categories
//!
//! - `Validation` - missing or malformed required fields (client-fixable)
//! - `Auth` - credential failures during login
//! - `AuthRequired` - a privileged operation attempted without an identity
//! - `Forbidden` - an authenticated caller touching a link they do not own
//! - `NotFound` - a link id that matches no record
//! - `MethodNotAllowed` - an unrecognized verb on the link action endpoint
//! - `Conflict` - registration with an already-registered email
//! - `Store` / `Internal` - infrastructure failures, logged server-side and
//!   surfaced to the client as a generic message

pub mod conversion;
pub mod types;

pub use types::{AppError, AuthError};
