//! Link Management
//!
//! Authorized create/read/update/delete over the link store:
//!
//! - [`service`] - ownership-aware CRUD logic
//! - [`handlers`] - the form-encoded HTTP endpoints
//!
//! The public listing is available to anonymous callers for the
//! landing-page search; every mutation and the owner-filtered listing
//! require an authenticated identity, and mutations additionally require
//! that the caller owns the targeted link.

pub mod handlers;
pub mod service;

pub use service::LinkService;
