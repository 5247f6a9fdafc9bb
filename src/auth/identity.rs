//! Client-Session Identity Holder
//!
//! Represents "who is currently using this client" without server-side
//! session state. A client session holds exactly one identity at a time:
//!
//! - `Anonymous -> Authenticated` on successful login; the identity is
//!   also written to durable client-side storage under the fixed key
//!   [`IDENTITY_STORAGE_KEY`] so it survives reloads.
//! - `Authenticated -> Anonymous` on explicit logout, which clears the
//!   storage entry.
//! - On startup the holder reads the storage entry and, if present,
//!   transitions straight to `Authenticated` without re-verifying
//!   credentials. This trust-on-read is a deliberate simplification; the
//!   server side independently requires a signed token (see
//!   [`crate::auth::session`]) for every privileged request.
//!
//! Storage is a trait so an embedding client can map it onto whatever
//! durable key-value store it has (a browser's local storage, a config
//! file); [`MemoryStorage`] ships for tests and ephemeral sessions.

use std::collections::HashMap;

use crate::auth::service::IdentityClaim;

/// Fixed key under which the identity is persisted client-side.
pub const IDENTITY_STORAGE_KEY: &str = "uname";

/// Durable client-side key-value storage.
pub trait IdentityStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// The two states a client session can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Nobody is logged in.
    Anonymous,
    /// A user is logged in.
    Authenticated(IdentityClaim),
}

/// Holder of the current client-session identity.
///
/// Any component may read the state synchronously; only the login and
/// logout flows mutate it. One logical identity per client, no
/// concurrent-session support.
pub struct IdentityHolder<S: IdentityStorage> {
    storage: S,
    state: SessionState,
}

impl<S: IdentityStorage> IdentityHolder<S> {
    /// Initialize from durable storage.
    ///
    /// A present `uname` entry yields `Authenticated` directly
    /// (trust-on-read); an absent one yields `Anonymous`.
    pub fn initialize(storage: S) -> Self {
        let state = match storage.get(IDENTITY_STORAGE_KEY) {
            Some(name) => SessionState::Authenticated(IdentityClaim { name }),
            None => SessionState::Anonymous,
        };
        Self { storage, state }
    }

    /// The current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current identity, if authenticated.
    pub fn identity(&self) -> Option<&IdentityClaim> {
        match &self.state {
            SessionState::Authenticated(claim) => Some(claim),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Record a successful login: persist the identity and transition to
    /// `Authenticated`.
    pub fn on_login(&mut self, claim: IdentityClaim) {
        self.storage.set(IDENTITY_STORAGE_KEY, &claim.name);
        self.state = SessionState::Authenticated(claim);
    }

    /// Explicit logout: clear the durable entry and transition to
    /// `Anonymous`.
    pub fn logout(&mut self) {
        self.storage.remove(IDENTITY_STORAGE_KEY);
        self.state = SessionState::Anonymous;
    }

    /// Release the underlying storage, e.g. to re-initialize a session.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// In-memory identity storage for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
