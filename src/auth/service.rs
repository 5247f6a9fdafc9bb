//! Credential verification and registration.

use std::sync::Arc;

use crate::auth::password::{hash_password, verify_password, DEFAULT_COST};
use crate::error::{AppError, AuthError};
use crate::store::UserStore;

/// The authenticated user's display name.
///
/// This is the only identity the rest of the system sees: link ownership
/// is keyed by it, and the session token carries it. It is produced solely
/// by successful authentication or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaim {
    /// Display name of the authenticated user.
    pub name: String,
}

/// Verifies credentials against the credential store and registers new
/// users. Stateless: no session table is written anywhere.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    cost: u32,
}

impl AuthService {
    /// Build a service hashing with the bcrypt default cost.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self::with_cost(users, DEFAULT_COST)
    }

    /// Build a service with an explicit bcrypt cost. Tests use a low cost
    /// to keep the suite fast.
    pub fn with_cost(users: Arc<dyn UserStore>, cost: u32) -> Self {
        Self { users, cost }
    }

    /// Verify an email/password pair.
    ///
    /// Looks the user up by exact email match, then verifies the password
    /// against the stored bcrypt hash. Unknown emails and wrong passwords
    /// are reported as distinct errors, matching the observed behavior of
    /// the system this one replaces (see the note on [`AuthError`]).
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityClaim, AppError> {
        let mut missing = Vec::new();
        if email.is_empty() {
            missing.push("email");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        let valid = verify_password(password, &user.password_hash).map_err(|e| {
            tracing::error!("password verification failed: {:?}", e);
            AppError::internal("password verification failed")
        })?;

        if !valid {
            tracing::warn!("invalid password for {}", email);
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("user logged in: {}", user.name);
        Ok(IdentityClaim { name: user.name })
    }

    /// Register a new user and return their identity claim.
    ///
    /// Validates required fields, a minimal email shape, and a minimum
    /// password length; refuses emails that are already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<IdentityClaim, AppError> {
        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push("name");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }

        if !email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }
        if password.len() < 8 {
            return Err(AppError::validation(
                "Password must be at least 8 characters",
            ));
        }

        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("registration with existing email: {}", email);
            return Err(AppError::Conflict);
        }

        let password_hash = hash_password(password, self.cost).map_err(|e| {
            tracing::error!("failed to hash password: {:?}", e);
            AppError::internal("failed to hash password")
        })?;

        let user = self.users.insert(email, name, &password_hash).await?;

        tracing::info!("user registered: {} ({})", user.name, user.email);
        Ok(IdentityClaim { name: user.name })
    }
}
