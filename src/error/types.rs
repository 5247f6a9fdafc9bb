//! Error type definitions and their HTTP status mapping.

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Credential failures during login.
///
/// The two variants are deliberately distinct: the original behavior tells
/// the caller whether the email was unknown or the password wrong. This is
/// a minor user-enumeration weakness, kept for parity and documented here
/// rather than silently collapsed into one message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No user record matches the supplied email.
    #[error("No user found with this email")]
    UnknownUser,

    /// The supplied password does not match the stored hash.
    #[error("Invalid password")]
    InvalidCredentials,
}

/// Application-wide error type.
///
/// Every fallible operation in the auth and link-management core returns
/// this type. Each variant maps to an HTTP status via [`AppError::status_code`]
/// and renders as `{"error": .., "status": ..}` JSON (see `conversion`).
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed required field(s). The message names them.
    #[error("{message}")]
    Validation {
        /// User-facing message, e.g. "Name and URL are required".
        message: String,
    },

    /// Login failed: unknown email or wrong password.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A privileged operation was attempted without an authenticated
    /// identity. The message doubles as the management-view gate text.
    #[error("You must be logged in to access this page.")]
    AuthRequired,

    /// The caller is authenticated but does not own the targeted link.
    #[error("You can only modify your own links")]
    Forbidden,

    /// No link matches the supplied id.
    #[error("Link not found")]
    NotFound,

    /// Unrecognized verb on the link action endpoint.
    #[error("Invalid method")]
    MethodNotAllowed,

    /// Registration conflict: the email is already taken.
    #[error("Email already registered")]
    Conflict,

    /// The persistence layer failed. Logged, surfaced generically.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Unexpected internal failure (hashing, token minting). Logged,
    /// surfaced generically.
    #[error("{message}")]
    Internal {
        /// Operator-facing description; never sent to the client.
        message: String,
    },
}

impl AppError {
    /// Build a validation error naming the missing fields, in form order.
    ///
    /// One field yields "Name is required"; several yield
    /// "ID, Name, and URL are required".
    pub fn missing_fields(fields: &[&str]) -> Self {
        let names: Vec<&str> = fields.iter().map(|&f| display_name(f)).collect();
        let list = match names.len() {
            0 => String::new(),
            1 => names[0].to_string(),
            2 => format!("{} and {}", names[0], names[1]),
            _ => {
                let head = names[..names.len() - 1].join(", ");
                format!("{}, and {}", head, names[names.len() - 1])
            }
        };
        let verb = if names.len() == 1 { "is" } else { "are" };
        Self::Validation {
            message: format!("{} {} required", list, verb),
        }
    }

    /// Build a validation error with an explicit message, for malformed
    /// (rather than missing) input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Build an internal error. The message is logged, not shown to users.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Auth(_) | Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for infrastructure failures whose details must not reach the
    /// client.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Internal { .. })
    }
}

/// Form field name as shown in user-facing validation messages.
fn display_name(field: &str) -> &str {
    match field {
        "email" => "Email",
        "password" => "Password",
        "name" => "Name",
        "url" => "URL",
        "id" => "ID",
        other => other,
    }
}
