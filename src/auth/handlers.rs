//! Login and Registration Handlers
//!
//! `POST /api/auth/login` and `POST /api/auth/register`. Both receive
//! form-encoded fields and return the authenticated display name plus a
//! signed session token; the client persists the name under its `uname`
//! key (see [`crate::auth::identity`]) and presents the token on
//! privileged requests.

use axum::extract::State;
use axum::response::Json;
use axum::Form;
use serde::{Deserialize, Serialize};

use crate::auth::session::create_token;
use crate::error::AppError;
use crate::server::state::AppState;

/// Login form fields. Missing fields deserialize as empty strings and are
/// rejected by validation, matching how an empty form submission behaves.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form fields.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful auth response: the display name (for the client's identity
/// holder) and the session token (for the Authorization header).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub name: String,
    pub token: String,
}

/// Login handler.
///
/// Verifies the email/password pair and returns the identity claim with a
/// fresh session token. Credential failures surface as 401 with the
/// specific failure message; infrastructure failures as a generic 500.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<AuthResponse>, AppError> {
    let claim = state.auth.authenticate(&form.email, &form.password).await?;

    let token = create_token(&claim).map_err(|e| {
        tracing::error!("failed to create session token: {:?}", e);
        AppError::internal("failed to create session token")
    })?;

    Ok(Json(AuthResponse {
        name: claim.name,
        token,
    }))
}

/// Registration handler.
///
/// Creates the user and logs them straight in: the response carries a
/// session token just like a successful login.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Json<AuthResponse>, AppError> {
    let claim = state
        .auth
        .register(&form.name, &form.email, &form.password)
        .await?;

    let token = create_token(&claim).map_err(|e| {
        tracing::error!("failed to create session token: {:?}", e);
        AppError::internal("failed to create session token")
    })?;

    Ok(Json(AuthResponse {
        name: claim.name,
        token,
    }))
}
