//! Session Tokens
//!
//! Identity is carried client-side: on login the server mints a signed,
//! expiring JWT holding the identity claim, and every privileged request
//! presents it back. No session state is stored server-side.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::service::IdentityClaim;

/// Token lifetime: 30 days.
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Display name of the authenticated user.
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
    /// Issued at time (Unix timestamp).
    pub iat: u64,
}

/// Get the signing secret from the environment.
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET")
        .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string())
}

/// Mint a signed session token for an identity claim.
pub fn create_token(claim: &IdentityClaim) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: claim.name.clone(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let secret = jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify a session token and recover the identity claim it carries.
///
/// Fails on tampered signatures and expired tokens.
pub fn verify_token(token: &str) -> Result<IdentityClaim, jsonwebtoken::errors::Error> {
    let secret = jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(IdentityClaim {
        name: token_data.claims.sub,
    })
}
