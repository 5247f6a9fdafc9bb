//! Request Authentication
//!
//! Privileged routes take an [`AuthUser`] parameter. The extractor reads
//! the `Authorization: Bearer <token>` header, verifies the signed session
//! token, and yields the identity claim it carries. Requests without a
//! valid token are refused with 401 and the management-view gate message.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::service::IdentityClaim;
use crate::auth::session::verify_token;
use crate::error::AppError;

/// Axum extractor for the authenticated identity.
#[derive(Clone, Debug)]
pub struct AuthUser(pub IdentityClaim);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("missing Authorization header");
                AppError::AuthRequired
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("malformed Authorization header");
            AppError::AuthRequired
        })?;

        let claim = verify_token(token).map_err(|e| {
            tracing::warn!("invalid session token: {:?}", e);
            AppError::AuthRequired
        })?;

        Ok(AuthUser(claim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    use crate::auth::session::create_token;

    async fn extract(header: Option<String>) -> Result<AuthUser, AppError> {
        let mut builder = Request::builder().uri("http://localhost/api/links/mine");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn valid_bearer_token_yields_claim() {
        let claim = IdentityClaim {
            name: "Ann".to_string(),
        };
        let token = create_token(&claim).unwrap();

        let user = extract(Some(format!("Bearer {}", token))).await.unwrap();
        assert_eq!(user.0.name, "Ann");
    }

    #[tokio::test]
    async fn missing_header_is_refused() {
        let err = extract(None).await.unwrap_err();
        assert!(matches!(err, AppError::AuthRequired));
    }

    #[tokio::test]
    async fn non_bearer_header_is_refused() {
        let err = extract(Some("Basic abc123".to_string())).await.unwrap_err();
        assert!(matches!(err, AppError::AuthRequired));
    }

    #[tokio::test]
    async fn garbage_token_is_refused() {
        let err = extract(Some("Bearer not.a.token".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthRequired));
    }
}
