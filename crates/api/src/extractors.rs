//! Request extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use linkup_common::AppError;
use linkup_db::entities::{profile, user};

/// The authenticated user, placed in request extensions by the auth
/// middleware. Rejects with 401 when the request carried no valid token.
pub struct AuthUser(pub user::Model);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<user::Model>()
            .cloned()
            .map(AuthUser)
            .ok_or(AppError::Unauthorized)
    }
}

/// The authenticated user's profile, placed in request extensions by the
/// auth middleware alongside the user.
pub struct AuthProfile(pub profile::Model);

impl<S> FromRequestParts<S> for AuthProfile
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<profile::Model>()
            .cloned()
            .map(AuthProfile)
            .ok_or(AppError::Unauthorized)
    }
}

/// The raw bearer token presented with the request. Used by the token
/// lifecycle endpoints (refresh, logout) that act on the token itself.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|t| Self(t.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;

    fn test_user() -> user::Model {
        user::Model {
            id: "u1".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            role: user::Role::Employee,
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_auth_user_present() {
        let mut req = Request::builder().body(()).unwrap();
        req.extensions_mut().insert(test_user());
        let (mut parts, ()) = req.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;

        assert_eq!(result.unwrap().0.id, "u1");
    }

    #[tokio::test]
    async fn test_auth_user_missing() {
        let req = Request::builder().body(()).unwrap();
        let (mut parts, ()) = req.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_bearer_token() {
        let req = Request::builder()
            .header("Authorization", "Bearer abc123")
            .body(())
            .unwrap();
        let (mut parts, ()) = req.into_parts();

        let result = BearerToken::from_request_parts(&mut parts, &()).await;

        assert_eq!(result.unwrap().0, "abc123");
    }

    #[tokio::test]
    async fn test_bearer_token_malformed() {
        let req = Request::builder()
            .header("Authorization", "Basic abc123")
            .body(())
            .unwrap();
        let (mut parts, ()) = req.into_parts();

        let result = BearerToken::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
