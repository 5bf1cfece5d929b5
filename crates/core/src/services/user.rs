//! User service.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::{access_token, user, user::Role},
    repositories::{AccessTokenRepository, UserRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    token_repo: AccessTokenRepository,
    id_gen: IdGenerator,
}

/// Input for registering a new user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub username: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub confirm_password: String,

    /// Defaults to `employee` when omitted.
    pub role: Option<Role>,
}

/// Input for logging in.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Input for changing the account password.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordInput {
    #[validate(length(min = 1))]
    pub current_password: String,

    #[validate(length(min = 8, max = 128))]
    pub new_password: String,

    pub confirm_password: String,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub fn new(user_repo: UserRepository, token_repo: AccessTokenRepository) -> Self {
        Self {
            user_repo,
            token_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Register a new user. The profile is created separately, once.
    pub async fn register(&self, input: RegisterInput) -> AppResult<user::Model> {
        input.validate()?;

        if input.password != input.confirm_password {
            return Err(AppError::BadRequest("Passwords do not match".to_string()));
        }

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        if self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("Username already taken".to_string()));
        }

        let password_hash = hash_password(&input.password)?;

        let user_model = user::ActiveModel {
            id: Set(self.id_gen.generate()),
            email: Set(input.email),
            username: Set(input.username),
            password_hash: Set(password_hash),
            role: Set(input.role.unwrap_or(Role::Employee)),
            ..Default::default()
        };

        self.user_repo.create(user_model).await
    }

    /// Authenticate by email and password, issuing an access token.
    pub async fn login(&self, input: LoginInput) -> AppResult<(user::Model, String)> {
        input.validate()?;

        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !user.is_active {
            return Err(AppError::Unauthorized);
        }

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AppError::Unauthorized);
        }

        let token = self.issue_token(&user.id).await?;
        Ok((user, token))
    }

    /// Resolve a bearer token to its user.
    pub async fn authenticate_by_token(&self, token: &str) -> AppResult<user::Model> {
        let row = self
            .token_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let user = self
            .user_repo
            .find_by_id(&row.user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !user.is_active {
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }

    /// Exchange a valid token for a fresh one, revoking the old.
    pub async fn refresh(&self, token: &str) -> AppResult<String> {
        let row = self
            .token_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        self.token_repo.delete_by_token(token).await?;
        self.issue_token(&row.user_id).await
    }

    /// Revoke a single token.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.token_repo.delete_by_token(token).await
    }

    /// Revoke every token of a user.
    pub async fn logout_all(&self, user_id: &str) -> AppResult<u64> {
        self.token_repo.delete_by_user(user_id).await
    }

    /// Change the account password after verifying the current one.
    ///
    /// Every existing session is revoked; the returned token is the only
    /// one left standing.
    pub async fn change_password(
        &self,
        user_id: &str,
        input: ChangePasswordInput,
    ) -> AppResult<String> {
        input.validate()?;

        if input.new_password != input.confirm_password {
            return Err(AppError::BadRequest("Passwords do not match".to_string()));
        }

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify_password(&input.current_password, &user.password_hash)? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        let mut active: user::ActiveModel = user.into();
        active.password_hash = Set(hash_password(&input.new_password)?);
        active.updated_at = Set(Some(chrono::Utc::now().into()));
        self.user_repo.update(active).await?;

        self.token_repo.delete_by_user(user_id).await?;
        self.issue_token(user_id).await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: &str) -> AppResult<user::Model> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users (paginated).
    pub async fn list(&self, limit: u64, until_id: Option<&str>) -> AppResult<Vec<user::Model>> {
        self.user_repo.find_all(limit, until_id).await
    }

    /// Delete a user. Tokens, profile and owned content cascade.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.get(id).await?;
        self.user_repo.delete(id).await
    }

    async fn issue_token(&self, user_id: &str) -> AppResult<String> {
        let token = self.id_gen.generate_token();
        let model = access_token::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(user_id.to_string()),
            token: Set(token.clone()),
            ..Default::default()
        };
        self.token_repo.create(model).await?;
        Ok(token)
    }
}

/// Hash a password with Argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_user(id: &str, email: &str, hash: &str, is_active: bool) -> user::Model {
        user::Model {
            id: id.to_string(),
            email: email.to_string(),
            username: "alice".to_string(),
            password_hash: hash.to_string(),
            role: Role::Employee,
            is_active,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn service(dbs: [Arc<sea_orm::DatabaseConnection>; 2]) -> UserService {
        let [d1, d2] = dbs;
        UserService::new(UserRepository::new(d1), AccessTokenRepository::new(d2))
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_mismatched_passwords() {
        let service = service([
            Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
            Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
        ]);

        let result = service
            .register(RegisterInput {
                email: "alice@example.com".to_string(),
                username: "alice".to_string(),
                password: "password123".to_string(),
                confirm_password: "password456".to_string(),
                role: Some(Role::Employee),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_register_email_taken() {
        let existing = create_test_user("u1", "alice@example.com", "hash", true);

        let service = service([
            Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres)
                    .append_query_results([[existing]])
                    .into_connection(),
            ),
            Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
        ]);

        let result = service
            .register(RegisterInput {
                email: "alice@example.com".to_string(),
                username: "alice2".to_string(),
                password: "password123".to_string(),
                confirm_password: "password123".to_string(),
                role: Some(Role::Employee),
            })
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("Email")),
            _ => panic!("Expected BadRequest error"),
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hash = hash_password("password123").unwrap();
        let user = create_test_user("u1", "alice@example.com", &hash, true);

        let service = service([
            Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres)
                    .append_query_results([[user]])
                    .into_connection(),
            ),
            Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
        ]);

        let result = service
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_login_inactive_account() {
        let hash = hash_password("password123").unwrap();
        let user = create_test_user("u1", "alice@example.com", &hash, false);

        let service = service([
            Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres)
                    .append_query_results([[user]])
                    .into_connection(),
            ),
            Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
        ]);

        let result = service
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_authenticate_by_token_unknown() {
        let service = service([
            Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
            Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres)
                    .append_query_results([Vec::<access_token::Model>::new()])
                    .into_connection(),
            ),
        ]);

        let result = service.authenticate_by_token("missing").await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
