//! Access token repository.

use std::sync::Arc;

use crate::entities::{access_token, AccessToken};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
};

/// Access token repository for database operations.
#[derive(Clone)]
pub struct AccessTokenRepository {
    db: Arc<DatabaseConnection>,
}

impl AccessTokenRepository {
    /// Create a new access token repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a token row by the opaque token string.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<access_token::Model>> {
        AccessToken::find()
            .filter(access_token::Column::Token.eq(token))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new access token.
    pub async fn create(
        &self,
        model: access_token::ActiveModel,
    ) -> AppResult<access_token::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a token row by the opaque token string.
    pub async fn delete_by_token(&self, token: &str) -> AppResult<()> {
        let row = self.find_by_token(token).await?;
        if let Some(t) = row {
            t.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// Delete all tokens belonging to a user.
    pub async fn delete_by_user(&self, user_id: &str) -> AppResult<u64> {
        let result = AccessToken::delete_many()
            .filter(access_token::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_token(id: &str, user_id: &str, token: &str) -> access_token::Model {
        access_token::Model {
            id: id.to_string(),
            user_id: user_id.to_string(),
            token: token.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_token_found() {
        let token = create_test_token("t1", "u1", "abc123");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[token.clone()]])
                .into_connection(),
        );

        let repo = AccessTokenRepository::new(db);
        let result = repo.find_by_token("abc123").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().user_id, "u1");
    }

    #[tokio::test]
    async fn test_find_by_token_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<access_token::Model>::new()])
                .into_connection(),
        );

        let repo = AccessTokenRepository::new(db);
        let result = repo.find_by_token("missing").await.unwrap();

        assert!(result.is_none());
    }
}
