//! Comment service.

use crate::authz::{ensure_owner, ensure_owner_or_admin};
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::comment,
    repositories::{CommentRepository, PostRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for creating a comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// Input for updating a comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentInput {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// Comment service for business logic.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    post_repo: PostRepository,
    id_gen: IdGenerator,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub fn new(comment_repo: CommentRepository, post_repo: PostRepository) -> Self {
        Self {
            comment_repo,
            post_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Comment on a post.
    pub async fn create(
        &self,
        post_id: &str,
        owner_profile_id: &str,
        input: CreateCommentInput,
    ) -> AppResult<comment::Model> {
        input.validate()?;

        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::PostNotFound);
        }

        let model = comment::ActiveModel {
            id: Set(self.id_gen.generate()),
            post_id: Set(post_id.to_string()),
            owner_id: Set(owner_profile_id.to_string()),
            text: Set(input.text),
            ..Default::default()
        };

        self.comment_repo.create(model).await
    }

    /// Get a comment by ID.
    pub async fn get(&self, id: &str) -> AppResult<comment::Model> {
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// List comments on a post (paginated).
    pub async fn list_by_post(
        &self,
        post_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<comment::Model>> {
        self.comment_repo.find_by_post(post_id, limit, until_id).await
    }

    /// Count comments on a post.
    pub async fn count_for_post(&self, post_id: &str) -> AppResult<u64> {
        self.comment_repo.count_by_post(post_id).await
    }

    /// Update a comment. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: UpdateCommentInput,
    ) -> AppResult<comment::Model> {
        input.validate()?;

        let comment = self.get(id).await?;
        ensure_owner(&comment, acting_profile_id)?;

        let mut active: comment::ActiveModel = comment.into();
        active.text = Set(input.text);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.comment_repo.update(active).await
    }

    /// Delete a comment. Owner or admin.
    pub async fn delete(&self, id: &str, acting_profile_id: &str, is_admin: bool) -> AppResult<()> {
        let comment = self.get(id).await?;
        ensure_owner_or_admin(&comment, acting_profile_id, is_admin)?;
        self.comment_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::post;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_comment(id: &str, owner_id: &str) -> comment::Model {
        comment::Model {
            id: id.to_string(),
            post_id: "n1".to_string(),
            owner_id: owner_id.to_string(),
            text: "nice".to_string(),
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_on_missing_post() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<post::Model>::new()])
                .into_connection(),
        );

        let service = CommentService::new(CommentRepository::new(db1), PostRepository::new(db2));
        let result = service
            .create(
                "missing",
                "p1",
                CreateCommentInput {
                    text: "hi".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_update_by_non_owner_rejected() {
        let comment = create_test_comment("c1", "p1");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[comment]])
                .into_connection(),
        );
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = CommentService::new(CommentRepository::new(db1), PostRepository::new(db2));
        let result = service
            .update(
                "c1",
                "p2",
                UpdateCommentInput {
                    text: "edited".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
