//! Comment reply service.

use crate::authz::{ensure_owner, ensure_owner_or_admin};
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::comment_reply,
    repositories::{CommentReplyRepository, CommentRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for creating a reply.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyInput {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,

    pub media_path: Option<String>,
}

/// Input for updating a reply.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReplyInput {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// Comment reply service for business logic.
#[derive(Clone)]
pub struct CommentReplyService {
    reply_repo: CommentReplyRepository,
    comment_repo: CommentRepository,
    id_gen: IdGenerator,
}

impl CommentReplyService {
    /// Create a new comment reply service.
    #[must_use]
    pub fn new(reply_repo: CommentReplyRepository, comment_repo: CommentRepository) -> Self {
        Self {
            reply_repo,
            comment_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Reply to a comment.
    pub async fn create(
        &self,
        comment_id: &str,
        owner_profile_id: &str,
        input: CreateReplyInput,
    ) -> AppResult<comment_reply::Model> {
        input.validate()?;

        if self.comment_repo.find_by_id(comment_id).await?.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        let model = comment_reply::ActiveModel {
            id: Set(self.id_gen.generate()),
            comment_id: Set(comment_id.to_string()),
            owner_id: Set(owner_profile_id.to_string()),
            text: Set(input.text),
            media_path: Set(input.media_path),
            ..Default::default()
        };

        self.reply_repo.create(model).await
    }

    /// Get a reply by ID.
    pub async fn get(&self, id: &str) -> AppResult<comment_reply::Model> {
        self.reply_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))
    }

    /// List replies on a comment (paginated).
    pub async fn list_by_comment(
        &self,
        comment_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<comment_reply::Model>> {
        self.reply_repo
            .find_by_comment(comment_id, limit, until_id)
            .await
    }

    /// Update a reply. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: UpdateReplyInput,
    ) -> AppResult<comment_reply::Model> {
        input.validate()?;

        let reply = self.get(id).await?;
        ensure_owner(&reply, acting_profile_id)?;

        let mut active: comment_reply::ActiveModel = reply.into();
        active.text = Set(input.text);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.reply_repo.update(active).await
    }

    /// Delete a reply. Owner or admin.
    pub async fn delete(&self, id: &str, acting_profile_id: &str, is_admin: bool) -> AppResult<()> {
        let reply = self.get(id).await?;
        ensure_owner_or_admin(&reply, acting_profile_id, is_admin)?;
        self.reply_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::comment;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_reply(id: &str, owner_id: &str) -> comment_reply::Model {
        comment_reply::Model {
            id: id.to_string(),
            comment_id: "c1".to_string(),
            owner_id: owner_id.to_string(),
            text: "agreed".to_string(),
            media_path: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_on_missing_comment() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<comment::Model>::new()])
                .into_connection(),
        );

        let service =
            CommentReplyService::new(CommentReplyRepository::new(db1), CommentRepository::new(db2));
        let result = service
            .create(
                "missing",
                "p1",
                CreateReplyInput {
                    text: "hi".to_string(),
                    media_path: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_rejected() {
        let reply = create_test_reply("r1", "p1");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[reply]])
                .into_connection(),
        );
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service =
            CommentReplyService::new(CommentReplyRepository::new(db1), CommentRepository::new(db2));
        let result = service.delete("r1", "p2", false).await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
