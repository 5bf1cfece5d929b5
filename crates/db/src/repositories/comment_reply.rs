//! Comment reply repository.

use std::sync::Arc;

use crate::entities::{comment_reply, CommentReply};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Comment reply repository for database operations.
#[derive(Clone)]
pub struct CommentReplyRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentReplyRepository {
    /// Create a new comment reply repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a reply by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<comment_reply::Model>> {
        CommentReply::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new reply.
    pub async fn create(&self, model: comment_reply::ActiveModel) -> AppResult<comment_reply::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a reply.
    pub async fn update(&self, model: comment_reply::ActiveModel) -> AppResult<comment_reply::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a reply.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let reply = self.find_by_id(id).await?;
        if let Some(r) = reply {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List replies on a comment (paginated).
    pub async fn find_by_comment(
        &self,
        comment_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<comment_reply::Model>> {
        let mut query = CommentReply::find()
            .filter(comment_reply::Column::CommentId.eq(comment_id))
            .order_by_desc(comment_reply::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(comment_reply::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_reply(id: &str, comment_id: &str, owner_id: &str) -> comment_reply::Model {
        comment_reply::Model {
            id: id.to_string(),
            comment_id: comment_id.to_string(),
            owner_id: owner_id.to_string(),
            text: "agreed".to_string(),
            media_path: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_comment() {
        let r1 = create_test_reply("r2", "c1", "p1");
        let r2 = create_test_reply("r1", "c1", "p2");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[r1, r2]])
                .into_connection(),
        );

        let repo = CommentReplyRepository::new(db);
        let result = repo.find_by_comment("c1", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
    }
}
