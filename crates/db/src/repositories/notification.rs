//! Notification repository.

use std::sync::Arc;

use crate::entities::{notification, Notification};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Notification repository for database operations.
#[derive(Clone)]
pub struct NotificationRepository {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepository {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a notification by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<notification::Model>> {
        Notification::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new notification.
    pub async fn create(&self, model: notification::ActiveModel) -> AppResult<notification::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a batch of notifications in one statement.
    pub async fn create_many(&self, models: Vec<notification::ActiveModel>) -> AppResult<()> {
        if models.is_empty() {
            return Ok(());
        }
        Notification::insert_many(models)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a notification.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let notification = self.find_by_id(id).await?;
        if let Some(n) = notification {
            n.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List notifications for a recipient (paginated).
    pub async fn find_by_recipient(
        &self,
        recipient_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<notification::Model>> {
        let mut query = Notification::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(notification::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(notification::Column::Id.lt(id));
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
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};

    fn create_test_notification(id: &str, recipient_id: &str) -> notification::Model {
        notification::Model {
            id: id.to_string(),
            recipient_id: recipient_id.to_string(),
            message: "alice created a new post.".to_string(),
            post_id: "n1".to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_recipient() {
        let n1 = create_test_notification("x2", "p1");
        let n2 = create_test_notification("x1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[n1, n2]])
                .into_connection(),
        );

        let repo = NotificationRepository::new(db);
        let result = repo.find_by_recipient("p1", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_create_many_empty_is_noop() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let repo = NotificationRepository::new(db);
        // No exec results registered, so a real insert would error out
        repo.create_many(Vec::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_many_batch() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                }])
                .into_connection(),
        );

        let repo = NotificationRepository::new(db);
        let models = vec![
            notification::ActiveModel {
                id: Set("x1".to_string()),
                recipient_id: Set("p2".to_string()),
                message: Set("alice created a new post.".to_string()),
                post_id: Set("n1".to_string()),
                created_at: Set(Utc::now().into()),
            },
            notification::ActiveModel {
                id: Set("x2".to_string()),
                recipient_id: Set("p3".to_string()),
                message: Set("alice created a new post.".to_string()),
                post_id: Set("n1".to_string()),
                created_at: Set(Utc::now().into()),
            },
        ];

        repo.create_many(models).await.unwrap();
    }
}
