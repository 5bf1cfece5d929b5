//! Notification service.
//!
//! Notifications exist for one reason: a profile's followers are told when
//! it publishes a post. Fan-out happens inline at post creation, batched so
//! a large follower list does not turn into thousands of inserts.

use linkup_common::{AppResult, IdGenerator};
use linkup_db::{
    entities::notification,
    repositories::{FollowRepository, NotificationRepository},
};
use sea_orm::Set;

/// Rows per insert statement during fan-out.
const FAN_OUT_CHUNK: usize = 500;

/// Notification service for business logic.
#[derive(Clone)]
pub struct NotificationService {
    notification_repo: NotificationRepository,
    follow_repo: FollowRepository,
    id_gen: IdGenerator,
}

impl NotificationService {
    /// Create a new notification service.
    #[must_use]
    pub fn new(notification_repo: NotificationRepository, follow_repo: FollowRepository) -> Self {
        Self {
            notification_repo,
            follow_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Notify every follower of `owner_profile_id` that a post was created.
    ///
    /// Returns the number of notifications written.
    pub async fn fan_out_post(
        &self,
        post_id: &str,
        owner_profile_id: &str,
        owner_username: &str,
    ) -> AppResult<usize> {
        let followers = self.follow_repo.find_all_followers(owner_profile_id).await?;
        if followers.is_empty() {
            return Ok(0);
        }

        let message = format!("{owner_username} created a new post.");
        let mut written = 0;

        for chunk in followers.chunks(FAN_OUT_CHUNK) {
            let models: Vec<notification::ActiveModel> = chunk
                .iter()
                .map(|edge| notification::ActiveModel {
                    id: Set(self.id_gen.generate()),
                    recipient_id: Set(edge.follower_id.clone()),
                    message: Set(message.clone()),
                    post_id: Set(post_id.to_string()),
                    ..Default::default()
                })
                .collect();

            self.notification_repo.create_many(models).await?;
            written += chunk.len();
        }

        tracing::debug!(post_id = %post_id, count = written, "Fanned out post notifications");
        Ok(written)
    }

    /// List notifications for a recipient (paginated).
    pub async fn list(
        &self,
        recipient_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<notification::Model>> {
        self.notification_repo
            .find_by_recipient(recipient_id, limit, until_id)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::follow;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_follow(id: &str, follower_id: &str, followee_id: &str) -> follow::Model {
        follow::Model {
            id: id.to_string(),
            follower_id: follower_id.to_string(),
            followee_id: followee_id.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_fan_out_no_followers() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );

        let service =
            NotificationService::new(NotificationRepository::new(db1), FollowRepository::new(db2));
        let written = service.fan_out_post("n1", "p1", "alice").await.unwrap();

        assert_eq!(written, 0);
    }

    #[tokio::test]
    async fn test_fan_out_writes_one_row_per_follower() {
        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                }])
                .into_connection(),
        );
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    create_test_follow("f1", "p2", "p1"),
                    create_test_follow("f2", "p3", "p1"),
                ]])
                .into_connection(),
        );

        let service =
            NotificationService::new(NotificationRepository::new(db1), FollowRepository::new(db2));
        let written = service.fan_out_post("n1", "p1", "alice").await.unwrap();

        assert_eq!(written, 2);
    }
}
