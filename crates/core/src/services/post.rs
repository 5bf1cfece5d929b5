//! Post service.

use crate::authz::ensure_owner_or_admin;
use crate::services::notification::NotificationService;
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{entities::post, repositories::PostRepository};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Longest share chain a new post may extend.
const MAX_SHARE_DEPTH: usize = 64;

/// Input for creating a post.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput {
    #[validate(length(min = 1, max = 500))]
    pub text_body: String,

    /// Post being shared, if any.
    pub parent_post_id: Option<String>,

    pub media_path: Option<String>,
}

/// Input for updating a post.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostInput {
    #[validate(length(min = 1, max = 500))]
    pub text_body: Option<String>,

    /// New parent post; re-checked for share cycles.
    pub parent_post_id: Option<String>,

    pub media_path: Option<String>,
}

/// Post service for business logic.
#[derive(Clone)]
pub struct PostService {
    post_repo: PostRepository,
    notification_service: NotificationService,
    id_gen: IdGenerator,
}

impl PostService {
    /// Create a new post service.
    #[must_use]
    pub fn new(post_repo: PostRepository, notification_service: NotificationService) -> Self {
        Self {
            post_repo,
            notification_service,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a post, fanning out notifications to the owner's followers.
    ///
    /// Fan-out failure is logged and does not fail the post.
    pub async fn create(
        &self,
        owner_profile_id: &str,
        owner_username: &str,
        input: CreatePostInput,
    ) -> AppResult<post::Model> {
        input.validate()?;

        if let Some(ref parent_id) = input.parent_post_id {
            let parent = self
                .post_repo
                .find_by_id(parent_id)
                .await?
                .ok_or(AppError::PostNotFound)?;

            let chain = self.post_repo.ancestor_ids(&parent.id, MAX_SHARE_DEPTH).await?;
            if chain.len() >= MAX_SHARE_DEPTH {
                return Err(AppError::BadRequest("Share chain too deep".to_string()));
            }
        }

        let model = post::ActiveModel {
            id: Set(self.id_gen.generate()),
            owner_id: Set(owner_profile_id.to_string()),
            parent_post_id: Set(input.parent_post_id),
            text_body: Set(input.text_body),
            media_path: Set(input.media_path),
            ..Default::default()
        };

        let post = self.post_repo.create(model).await?;

        if let Err(e) = self
            .notification_service
            .fan_out_post(&post.id, owner_profile_id, owner_username)
            .await
        {
            tracing::warn!(post_id = %post.id, error = %e, "Failed to fan out post notifications");
        }

        Ok(post)
    }

    /// Get a post by ID.
    pub async fn get(&self, id: &str) -> AppResult<post::Model> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::PostNotFound)
    }

    /// List posts across the instance (paginated).
    pub async fn list(&self, limit: u64, until_id: Option<&str>) -> AppResult<Vec<post::Model>> {
        self.post_repo.find_all(limit, until_id).await
    }

    /// List posts owned by a profile (paginated).
    pub async fn list_by_owner(
        &self,
        owner_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<post::Model>> {
        self.post_repo.find_by_owner(owner_id, limit, until_id).await
    }

    /// Update a post. Owner only; marks the post as edited.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: UpdatePostInput,
    ) -> AppResult<post::Model> {
        input.validate()?;

        let post = self.get(id).await?;
        ensure_owner_or_admin(&post, acting_profile_id, false)?;

        let mut active: post::ActiveModel = post.into();
        if let Some(parent_id) = input.parent_post_id {
            self.post_repo
                .find_by_id(&parent_id)
                .await?
                .ok_or(AppError::PostNotFound)?;

            // The new parent's chain must not contain this post
            let chain = self.post_repo.ancestor_ids(&parent_id, MAX_SHARE_DEPTH).await?;
            if chain.iter().any(|ancestor| ancestor == id) {
                return Err(AppError::BadRequest(
                    "Share chain would form a cycle".to_string(),
                ));
            }
            if chain.len() >= MAX_SHARE_DEPTH {
                return Err(AppError::BadRequest("Share chain too deep".to_string()));
            }
            active.parent_post_id = Set(Some(parent_id));
        }
        if let Some(text_body) = input.text_body {
            active.text_body = Set(text_body);
        }
        if let Some(media_path) = input.media_path {
            active.media_path = Set(Some(media_path));
        }
        active.edited = Set(true);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.post_repo.update(active).await
    }

    /// Delete a post. Owner or admin.
    pub async fn delete(&self, id: &str, acting_profile_id: &str, is_admin: bool) -> AppResult<()> {
        let post = self.get(id).await?;
        ensure_owner_or_admin(&post, acting_profile_id, is_admin)?;
        self.post_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::follow;
    use linkup_db::repositories::{FollowRepository, NotificationRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_post(id: &str, owner_id: &str) -> post::Model {
        post::Model {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            parent_post_id: None,
            text_body: "hello".to_string(),
            media_path: None,
            edited: false,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn service(post_db: Arc<sea_orm::DatabaseConnection>) -> PostService {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );
        let notification_service =
            NotificationService::new(NotificationRepository::new(db1), FollowRepository::new(db2));
        PostService::new(PostRepository::new(post_db), notification_service)
    }

    #[tokio::test]
    async fn test_create_with_missing_parent() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<post::Model>::new()])
                .into_connection(),
        );

        let service = service(db);
        let result = service
            .create(
                "p1",
                "alice",
                CreatePostInput {
                    text_body: "sharing this".to_string(),
                    parent_post_id: Some("missing".to_string()),
                    media_path: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_create_body_over_limit_rejected() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = service(db);
        let result = service
            .create(
                "p1",
                "alice",
                CreatePostInput {
                    text_body: "x".repeat(501),
                    parent_post_id: None,
                    media_path: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_reparent_onto_descendant_rejected() {
        // "n2" shares "n1"; reparenting "n1" onto "n2" would close the loop
        let root = create_test_post("n1", "p1");
        let child = post::Model {
            parent_post_id: Some("n1".to_string()),
            ..create_test_post("n2", "p2")
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    [root.clone()],
                    [child.clone()],
                    [child],
                    [root],
                ])
                .into_connection(),
        );

        let service = service(db);
        let result = service
            .update(
                "n1",
                "p1",
                UpdatePostInput {
                    text_body: None,
                    parent_post_id: Some("n2".to_string()),
                    media_path: None,
                },
            )
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("cycle")),
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_by_non_owner_rejected() {
        let post = create_test_post("n1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[post]])
                .into_connection(),
        );

        let service = service(db);
        let result = service
            .update(
                "n1",
                "p2",
                UpdatePostInput {
                    text_body: Some("edited".to_string()),
                    parent_post_id: None,
                    media_path: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_by_admin_allowed() {
        let post = create_test_post("n1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[post.clone()], [post]])
                .append_exec_results([sea_orm::MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let service = service(db);
        let result = service.delete("n1", "p2", true).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_rejected() {
        let post = create_test_post("n1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[post]])
                .into_connection(),
        );

        let service = service(db);
        let result = service.delete("n1", "p2", false).await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
