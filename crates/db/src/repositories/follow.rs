//! Follow repository.

use std::sync::Arc;

use crate::entities::{follow, Follow};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Follow repository for database operations.
#[derive(Clone)]
pub struct FollowRepository {
    db: Arc<DatabaseConnection>,
}

impl FollowRepository {
    /// Create a new follow repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a follow edge by follower and followee.
    pub async fn find_by_pair(
        &self,
        follower_id: &str,
        followee_id: &str,
    ) -> AppResult<Option<follow::Model>> {
        Follow::find()
            .filter(follow::Column::FollowerId.eq(follower_id))
            .filter(follow::Column::FolloweeId.eq(followee_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Check if a profile is following another profile.
    pub async fn is_following(&self, follower_id: &str, followee_id: &str) -> AppResult<bool> {
        Ok(self.find_by_pair(follower_id, followee_id).await?.is_some())
    }

    /// Create a new follow edge.
    pub async fn create(&self, model: follow::ActiveModel) -> AppResult<follow::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a follow edge by pair. Returns whether an edge existed.
    pub async fn delete_by_pair(&self, follower_id: &str, followee_id: &str) -> AppResult<bool> {
        let follow = self.find_by_pair(follower_id, followee_id).await?;
        match follow {
            Some(f) => {
                f.delete(self.db.as_ref())
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get profiles a profile is following (paginated).
    pub async fn find_following(
        &self,
        profile_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<follow::Model>> {
        let mut query = Follow::find()
            .filter(follow::Column::FollowerId.eq(profile_id))
            .order_by_desc(follow::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(follow::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get profiles following a profile (paginated).
    pub async fn find_followers(
        &self,
        profile_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<follow::Model>> {
        let mut query = Follow::find()
            .filter(follow::Column::FolloweeId.eq(profile_id))
            .order_by_desc(follow::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(follow::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get every follower edge of a profile, for notification fan-out.
    pub async fn find_all_followers(&self, profile_id: &str) -> AppResult<Vec<follow::Model>> {
        Follow::find()
            .filter(follow::Column::FolloweeId.eq(profile_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count followers of a profile.
    pub async fn count_followers(&self, profile_id: &str) -> AppResult<u64> {
        Follow::find()
            .filter(follow::Column::FolloweeId.eq(profile_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count profiles a profile is following.
    pub async fn count_following(&self, profile_id: &str) -> AppResult<u64> {
        Follow::find()
            .filter(follow::Column::FollowerId.eq(profile_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_follow(id: &str, follower_id: &str, followee_id: &str) -> follow::Model {
        follow::Model {
            id: id.to_string(),
            follower_id: follower_id.to_string(),
            followee_id: followee_id.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_pair_found() {
        let follow = create_test_follow("f1", "p1", "p2");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[follow.clone()]])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.find_by_pair("p1", "p2").await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.follower_id, "p1");
        assert_eq!(found.followee_id, "p2");
    }

    #[tokio::test]
    async fn test_is_following_false() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.is_following("p1", "p3").await.unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn test_delete_by_pair_missing_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let deleted = repo.delete_by_pair("p1", "p2").await.unwrap();

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_by_pair_existing_edge() {
        let follow = create_test_follow("f1", "p1", "p2");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[follow.clone()]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let deleted = repo.delete_by_pair("p1", "p2").await.unwrap();

        assert!(deleted);
    }

    #[tokio::test]
    async fn test_find_followers() {
        let f1 = create_test_follow("f1", "p2", "p1");
        let f2 = create_test_follow("f2", "p3", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[f1, f2]])
                .into_connection(),
        );

        let repo = FollowRepository::new(db);
        let result = repo.find_followers("p1", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
    }
}
