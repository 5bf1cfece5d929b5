//! Follow service.

use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::follow,
    repositories::{FollowRepository, ProfileRepository},
};
use sea_orm::Set;

/// Follow service for business logic.
#[derive(Clone)]
pub struct FollowService {
    follow_repo: FollowRepository,
    profile_repo: ProfileRepository,
    id_gen: IdGenerator,
}

impl FollowService {
    /// Create a new follow service.
    #[must_use]
    pub fn new(follow_repo: FollowRepository, profile_repo: ProfileRepository) -> Self {
        Self {
            follow_repo,
            profile_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Follow a profile.
    pub async fn follow(&self, follower_id: &str, followee_id: &str) -> AppResult<follow::Model> {
        if follower_id == followee_id {
            return Err(AppError::SelfFollow);
        }

        if self
            .profile_repo
            .find_by_id(followee_id)
            .await?
            .is_none()
        {
            return Err(AppError::ProfileNotFound);
        }

        if self
            .follow_repo
            .is_following(follower_id, followee_id)
            .await?
        {
            return Err(AppError::AlreadyFollowing);
        }

        let model = follow::ActiveModel {
            id: Set(self.id_gen.generate()),
            follower_id: Set(follower_id.to_string()),
            followee_id: Set(followee_id.to_string()),
            ..Default::default()
        };

        self.follow_repo.create(model).await
    }

    /// Unfollow a profile.
    ///
    /// A missing followee profile is a not-found error; a missing edge on an
    /// existing profile is a bad request.
    pub async fn unfollow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        if self
            .profile_repo
            .find_by_id(followee_id)
            .await?
            .is_none()
        {
            return Err(AppError::ProfileNotFound);
        }

        let deleted = self
            .follow_repo
            .delete_by_pair(follower_id, followee_id)
            .await?;

        if !deleted {
            return Err(AppError::BadRequest(
                "Not following this profile".to_string(),
            ));
        }

        Ok(())
    }

    /// Get followers of a profile (paginated).
    pub async fn get_followers(
        &self,
        profile_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<follow::Model>> {
        self.follow_repo
            .find_followers(profile_id, limit, until_id)
            .await
    }

    /// Get profiles a profile is following (paginated).
    pub async fn get_following(
        &self,
        profile_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<follow::Model>> {
        self.follow_repo
            .find_following(profile_id, limit, until_id)
            .await
    }

    /// Check if a profile is following another.
    pub async fn is_following(&self, follower_id: &str, followee_id: &str) -> AppResult<bool> {
        self.follow_repo.is_following(follower_id, followee_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::profile;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_profile(id: &str) -> profile::Model {
        profile::Model {
            id: id.to_string(),
            user_id: format!("u-{id}"),
            headline: None,
            summary: None,
            location: None,
            industry: None,
            website: None,
            phone_number: None,
            birth_date: None,
            gender: profile::Gender::Other,
            profile_pic_path: None,
            cover_pic_path: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn create_test_follow(id: &str, follower_id: &str, followee_id: &str) -> follow::Model {
        follow::Model {
            id: id.to_string(),
            follower_id: follower_id.to_string(),
            followee_id: followee_id.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_follow_yourself_rejected() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = FollowService::new(FollowRepository::new(db1), ProfileRepository::new(db2));
        let result = service.follow("p1", "p1").await;

        assert!(matches!(result, Err(AppError::SelfFollow)));
    }

    #[tokio::test]
    async fn test_follow_missing_profile() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<profile::Model>::new()])
                .into_connection(),
        );

        let service = FollowService::new(FollowRepository::new(db1), ProfileRepository::new(db2));
        let result = service.follow("p1", "p2").await;

        assert!(matches!(result, Err(AppError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_follow_already_following() {
        let existing = create_test_follow("f1", "p1", "p2");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .into_connection(),
        );
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_profile("p2")]])
                .into_connection(),
        );

        let service = FollowService::new(FollowRepository::new(db1), ProfileRepository::new(db2));
        let result = service.follow("p1", "p2").await;

        assert!(matches!(result, Err(AppError::AlreadyFollowing)));
    }

    #[tokio::test]
    async fn test_unfollow_missing_profile() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<profile::Model>::new()])
                .into_connection(),
        );

        let service = FollowService::new(FollowRepository::new(db1), ProfileRepository::new(db2));
        let result = service.unfollow("p1", "p2").await;

        assert!(matches!(result, Err(AppError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_unfollow_without_edge() {
        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow::Model>::new()])
                .into_connection(),
        );
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_profile("p2")]])
                .into_connection(),
        );

        let service = FollowService::new(FollowRepository::new(db1), ProfileRepository::new(db2));
        let result = service.unfollow("p1", "p2").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_is_following() {
        let existing = create_test_follow("f1", "p1", "p2");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .into_connection(),
        );
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = FollowService::new(FollowRepository::new(db1), ProfileRepository::new(db2));
        let result = service.is_following("p1", "p2").await.unwrap();

        assert!(result);
    }
}
