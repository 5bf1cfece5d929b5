//! Profile service.

use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::profile,
    repositories::{FollowRepository, ProfileRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Profile together with its derived follow counts.
#[derive(Debug, Clone)]
pub struct ProfileView {
    /// The profile row.
    pub profile: profile::Model,
    /// Number of profiles following this one.
    pub followers_count: u64,
    /// Number of profiles this one follows.
    pub following_count: u64,
}

/// Input for updating a profile.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    #[validate(length(max = 256))]
    pub headline: Option<String>,

    #[validate(length(max = 4000))]
    pub summary: Option<String>,

    #[validate(length(max = 256))]
    pub location: Option<String>,

    #[validate(length(max = 256))]
    pub industry: Option<String>,

    #[validate(url)]
    pub website: Option<String>,

    #[validate(length(max = 64))]
    pub phone_number: Option<String>,

    pub birth_date: Option<chrono::NaiveDate>,

    pub gender: Option<profile::Gender>,

    pub profile_pic_path: Option<String>,

    pub cover_pic_path: Option<String>,
}

/// Profile service for business logic.
#[derive(Clone)]
pub struct ProfileService {
    profile_repo: ProfileRepository,
    follow_repo: FollowRepository,
    id_gen: IdGenerator,
}

impl ProfileService {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(profile_repo: ProfileRepository, follow_repo: FollowRepository) -> Self {
        Self {
            profile_repo,
            follow_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create the profile for a user. At most one per user.
    pub async fn create(&self, user_id: &str) -> AppResult<profile::Model> {
        if self.profile_repo.find_by_user(user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Profile already exists for this user".to_string(),
            ));
        }

        let model = profile::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(user_id.to_string()),
            gender: Set(profile::Gender::Other),
            ..Default::default()
        };

        self.profile_repo.create(model).await
    }

    /// Get a profile by ID.
    pub async fn get(&self, id: &str) -> AppResult<profile::Model> {
        self.profile_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProfileNotFound)
    }

    /// Get a profile by ID with follower and following counts.
    pub async fn get_view(&self, id: &str) -> AppResult<ProfileView> {
        let profile = self.get(id).await?;
        let followers_count = self.follow_repo.count_followers(id).await?;
        let following_count = self.follow_repo.count_following(id).await?;

        Ok(ProfileView {
            profile,
            followers_count,
            following_count,
        })
    }

    /// Get the profile belonging to a user.
    pub async fn get_by_user(&self, user_id: &str) -> AppResult<profile::Model> {
        self.profile_repo
            .find_by_user(user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)
    }

    /// Update a profile. Only provided fields change.
    pub async fn update(&self, id: &str, input: UpdateProfileInput) -> AppResult<profile::Model> {
        input.validate()?;

        let profile = self.get(id).await?;
        let mut active: profile::ActiveModel = profile.into();

        if let Some(headline) = input.headline {
            active.headline = Set(Some(headline));
        }
        if let Some(summary) = input.summary {
            active.summary = Set(Some(summary));
        }
        if let Some(location) = input.location {
            active.location = Set(Some(location));
        }
        if let Some(industry) = input.industry {
            active.industry = Set(Some(industry));
        }
        if let Some(website) = input.website {
            active.website = Set(Some(website));
        }
        if let Some(phone_number) = input.phone_number {
            active.phone_number = Set(Some(phone_number));
        }
        if let Some(birth_date) = input.birth_date {
            active.birth_date = Set(Some(birth_date));
        }
        if let Some(gender) = input.gender {
            active.gender = Set(gender);
        }
        if let Some(profile_pic_path) = input.profile_pic_path {
            active.profile_pic_path = Set(Some(profile_pic_path));
        }
        if let Some(cover_pic_path) = input.cover_pic_path {
            active.cover_pic_path = Set(Some(cover_pic_path));
        }
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.profile_repo.update(active).await
    }

    /// Delete a profile. The owning user or an admin only.
    pub async fn delete(&self, id: &str, acting_user_id: &str, is_admin: bool) -> AppResult<()> {
        let profile = self.get(id).await?;
        if profile.user_id != acting_user_id && !is_admin {
            return Err(AppError::Forbidden);
        }
        self.profile_repo.delete(id).await
    }

    /// List profiles (paginated).
    pub async fn list(
        &self,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<profile::Model>> {
        self.profile_repo.find_all(limit, until_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_profile(id: &str, user_id: &str) -> profile::Model {
        profile::Model {
            id: id.to_string(),
            user_id: user_id.to_string(),
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

    #[tokio::test]
    async fn test_create_second_profile_rejected() {
        let existing = create_test_profile("p1", "u1");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .into_connection(),
        );
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = ProfileService::new(ProfileRepository::new(db1), FollowRepository::new(db2));
        let result = service.create("u1").await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("already exists")),
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_missing_profile() {
        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<profile::Model>::new()])
                .into_connection(),
        );
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = ProfileService::new(ProfileRepository::new(db1), FollowRepository::new(db2));
        let result = service.get("missing").await;

        assert!(matches!(result, Err(AppError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_get_by_user_found() {
        let profile = create_test_profile("p1", "u1");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[profile.clone()]])
                .into_connection(),
        );
        let db2 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = ProfileService::new(ProfileRepository::new(db1), FollowRepository::new(db2));
        let result = service.get_by_user("u1").await.unwrap();

        assert_eq!(result.id, "p1");
    }
}
