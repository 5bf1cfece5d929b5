//! Profile repository.

use std::sync::Arc;

use crate::entities::{profile, Profile};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Profile repository for database operations.
#[derive(Clone)]
pub struct ProfileRepository {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepository {
    /// Create a new profile repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a profile by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<profile::Model>> {
        Profile::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a profile by its owning user.
    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Option<profile::Model>> {
        Profile::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new profile.
    pub async fn create(&self, model: profile::ActiveModel) -> AppResult<profile::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a profile.
    pub async fn update(&self, model: profile::ActiveModel) -> AppResult<profile::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a profile.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let profile = self.find_by_id(id).await?;
        if let Some(p) = profile {
            p.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List profiles (paginated).
    pub async fn find_all(
        &self,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<profile::Model>> {
        let mut query = Profile::find().order_by_desc(profile::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(profile::Column::Id.lt(id));
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
    use crate::entities::profile::Gender;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

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
            gender: Gender::Other,
            profile_pic_path: None,
            cover_pic_path: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_user_found() {
        let profile = create_test_profile("p1", "u1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[profile.clone()]])
                .into_connection(),
        );

        let repo = ProfileRepository::new(db);
        let result = repo.find_by_user("u1").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().id, "p1");
    }

    #[tokio::test]
    async fn test_find_by_user_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<profile::Model>::new()])
                .into_connection(),
        );

        let repo = ProfileRepository::new(db);
        let result = repo.find_by_user("u2").await.unwrap();

        assert!(result.is_none());
    }
}
