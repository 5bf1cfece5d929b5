//! Job post and tag repositories.

use std::sync::Arc;

use crate::entities::{job_post, job_post_tag, tag, JobPost, JobPostTag, Tag};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Job post repository for database operations.
#[derive(Clone)]
pub struct JobPostRepository {
    db: Arc<DatabaseConnection>,
}

impl JobPostRepository {
    /// Create a new job post repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a job post by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<job_post::Model>> {
        JobPost::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new job post.
    pub async fn create(&self, model: job_post::ActiveModel) -> AppResult<job_post::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a job post.
    pub async fn update(&self, model: job_post::ActiveModel) -> AppResult<job_post::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a job post.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let job_post = self.find_by_id(id).await?;
        if let Some(j) = job_post {
            j.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List job posts across the instance (paginated).
    pub async fn find_all(
        &self,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_post::Model>> {
        let mut query = JobPost::find().order_by_desc(job_post::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(job_post::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List job posts owned by a recruiter (paginated).
    pub async fn find_by_recruiter(
        &self,
        recruiter_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_post::Model>> {
        let mut query = JobPost::find()
            .filter(job_post::Column::RecruiterId.eq(recruiter_id))
            .order_by_desc(job_post::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(job_post::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Tags attached to a job post.
    pub async fn find_tags(&self, job_post_id: &str) -> AppResult<Vec<tag::Model>> {
        let job_post = self
            .find_by_id(job_post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("job post not found".to_string()))?;

        job_post
            .find_related(Tag)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Replace the tag set of a job post.
    pub async fn set_tags(&self, job_post_id: &str, tag_ids: &[String]) -> AppResult<()> {
        JobPostTag::delete_many()
            .filter(job_post_tag::Column::JobPostId.eq(job_post_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let links: Vec<job_post_tag::ActiveModel> = tag_ids
            .iter()
            .map(|tag_id| job_post_tag::ActiveModel {
                job_post_id: sea_orm::Set(job_post_id.to_string()),
                tag_id: sea_orm::Set(tag_id.clone()),
            })
            .collect();

        JobPostTag::insert_many(links)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

/// Tag repository for database operations.
#[derive(Clone)]
pub struct TagRepository {
    db: Arc<DatabaseConnection>,
}

impl TagRepository {
    /// Create a new tag repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a tag by name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<tag::Model>> {
        Tag::find()
            .filter(tag::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new tag.
    pub async fn create(&self, model: tag::ActiveModel) -> AppResult<tag::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_job_post(id: &str, recruiter_id: &str) -> job_post::Model {
        job_post::Model {
            id: id.to_string(),
            recruiter_id: recruiter_id.to_string(),
            title: "Backend Engineer".to_string(),
            description: "Build services.".to_string(),
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_recruiter() {
        let j1 = create_test_job_post("j2", "p1");
        let j2 = create_test_job_post("j1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[j1, j2]])
                .into_connection(),
        );

        let repo = JobPostRepository::new(db);
        let result = repo.find_by_recruiter("p1", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_find_tags_missing_job_post() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<job_post::Model>::new()])
                .into_connection(),
        );

        let repo = JobPostRepository::new(db);
        let result = repo.find_tags("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_tag_find_by_name() {
        let tag = tag::Model {
            id: "t1".to_string(),
            name: "rust".to_string(),
            created_at: Utc::now().into(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[tag.clone()]])
                .into_connection(),
        );

        let repo = TagRepository::new(db);
        let result = repo.find_by_name("rust").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().id, "t1");
    }
}
