//! Job application repository.

use std::sync::Arc;

use crate::entities::{job_application, JobApplication};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Job application repository for database operations.
#[derive(Clone)]
pub struct JobApplicationRepository {
    db: Arc<DatabaseConnection>,
}

impl JobApplicationRepository {
    /// Create a new job application repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a job application by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<job_application::Model>> {
        JobApplication::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the application a profile submitted to a job post, if any.
    pub async fn find_by_pair(
        &self,
        job_post_id: &str,
        applicant_id: &str,
    ) -> AppResult<Option<job_application::Model>> {
        JobApplication::find()
            .filter(job_application::Column::JobPostId.eq(job_post_id))
            .filter(job_application::Column::ApplicantId.eq(applicant_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new job application.
    pub async fn create(
        &self,
        model: job_application::ActiveModel,
    ) -> AppResult<job_application::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a job application.
    pub async fn update(
        &self,
        model: job_application::ActiveModel,
    ) -> AppResult<job_application::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a job application.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let application = self.find_by_id(id).await?;
        if let Some(a) = application {
            a.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List applications for a job post (paginated).
    pub async fn find_by_job_post(
        &self,
        job_post_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_application::Model>> {
        let mut query = JobApplication::find()
            .filter(job_application::Column::JobPostId.eq(job_post_id))
            .order_by_desc(job_application::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(job_application::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List applications submitted by a profile (paginated).
    pub async fn find_by_applicant(
        &self,
        applicant_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_application::Model>> {
        let mut query = JobApplication::find()
            .filter(job_application::Column::ApplicantId.eq(applicant_id))
            .order_by_desc(job_application::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(job_application::Column::Id.lt(id));
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

    fn create_test_application(id: &str, job_post_id: &str, applicant_id: &str) -> job_application::Model {
        job_application::Model {
            id: id.to_string(),
            job_post_id: job_post_id.to_string(),
            applicant_id: applicant_id.to_string(),
            cover_letter: None,
            resume_path: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_pair_found() {
        let application = create_test_application("a1", "j1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[application.clone()]])
                .into_connection(),
        );

        let repo = JobApplicationRepository::new(db);
        let result = repo.find_by_pair("j1", "p1").await.unwrap();

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_find_by_job_post() {
        let a1 = create_test_application("a2", "j1", "p1");
        let a2 = create_test_application("a1", "j1", "p2");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[a1, a2]])
                .into_connection(),
        );

        let repo = JobApplicationRepository::new(db);
        let result = repo.find_by_job_post("j1", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
    }
}
