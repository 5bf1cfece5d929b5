//! Job application service.

use crate::authz::{ensure_owner, ensure_owner_or_admin};
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::job_application,
    repositories::{JobApplicationRepository, JobPostRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for applying to a job post.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyInput {
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,

    pub resume_path: Option<String>,
}

/// Input for updating an application.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationInput {
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,

    pub resume_path: Option<String>,
}

/// Job application service for business logic.
#[derive(Clone)]
pub struct JobApplicationService {
    application_repo: JobApplicationRepository,
    job_post_repo: JobPostRepository,
    id_gen: IdGenerator,
}

impl JobApplicationService {
    /// Create a new job application service.
    #[must_use]
    pub fn new(application_repo: JobApplicationRepository, job_post_repo: JobPostRepository) -> Self {
        Self {
            application_repo,
            job_post_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Apply to a job post. One application per profile per post.
    pub async fn apply(
        &self,
        job_post_id: &str,
        applicant_profile_id: &str,
        input: ApplyInput,
    ) -> AppResult<job_application::Model> {
        input.validate()?;

        if self.job_post_repo.find_by_id(job_post_id).await?.is_none() {
            return Err(AppError::NotFound("Job post not found".to_string()));
        }

        if self
            .application_repo
            .find_by_pair(job_post_id, applicant_profile_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Already applied to this job".to_string()));
        }

        let model = job_application::ActiveModel {
            id: Set(self.id_gen.generate()),
            job_post_id: Set(job_post_id.to_string()),
            applicant_id: Set(applicant_profile_id.to_string()),
            cover_letter: Set(input.cover_letter),
            resume_path: Set(input.resume_path),
            ..Default::default()
        };

        self.application_repo.create(model).await
    }

    /// Get an application by ID.
    pub async fn get(&self, id: &str) -> AppResult<job_application::Model> {
        self.application_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    /// List applications for a job post. Only the recruiter who owns the
    /// post (or an admin) may see them.
    pub async fn list_for_job_post(
        &self,
        job_post_id: &str,
        acting_profile_id: &str,
        is_admin: bool,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_application::Model>> {
        let job_post = self
            .job_post_repo
            .find_by_id(job_post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job post not found".to_string()))?;

        ensure_owner_or_admin(&job_post, acting_profile_id, is_admin)?;

        self.application_repo
            .find_by_job_post(job_post_id, limit, until_id)
            .await
    }

    /// List applications submitted by a profile (paginated).
    pub async fn list_for_applicant(
        &self,
        applicant_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_application::Model>> {
        self.application_repo
            .find_by_applicant(applicant_id, limit, until_id)
            .await
    }

    /// Update an application. Applicant only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: UpdateApplicationInput,
    ) -> AppResult<job_application::Model> {
        input.validate()?;

        let application = self.get(id).await?;
        ensure_owner(&application, acting_profile_id)?;

        let mut active: job_application::ActiveModel = application.into();
        if let Some(cover_letter) = input.cover_letter {
            active.cover_letter = Set(Some(cover_letter));
        }
        if let Some(resume_path) = input.resume_path {
            active.resume_path = Set(Some(resume_path));
        }
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.application_repo.update(active).await
    }

    /// Withdraw an application. Applicant or admin.
    pub async fn delete(&self, id: &str, acting_profile_id: &str, is_admin: bool) -> AppResult<()> {
        let application = self.get(id).await?;
        ensure_owner_or_admin(&application, acting_profile_id, is_admin)?;
        self.application_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::job_post;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

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
    async fn test_apply_twice_rejected() {
        let existing = create_test_application("a1", "j1", "p1");

        let db1 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .into_connection(),
        );
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_job_post("j1", "p9")]])
                .into_connection(),
        );

        let service =
            JobApplicationService::new(JobApplicationRepository::new(db1), JobPostRepository::new(db2));
        let result = service
            .apply(
                "j1",
                "p1",
                ApplyInput {
                    cover_letter: None,
                    resume_path: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_for_job_post_requires_owner() {
        let db1 = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let db2 = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_job_post("j1", "p9")]])
                .into_connection(),
        );

        let service =
            JobApplicationService::new(JobApplicationRepository::new(db1), JobPostRepository::new(db2));
        let result = service.list_for_job_post("j1", "p1", false, 10, None).await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
