//! Job post service.

use crate::authz::{ensure_owner, ensure_owner_or_admin};
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::{job_post, tag, user::Role},
    repositories::{JobPostRepository, TagRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for creating a job post.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPostInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(min = 1, max = 10000))]
    pub description: String,

    /// Tag names; unknown ones are created.
    #[validate(length(max = 16))]
    pub tags: Vec<String>,
}

/// Input for updating a job post.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPostInput {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000))]
    pub description: Option<String>,

    #[validate(length(max = 16))]
    pub tags: Option<Vec<String>>,
}

/// A job post together with its tags.
#[derive(Debug, Clone)]
pub struct JobPostView {
    /// The job post row.
    pub job_post: job_post::Model,
    /// Tags attached to the post.
    pub tags: Vec<tag::Model>,
}

/// Job post service for business logic.
#[derive(Clone)]
pub struct JobPostService {
    job_post_repo: JobPostRepository,
    tag_repo: TagRepository,
    id_gen: IdGenerator,
}

impl JobPostService {
    /// Create a new job post service.
    #[must_use]
    pub fn new(job_post_repo: JobPostRepository, tag_repo: TagRepository) -> Self {
        Self {
            job_post_repo,
            tag_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Publish a job post. Recruiters only.
    pub async fn create(
        &self,
        recruiter_profile_id: &str,
        role: Role,
        input: CreateJobPostInput,
    ) -> AppResult<JobPostView> {
        if role != Role::Recruiter && role != Role::Admin {
            return Err(AppError::Forbidden);
        }
        input.validate()?;

        let model = job_post::ActiveModel {
            id: Set(self.id_gen.generate()),
            recruiter_id: Set(recruiter_profile_id.to_string()),
            title: Set(input.title),
            description: Set(input.description),
            ..Default::default()
        };

        let job_post = self.job_post_repo.create(model).await?;
        let tags = self.attach_tags(&job_post.id, &input.tags).await?;

        Ok(JobPostView { job_post, tags })
    }

    /// Get a job post by ID.
    pub async fn get(&self, id: &str) -> AppResult<job_post::Model> {
        self.job_post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job post not found".to_string()))
    }

    /// Get a job post together with its tags.
    pub async fn get_view(&self, id: &str) -> AppResult<JobPostView> {
        let job_post = self.get(id).await?;
        let tags = self.job_post_repo.find_tags(&job_post.id).await?;
        Ok(JobPostView { job_post, tags })
    }

    /// List job posts across the instance (paginated).
    pub async fn list(
        &self,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_post::Model>> {
        self.job_post_repo.find_all(limit, until_id).await
    }

    /// List job posts owned by a recruiter (paginated).
    pub async fn list_by_recruiter(
        &self,
        recruiter_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<job_post::Model>> {
        self.job_post_repo
            .find_by_recruiter(recruiter_id, limit, until_id)
            .await
    }

    /// Update a job post. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: UpdateJobPostInput,
    ) -> AppResult<JobPostView> {
        input.validate()?;

        let job_post = self.get(id).await?;
        ensure_owner(&job_post, acting_profile_id)?;

        let mut active: job_post::ActiveModel = job_post.into();
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        let job_post = self.job_post_repo.update(active).await?;

        let tags = match input.tags {
            Some(names) => self.attach_tags(&job_post.id, &names).await?,
            None => self.job_post_repo.find_tags(&job_post.id).await?,
        };

        Ok(JobPostView { job_post, tags })
    }

    /// Delete a job post. Owner or admin.
    pub async fn delete(&self, id: &str, acting_profile_id: &str, is_admin: bool) -> AppResult<()> {
        let job_post = self.get(id).await?;
        ensure_owner_or_admin(&job_post, acting_profile_id, is_admin)?;
        self.job_post_repo.delete(id).await
    }

    /// Resolve tag names to rows, creating missing ones, and link them.
    async fn attach_tags(&self, job_post_id: &str, names: &[String]) -> AppResult<Vec<tag::Model>> {
        let mut tags = Vec::with_capacity(names.len());

        for name in names {
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            let row = match self.tag_repo.find_by_name(&name).await? {
                Some(existing) => existing,
                None => {
                    let model = tag::ActiveModel {
                        id: Set(self.id_gen.generate()),
                        name: Set(name),
                        ..Default::default()
                    };
                    self.tag_repo.create(model).await?
                }
            };
            tags.push(row);
        }

        let tag_ids: Vec<String> = tags.iter().map(|t| t.id.clone()).collect();
        self.job_post_repo.set_tags(job_post_id, &tag_ids).await?;

        Ok(tags)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
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

    fn empty_db() -> Arc<sea_orm::DatabaseConnection> {
        Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    #[tokio::test]
    async fn test_create_requires_recruiter_role() {
        let service = JobPostService::new(
            JobPostRepository::new(empty_db()),
            TagRepository::new(empty_db()),
        );

        let result = service
            .create(
                "p1",
                Role::Employee,
                CreateJobPostInput {
                    title: "Backend Engineer".to_string(),
                    description: "Build services.".to_string(),
                    tags: vec![],
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_rejected() {
        let job_post = create_test_job_post("j1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[job_post]])
                .into_connection(),
        );

        let service = JobPostService::new(JobPostRepository::new(db), TagRepository::new(empty_db()));
        let result = service.delete("j1", "p2", false).await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_by_admin_allowed() {
        let job_post = create_test_job_post("j1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[job_post.clone()], [job_post]])
                .append_exec_results([sea_orm::MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let service = JobPostService::new(JobPostRepository::new(db), TagRepository::new(empty_db()));
        let result = service.delete("j1", "p2", true).await;

        assert!(result.is_ok());
    }
}
