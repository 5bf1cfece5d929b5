//! Career section services.
//!
//! Experience, education, certification and course entries all belong to a
//! profile and only that profile may change them.

use crate::authz::ensure_owner;
use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::{
        certification, course, education, experience,
        experience::{EmploymentType, LocationType},
    },
    repositories::{
        CertificationRepository, CourseRepository, EducationRepository, ExperienceRepository,
    },
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for creating or replacing an experience entry.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(min = 1, max = 256))]
    pub company_name: String,

    #[validate(length(min = 1, max = 256))]
    pub location: String,

    pub location_type: LocationType,

    pub employment_type: EmploymentType,

    pub start_date: Option<chrono::NaiveDate>,

    #[validate(length(max = 4000))]
    pub description: Option<String>,

    #[validate(length(max = 2000))]
    pub skills: Option<String>,

    pub media_path: Option<String>,
}

/// Input for creating or replacing an education entry.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EducationInput {
    #[validate(length(min = 1, max = 256))]
    pub school: String,

    #[validate(length(min = 1, max = 256))]
    pub degree: String,

    #[validate(length(min = 1, max = 256))]
    pub field_of_study: String,

    pub start_date: Option<chrono::NaiveDate>,

    pub end_date: Option<chrono::NaiveDate>,

    #[validate(length(max = 64))]
    pub grade: Option<String>,

    #[validate(length(max = 4000))]
    pub description: Option<String>,

    #[validate(length(max = 2000))]
    pub skills: Option<String>,

    pub media_path: Option<String>,
}

/// Input for creating or replacing a certification entry.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CertificationInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[validate(length(min = 1, max = 256))]
    pub issuing_organization: String,

    pub issue_date: Option<chrono::NaiveDate>,

    pub expiration_date: Option<chrono::NaiveDate>,

    #[validate(length(max = 256))]
    pub credential_id: Option<String>,

    #[validate(url)]
    pub credential_url: Option<String>,

    #[validate(length(max = 2000))]
    pub skills: Option<String>,
}

/// Input for creating or replacing a course entry.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    #[validate(length(min = 1, max = 256))]
    pub course_name: String,

    #[validate(length(max = 64))]
    pub course_code: Option<String>,

    #[validate(length(max = 256))]
    pub associated_with: Option<String>,
}

/// Experience service for business logic.
#[derive(Clone)]
pub struct ExperienceService {
    repo: ExperienceRepository,
    id_gen: IdGenerator,
}

impl ExperienceService {
    /// Create a new experience service.
    #[must_use]
    pub fn new(repo: ExperienceRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Add an experience entry to a profile.
    pub async fn create(
        &self,
        profile_id: &str,
        input: ExperienceInput,
    ) -> AppResult<experience::Model> {
        input.validate()?;

        let model = experience::ActiveModel {
            id: Set(self.id_gen.generate()),
            profile_id: Set(profile_id.to_string()),
            title: Set(input.title),
            company_name: Set(input.company_name),
            location: Set(input.location),
            location_type: Set(input.location_type),
            employment_type: Set(input.employment_type),
            start_date: Set(input.start_date),
            description: Set(input.description),
            skills: Set(input.skills),
            media_path: Set(input.media_path),
            ..Default::default()
        };

        self.repo.create(model).await
    }

    /// Get an experience entry by ID.
    pub async fn get(&self, id: &str) -> AppResult<experience::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Experience not found".to_string()))
    }

    /// List a profile's experience entries.
    pub async fn list(&self, profile_id: &str) -> AppResult<Vec<experience::Model>> {
        self.repo.find_by_profile(profile_id).await
    }

    /// Replace an experience entry. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: ExperienceInput,
    ) -> AppResult<experience::Model> {
        input.validate()?;

        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;

        let mut active: experience::ActiveModel = row.into();
        active.title = Set(input.title);
        active.company_name = Set(input.company_name);
        active.location = Set(input.location);
        active.location_type = Set(input.location_type);
        active.employment_type = Set(input.employment_type);
        active.start_date = Set(input.start_date);
        active.description = Set(input.description);
        active.skills = Set(input.skills);
        active.media_path = Set(input.media_path);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(active).await
    }

    /// Delete an experience entry. Owner only.
    pub async fn delete(&self, id: &str, acting_profile_id: &str) -> AppResult<()> {
        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;
        self.repo.delete(id).await
    }
}

/// Education service for business logic.
#[derive(Clone)]
pub struct EducationService {
    repo: EducationRepository,
    id_gen: IdGenerator,
}

impl EducationService {
    /// Create a new education service.
    #[must_use]
    pub fn new(repo: EducationRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Add an education entry to a profile.
    pub async fn create(
        &self,
        profile_id: &str,
        input: EducationInput,
    ) -> AppResult<education::Model> {
        input.validate()?;

        let model = education::ActiveModel {
            id: Set(self.id_gen.generate()),
            profile_id: Set(profile_id.to_string()),
            school: Set(input.school),
            degree: Set(input.degree),
            field_of_study: Set(input.field_of_study),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            grade: Set(input.grade),
            description: Set(input.description),
            skills: Set(input.skills),
            media_path: Set(input.media_path),
            ..Default::default()
        };

        self.repo.create(model).await
    }

    /// Get an education entry by ID.
    pub async fn get(&self, id: &str) -> AppResult<education::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Education not found".to_string()))
    }

    /// List a profile's education entries.
    pub async fn list(&self, profile_id: &str) -> AppResult<Vec<education::Model>> {
        self.repo.find_by_profile(profile_id).await
    }

    /// Replace an education entry. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: EducationInput,
    ) -> AppResult<education::Model> {
        input.validate()?;

        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;

        let mut active: education::ActiveModel = row.into();
        active.school = Set(input.school);
        active.degree = Set(input.degree);
        active.field_of_study = Set(input.field_of_study);
        active.start_date = Set(input.start_date);
        active.end_date = Set(input.end_date);
        active.grade = Set(input.grade);
        active.description = Set(input.description);
        active.skills = Set(input.skills);
        active.media_path = Set(input.media_path);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(active).await
    }

    /// Delete an education entry. Owner only.
    pub async fn delete(&self, id: &str, acting_profile_id: &str) -> AppResult<()> {
        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;
        self.repo.delete(id).await
    }
}

/// Certification service for business logic.
#[derive(Clone)]
pub struct CertificationService {
    repo: CertificationRepository,
    id_gen: IdGenerator,
}

impl CertificationService {
    /// Create a new certification service.
    #[must_use]
    pub fn new(repo: CertificationRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Add a certification entry to a profile.
    pub async fn create(
        &self,
        profile_id: &str,
        input: CertificationInput,
    ) -> AppResult<certification::Model> {
        input.validate()?;

        let model = certification::ActiveModel {
            id: Set(self.id_gen.generate()),
            profile_id: Set(profile_id.to_string()),
            name: Set(input.name),
            issuing_organization: Set(input.issuing_organization),
            issue_date: Set(input.issue_date),
            expiration_date: Set(input.expiration_date),
            credential_id: Set(input.credential_id),
            credential_url: Set(input.credential_url),
            skills: Set(input.skills),
            ..Default::default()
        };

        self.repo.create(model).await
    }

    /// Get a certification entry by ID.
    pub async fn get(&self, id: &str) -> AppResult<certification::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Certification not found".to_string()))
    }

    /// List a profile's certification entries.
    pub async fn list(&self, profile_id: &str) -> AppResult<Vec<certification::Model>> {
        self.repo.find_by_profile(profile_id).await
    }

    /// Replace a certification entry. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: CertificationInput,
    ) -> AppResult<certification::Model> {
        input.validate()?;

        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;

        let mut active: certification::ActiveModel = row.into();
        active.name = Set(input.name);
        active.issuing_organization = Set(input.issuing_organization);
        active.issue_date = Set(input.issue_date);
        active.expiration_date = Set(input.expiration_date);
        active.credential_id = Set(input.credential_id);
        active.credential_url = Set(input.credential_url);
        active.skills = Set(input.skills);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(active).await
    }

    /// Delete a certification entry. Owner only.
    pub async fn delete(&self, id: &str, acting_profile_id: &str) -> AppResult<()> {
        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;
        self.repo.delete(id).await
    }
}

/// Course service for business logic.
#[derive(Clone)]
pub struct CourseService {
    repo: CourseRepository,
    id_gen: IdGenerator,
}

impl CourseService {
    /// Create a new course service.
    #[must_use]
    pub fn new(repo: CourseRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Add a course entry to a profile.
    pub async fn create(&self, profile_id: &str, input: CourseInput) -> AppResult<course::Model> {
        input.validate()?;

        let model = course::ActiveModel {
            id: Set(self.id_gen.generate()),
            profile_id: Set(profile_id.to_string()),
            course_name: Set(input.course_name),
            course_code: Set(input.course_code),
            associated_with: Set(input.associated_with),
            ..Default::default()
        };

        self.repo.create(model).await
    }

    /// Get a course entry by ID.
    pub async fn get(&self, id: &str) -> AppResult<course::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// List a profile's course entries.
    pub async fn list(&self, profile_id: &str) -> AppResult<Vec<course::Model>> {
        self.repo.find_by_profile(profile_id).await
    }

    /// Replace a course entry. Owner only.
    pub async fn update(
        &self,
        id: &str,
        acting_profile_id: &str,
        input: CourseInput,
    ) -> AppResult<course::Model> {
        input.validate()?;

        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;

        let mut active: course::ActiveModel = row.into();
        active.course_name = Set(input.course_name);
        active.course_code = Set(input.course_code);
        active.associated_with = Set(input.associated_with);
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(active).await
    }

    /// Delete a course entry. Owner only.
    pub async fn delete(&self, id: &str, acting_profile_id: &str) -> AppResult<()> {
        let row = self.get(id).await?;
        ensure_owner(&row, acting_profile_id)?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_course(id: &str, profile_id: &str) -> course::Model {
        course::Model {
            id: id.to_string(),
            profile_id: profile_id.to_string(),
            course_name: "Databases".to_string(),
            course_code: None,
            associated_with: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_update_by_non_owner_rejected() {
        let course = create_test_course("c1", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[course]])
                .into_connection(),
        );

        let service = CourseService::new(CourseRepository::new(db));
        let result = service
            .update(
                "c1",
                "p2",
                CourseInput {
                    course_name: "Compilers".to_string(),
                    course_code: None,
                    associated_with: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_missing_entry() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<course::Model>::new()])
                .into_connection(),
        );

        let service = CourseService::new(CourseRepository::new(db));
        let result = service.delete("missing", "p1").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
