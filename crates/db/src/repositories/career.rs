//! Career section repositories.
//!
//! Experience, education, certification and course rows share the same
//! access shape, so the four repositories live together.

use std::sync::Arc;

use crate::entities::{
    certification, course, education, experience, Certification, Course, Education, Experience,
};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

/// Experience repository for database operations.
#[derive(Clone)]
pub struct ExperienceRepository {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepository {
    /// Create a new experience repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an experience by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<experience::Model>> {
        Experience::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List experiences for a profile, newest first.
    pub async fn find_by_profile(&self, profile_id: &str) -> AppResult<Vec<experience::Model>> {
        Experience::find()
            .filter(experience::Column::ProfileId.eq(profile_id))
            .order_by_desc(experience::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new experience.
    pub async fn create(&self, model: experience::ActiveModel) -> AppResult<experience::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update an experience.
    pub async fn update(&self, model: experience::ActiveModel) -> AppResult<experience::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete an experience.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let row = self.find_by_id(id).await?;
        if let Some(r) = row {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

/// Education repository for database operations.
#[derive(Clone)]
pub struct EducationRepository {
    db: Arc<DatabaseConnection>,
}

impl EducationRepository {
    /// Create a new education repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an education by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<education::Model>> {
        Education::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List educations for a profile, newest first.
    pub async fn find_by_profile(&self, profile_id: &str) -> AppResult<Vec<education::Model>> {
        Education::find()
            .filter(education::Column::ProfileId.eq(profile_id))
            .order_by_desc(education::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new education.
    pub async fn create(&self, model: education::ActiveModel) -> AppResult<education::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update an education.
    pub async fn update(&self, model: education::ActiveModel) -> AppResult<education::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete an education.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let row = self.find_by_id(id).await?;
        if let Some(r) = row {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

/// Certification repository for database operations.
#[derive(Clone)]
pub struct CertificationRepository {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepository {
    /// Create a new certification repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a certification by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<certification::Model>> {
        Certification::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List certifications for a profile, newest first.
    pub async fn find_by_profile(&self, profile_id: &str) -> AppResult<Vec<certification::Model>> {
        Certification::find()
            .filter(certification::Column::ProfileId.eq(profile_id))
            .order_by_desc(certification::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new certification.
    pub async fn create(
        &self,
        model: certification::ActiveModel,
    ) -> AppResult<certification::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a certification.
    pub async fn update(
        &self,
        model: certification::ActiveModel,
    ) -> AppResult<certification::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a certification.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let row = self.find_by_id(id).await?;
        if let Some(r) = row {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

/// Course repository for database operations.
#[derive(Clone)]
pub struct CourseRepository {
    db: Arc<DatabaseConnection>,
}

impl CourseRepository {
    /// Create a new course repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a course by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<course::Model>> {
        Course::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List courses for a profile, newest first.
    pub async fn find_by_profile(&self, profile_id: &str) -> AppResult<Vec<course::Model>> {
        Course::find()
            .filter(course::Column::ProfileId.eq(profile_id))
            .order_by_desc(course::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new course.
    pub async fn create(&self, model: course::ActiveModel) -> AppResult<course::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a course.
    pub async fn update(&self, model: course::ActiveModel) -> AppResult<course::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a course.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let row = self.find_by_id(id).await?;
        if let Some(r) = row {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_course(id: &str, profile_id: &str) -> course::Model {
        course::Model {
            id: id.to_string(),
            profile_id: profile_id.to_string(),
            course_name: "Databases".to_string(),
            course_code: Some("CS145".to_string()),
            associated_with: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_profile() {
        let c1 = create_test_course("c1", "p1");
        let c2 = create_test_course("c2", "p1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[c2, c1]])
                .into_connection(),
        );

        let repo = CourseRepository::new(db);
        let result = repo.find_by_profile("p1").await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<experience::Model>::new()])
                .into_connection(),
        );

        let repo = ExperienceRepository::new(db);
        let result = repo.find_by_id("missing").await.unwrap();

        assert!(result.is_none());
    }
}
