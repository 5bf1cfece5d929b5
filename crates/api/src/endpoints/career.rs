//! Career section endpoints: experience, education, certification, course.
//!
//! All four share the same shape: entries belong to a profile, creation
//! binds to the caller's profile, and only the owner may mutate.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use linkup_common::AppResult;
use linkup_core::{CertificationInput, CourseInput, EducationInput, ExperienceInput};
use linkup_db::entities::{
    certification, course, education, experience,
    experience::{EmploymentType, LocationType},
};
use serde::{Deserialize, Serialize};

use crate::{
    extractors::AuthProfile,
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Query selecting whose section entries to list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionQuery {
    pub profile_id: String,
}

/// Experience entry as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub id: String,
    pub profile_id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub location_type: LocationType,
    pub employment_type: EmploymentType,
    pub start_date: Option<chrono::NaiveDate>,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub media_path: Option<String>,
    pub created_at: String,
}

impl From<experience::Model> for ExperienceResponse {
    fn from(e: experience::Model) -> Self {
        Self {
            id: e.id,
            profile_id: e.profile_id,
            title: e.title,
            company_name: e.company_name,
            location: e.location,
            location_type: e.location_type,
            employment_type: e.employment_type,
            start_date: e.start_date,
            description: e.description,
            skills: e.skills,
            media_path: e.media_path,
            created_at: e.created_at.to_rfc3339(),
        }
    }
}

async fn create_experience(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(input): Json<ExperienceInput>,
) -> AppResult<ApiResponse<ExperienceResponse>> {
    let entry = state.experience_service.create(&profile.id, input).await?;
    Ok(ApiResponse::created(entry.into()))
}

async fn list_experiences(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> AppResult<ApiResponse<Vec<ExperienceResponse>>> {
    let entries = state.experience_service.list(&query.profile_id).await?;
    Ok(ApiResponse::ok(entries.into_iter().map(Into::into).collect()))
}

async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ExperienceResponse>> {
    let entry = state.experience_service.get(&id).await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn update_experience(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ExperienceInput>,
) -> AppResult<ApiResponse<ExperienceResponse>> {
    let entry = state
        .experience_service
        .update(&id, &profile.id, input)
        .await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn delete_experience(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.experience_service.delete(&id, &profile.id).await?;
    Ok(no_content())
}

/// Education entry as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    pub id: String,
    pub profile_id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub media_path: Option<String>,
    pub created_at: String,
}

impl From<education::Model> for EducationResponse {
    fn from(e: education::Model) -> Self {
        Self {
            id: e.id,
            profile_id: e.profile_id,
            school: e.school,
            degree: e.degree,
            field_of_study: e.field_of_study,
            start_date: e.start_date,
            end_date: e.end_date,
            grade: e.grade,
            description: e.description,
            skills: e.skills,
            media_path: e.media_path,
            created_at: e.created_at.to_rfc3339(),
        }
    }
}

async fn create_education(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(input): Json<EducationInput>,
) -> AppResult<ApiResponse<EducationResponse>> {
    let entry = state.education_service.create(&profile.id, input).await?;
    Ok(ApiResponse::created(entry.into()))
}

async fn list_educations(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> AppResult<ApiResponse<Vec<EducationResponse>>> {
    let entries = state.education_service.list(&query.profile_id).await?;
    Ok(ApiResponse::ok(entries.into_iter().map(Into::into).collect()))
}

async fn get_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<EducationResponse>> {
    let entry = state.education_service.get(&id).await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn update_education(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<EducationInput>,
) -> AppResult<ApiResponse<EducationResponse>> {
    let entry = state
        .education_service
        .update(&id, &profile.id, input)
        .await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn delete_education(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.education_service.delete(&id, &profile.id).await?;
    Ok(no_content())
}

/// Certification entry as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationResponse {
    pub id: String,
    pub profile_id: String,
    pub name: String,
    pub issuing_organization: String,
    pub issue_date: Option<chrono::NaiveDate>,
    pub expiration_date: Option<chrono::NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub skills: Option<String>,
    pub created_at: String,
}

impl From<certification::Model> for CertificationResponse {
    fn from(c: certification::Model) -> Self {
        Self {
            id: c.id,
            profile_id: c.profile_id,
            name: c.name,
            issuing_organization: c.issuing_organization,
            issue_date: c.issue_date,
            expiration_date: c.expiration_date,
            credential_id: c.credential_id,
            credential_url: c.credential_url,
            skills: c.skills,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

async fn create_certification(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(input): Json<CertificationInput>,
) -> AppResult<ApiResponse<CertificationResponse>> {
    let entry = state
        .certification_service
        .create(&profile.id, input)
        .await?;
    Ok(ApiResponse::created(entry.into()))
}

async fn list_certifications(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> AppResult<ApiResponse<Vec<CertificationResponse>>> {
    let entries = state.certification_service.list(&query.profile_id).await?;
    Ok(ApiResponse::ok(entries.into_iter().map(Into::into).collect()))
}

async fn get_certification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CertificationResponse>> {
    let entry = state.certification_service.get(&id).await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn update_certification(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CertificationInput>,
) -> AppResult<ApiResponse<CertificationResponse>> {
    let entry = state
        .certification_service
        .update(&id, &profile.id, input)
        .await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn delete_certification(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.certification_service.delete(&id, &profile.id).await?;
    Ok(no_content())
}

/// Course entry as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub profile_id: String,
    pub course_name: String,
    pub course_code: Option<String>,
    pub associated_with: Option<String>,
    pub created_at: String,
}

impl From<course::Model> for CourseResponse {
    fn from(c: course::Model) -> Self {
        Self {
            id: c.id,
            profile_id: c.profile_id,
            course_name: c.course_name,
            course_code: c.course_code,
            associated_with: c.associated_with,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

async fn create_course(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(input): Json<CourseInput>,
) -> AppResult<ApiResponse<CourseResponse>> {
    let entry = state.course_service.create(&profile.id, input).await?;
    Ok(ApiResponse::created(entry.into()))
}

async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> AppResult<ApiResponse<Vec<CourseResponse>>> {
    let entries = state.course_service.list(&query.profile_id).await?;
    Ok(ApiResponse::ok(entries.into_iter().map(Into::into).collect()))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CourseResponse>> {
    let entry = state.course_service.get(&id).await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn update_course(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CourseInput>,
) -> AppResult<ApiResponse<CourseResponse>> {
    let entry = state.course_service.update(&id, &profile.id, input).await?;
    Ok(ApiResponse::ok(entry.into()))
}

async fn delete_course(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.course_service.delete(&id, &profile.id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/experiences", get(list_experiences).post(create_experience))
        .route(
            "/experiences/{id}",
            get(get_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
        .route("/educations", get(list_educations).post(create_education))
        .route(
            "/educations/{id}",
            get(get_education)
                .put(update_education)
                .delete(delete_education),
        )
        .route(
            "/certifications",
            get(list_certifications).post(create_certification),
        )
        .route(
            "/certifications/{id}",
            get(get_certification)
                .put(update_certification)
                .delete(delete_certification),
        )
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}
