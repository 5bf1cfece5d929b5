//! Job application endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use linkup_common::AppResult;
use linkup_core::{ApplyInput, UpdateApplicationInput};
use linkup_db::entities::{job_application, user::Role};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::{AuthProfile, AuthUser},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Application as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: String,
    pub job_post_id: String,
    pub applicant_id: String,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<job_application::Model> for ApplicationResponse {
    fn from(a: job_application::Model) -> Self {
        Self {
            id: a.id,
            job_post_id: a.job_post_id,
            applicant_id: a.applicant_id,
            cover_letter: a.cover_letter,
            resume_path: a.resume_path,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Apply to a job post.
async fn apply(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(job_post_id): Path<String>,
    Json(input): Json<ApplyInput>,
) -> AppResult<ApiResponse<ApplicationResponse>> {
    let application = state
        .job_application_service
        .apply(&job_post_id, &profile.id, input)
        .await?;

    Ok(ApiResponse::created(application.into()))
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
}

/// List applications to a job post. Post owner or admin only.
async fn list_for_job(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(job_post_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<ApplicationResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let is_admin = user.role == Role::Admin;
    let applications = state
        .job_application_service
        .list_for_job_post(
            &job_post_id,
            &profile.id,
            is_admin,
            limit,
            query.until_id.as_deref(),
        )
        .await?;

    Ok(ApiResponse::ok(
        applications.into_iter().map(Into::into).collect(),
    ))
}

/// List the caller's own applications.
async fn list_own(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<ApplicationResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let applications = state
        .job_application_service
        .list_for_applicant(&profile.id, limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(
        applications.into_iter().map(Into::into).collect(),
    ))
}

/// Update an application. Applicant only.
async fn update(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateApplicationInput>,
) -> AppResult<ApiResponse<ApplicationResponse>> {
    let application = state
        .job_application_service
        .update(&id, &profile.id, input)
        .await?;

    Ok(ApiResponse::ok(application.into()))
}

/// Withdraw an application. Applicant or admin.
async fn withdraw(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let is_admin = user.role == Role::Admin;
    state
        .job_application_service
        .delete(&id, &profile.id, is_admin)
        .await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs/{job_post_id}/applications",
            get(list_for_job).post(apply),
        )
        .route("/applications", get(list_own))
        .route("/applications/{id}", put(update).delete(withdraw))
}
