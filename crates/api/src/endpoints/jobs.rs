//! Job board endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use linkup_common::AppResult;
use linkup_core::{CreateJobPostInput, JobPostView, UpdateJobPostInput};
use linkup_db::entities::{job_post, user::Role};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::{AuthProfile, AuthUser},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Job post as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostResponse {
    pub id: String,
    pub recruiter_id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<job_post::Model> for JobPostResponse {
    fn from(j: job_post::Model) -> Self {
        Self {
            id: j.id,
            recruiter_id: j.recruiter_id,
            title: j.title,
            description: j.description,
            created_at: j.created_at.to_rfc3339(),
            updated_at: j.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Job post with its tags.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostViewResponse {
    #[serde(flatten)]
    pub job_post: JobPostResponse,
    pub tags: Vec<String>,
}

impl From<JobPostView> for JobPostViewResponse {
    fn from(v: JobPostView) -> Self {
        Self {
            job_post: v.job_post.into(),
            tags: v.tags.into_iter().map(|t| t.name).collect(),
        }
    }
}

/// Publish a job post. Recruiters only.
async fn create(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(input): Json<CreateJobPostInput>,
) -> AppResult<ApiResponse<JobPostViewResponse>> {
    let view = state
        .job_post_service
        .create(&profile.id, user.role, input)
        .await?;

    Ok(ApiResponse::created(view.into()))
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
    /// Restrict to posts by one recruiter profile.
    pub recruiter_id: Option<String>,
}

/// List job posts.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<JobPostResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let until_id = query.until_id.as_deref();

    let posts = match query.recruiter_id.as_deref() {
        Some(recruiter_id) => {
            state
                .job_post_service
                .list_by_recruiter(recruiter_id, limit, until_id)
                .await?
        }
        None => state.job_post_service.list(limit, until_id).await?,
    };

    Ok(ApiResponse::ok(posts.into_iter().map(Into::into).collect()))
}

/// Get a job post with its tags.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<JobPostViewResponse>> {
    let view = state.job_post_service.get_view(&id).await?;
    Ok(ApiResponse::ok(view.into()))
}

/// Update a job post. Owner only.
async fn update(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateJobPostInput>,
) -> AppResult<ApiResponse<JobPostViewResponse>> {
    let view = state
        .job_post_service
        .update(&id, &profile.id, input)
        .await?;
    Ok(ApiResponse::ok(view.into()))
}

/// Delete a job post. Owner or admin.
async fn delete(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let is_admin = user.role == Role::Admin;
    state
        .job_post_service
        .delete(&id, &profile.id, is_admin)
        .await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}
