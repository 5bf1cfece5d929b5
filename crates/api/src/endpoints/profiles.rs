//! Profile endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use linkup_common::AppResult;
use linkup_core::{ProfileView, UpdateProfileInput};
use linkup_db::entities::profile::{self, Gender};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit, posts},
    extractors::{AuthProfile, AuthUser},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Profile as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub gender: Gender,
    pub profile_pic_path: Option<String>,
    pub cover_pic_path: Option<String>,
    pub created_at: String,
}

impl From<profile::Model> for ProfileResponse {
    fn from(p: profile::Model) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            headline: p.headline,
            summary: p.summary,
            location: p.location,
            industry: p.industry,
            website: p.website,
            phone_number: p.phone_number,
            birth_date: p.birth_date,
            gender: p.gender,
            profile_pic_path: p.profile_pic_path,
            cover_pic_path: p.cover_pic_path,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Profile with derived follow counts.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub followers_count: u64,
    pub following_count: u64,
}

impl From<ProfileView> for ProfileViewResponse {
    fn from(v: ProfileView) -> Self {
        Self {
            profile: v.profile.into(),
            followers_count: v.followers_count,
            following_count: v.following_count,
        }
    }
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
}

/// Create the caller's profile. One per identity.
async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<ProfileResponse>> {
    let profile = state.profile_service.create(&user.id).await?;
    Ok(ApiResponse::created(profile.into()))
}

/// List profiles.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<ProfileResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let profiles = state
        .profile_service
        .list(limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(
        profiles.into_iter().map(Into::into).collect(),
    ))
}

/// Get the caller's own profile with follow counts.
async fn me(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<ProfileViewResponse>> {
    let view = state.profile_service.get_view(&profile.id).await?;
    Ok(ApiResponse::ok(view.into()))
}

/// Get a profile with follow counts.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProfileViewResponse>> {
    let view = state.profile_service.get_view(&id).await?;
    Ok(ApiResponse::ok(view.into()))
}

/// Update a profile. Owner only.
async fn update(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProfileInput>,
) -> AppResult<ApiResponse<ProfileResponse>> {
    if profile.id != id {
        return Err(linkup_common::AppError::Forbidden);
    }

    let updated = state.profile_service.update(&id, input).await?;
    Ok(ApiResponse::ok(updated.into()))
}

/// Delete a profile. Owner or admin.
async fn delete(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let is_admin = user.role == linkup_db::entities::user::Role::Admin;
    state.profile_service.delete(&id, &user.id, is_admin).await?;
    Ok(no_content())
}

/// List posts owned by a profile.
async fn list_posts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<posts::PostResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let models = state
        .post_service
        .list_by_owner(&id, limit, query.until_id.as_deref())
        .await?;

    let mut responses = Vec::with_capacity(models.len());
    for model in models {
        responses.push(posts::with_counts(&state, model).await?);
    }

    Ok(ApiResponse::ok(responses))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/me", get(me))
        .route(
            "/{id}",
            get(get_one).put(update).delete(delete),
        )
        .route("/{id}/posts", get(list_posts))
}
