//! Follow graph endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use linkup_common::AppResult;
use linkup_db::entities::follow;
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::AuthProfile,
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Follow request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub profile_id: String,
}

/// Follow edge as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub id: String,
    pub follower_id: String,
    pub followee_id: String,
    pub created_at: String,
}

impl From<follow::Model> for FollowResponse {
    fn from(f: follow::Model) -> Self {
        Self {
            id: f.id,
            follower_id: f.follower_id,
            followee_id: f.followee_id,
            created_at: f.created_at.to_rfc3339(),
        }
    }
}

/// Follow a profile.
async fn create(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(req): Json<FollowRequest>,
) -> AppResult<ApiResponse<FollowResponse>> {
    let edge = state
        .follow_service
        .follow(&profile.id, &req.profile_id)
        .await?;

    Ok(ApiResponse::created(edge.into()))
}

/// Unfollow a profile.
async fn remove(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> AppResult<StatusCode> {
    state.follow_service.unfollow(&profile.id, &profile_id).await?;
    Ok(no_content())
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
}

/// List the caller's followers.
async fn followers(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<FollowResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let edges = state
        .follow_service
        .get_followers(&profile.id, limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(edges.into_iter().map(Into::into).collect()))
}

/// List profiles the caller follows.
async fn following(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<FollowResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let edges = state
        .follow_service
        .get_following(&profile.id, limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(edges.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create))
        .route("/followers", get(followers))
        .route("/following", get(following))
        .route("/{profile_id}", delete(remove))
}
