//! Comment endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use linkup_common::AppResult;
use linkup_core::{CreateCommentInput, UpdateCommentInput};
use linkup_db::entities::{comment, user::Role};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::{AuthProfile, AuthUser},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Comment as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub owner_id: String,
    pub text: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<comment::Model> for CommentResponse {
    fn from(c: comment::Model) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            owner_id: c.owner_id,
            text: c.text,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Comment on a post.
async fn create(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(input): Json<CreateCommentInput>,
) -> AppResult<ApiResponse<CommentResponse>> {
    let comment = state
        .comment_service
        .create(&post_id, &profile.id, input)
        .await?;

    Ok(ApiResponse::created(comment.into()))
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
}

/// List comments on a post.
async fn list(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<CommentResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let comments = state
        .comment_service
        .list_by_post(&post_id, limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(
        comments.into_iter().map(Into::into).collect(),
    ))
}

/// Update a comment. Owner only.
async fn update(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCommentInput>,
) -> AppResult<ApiResponse<CommentResponse>> {
    let comment = state.comment_service.update(&id, &profile.id, input).await?;
    Ok(ApiResponse::ok(comment.into()))
}

/// Delete a comment. Owner or admin.
async fn delete(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let is_admin = user.role == Role::Admin;
    state.comment_service.delete(&id, &profile.id, is_admin).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts/{post_id}/comments", get(list).post(create))
        .route("/comments/{id}", put(update).delete(delete))
}
