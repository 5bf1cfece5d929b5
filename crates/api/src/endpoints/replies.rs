//! Comment reply endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use linkup_common::AppResult;
use linkup_core::{CreateReplyInput, UpdateReplyInput};
use linkup_db::entities::{comment_reply, user::Role};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::{AuthProfile, AuthUser},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Reply as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: String,
    pub comment_id: String,
    pub owner_id: String,
    pub text: String,
    pub media_path: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<comment_reply::Model> for ReplyResponse {
    fn from(r: comment_reply::Model) -> Self {
        Self {
            id: r.id,
            comment_id: r.comment_id,
            owner_id: r.owner_id,
            text: r.text,
            media_path: r.media_path,
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Reply to a comment.
async fn create(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(input): Json<CreateReplyInput>,
) -> AppResult<ApiResponse<ReplyResponse>> {
    let reply = state
        .reply_service
        .create(&comment_id, &profile.id, input)
        .await?;

    Ok(ApiResponse::created(reply.into()))
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
}

/// List replies to a comment.
async fn list(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<ReplyResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let replies = state
        .reply_service
        .list_by_comment(&comment_id, limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(
        replies.into_iter().map(Into::into).collect(),
    ))
}

/// Update a reply. Owner only.
async fn update(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateReplyInput>,
) -> AppResult<ApiResponse<ReplyResponse>> {
    let reply = state.reply_service.update(&id, &profile.id, input).await?;
    Ok(ApiResponse::ok(reply.into()))
}

/// Delete a reply. Owner or admin.
async fn delete(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let is_admin = user.role == Role::Admin;
    state.reply_service.delete(&id, &profile.id, is_admin).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments/{comment_id}/replies", get(list).post(create))
        .route("/replies/{id}", put(update).delete(delete))
}
