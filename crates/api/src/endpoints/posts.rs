//! Post endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use linkup_common::{AppResult, relative_time};
use linkup_core::{CreatePostInput, UpdatePostInput};
use linkup_db::entities::{post, user::Role};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::{AuthProfile, AuthUser},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Post as it appears on the wire, with derived counts.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub owner_id: String,
    pub parent_post_id: Option<String>,
    pub text_body: String,
    pub media_path: Option<String>,
    pub edited: bool,
    pub reactions_count: u64,
    pub comments_count: u64,
    pub time_ago: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl PostResponse {
    fn new(p: post::Model, reactions_count: u64, comments_count: u64) -> Self {
        Self {
            time_ago: relative_time(p.created_at),
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.map(|t| t.to_rfc3339()),
            id: p.id,
            owner_id: p.owner_id,
            parent_post_id: p.parent_post_id,
            text_body: p.text_body,
            media_path: p.media_path,
            edited: p.edited,
            reactions_count,
            comments_count,
        }
    }
}

/// Attach reaction and comment counts to a post.
pub(crate) async fn with_counts(state: &AppState, model: post::Model) -> AppResult<PostResponse> {
    let reactions_count = state.reaction_service.count_post_reactions(&model.id).await?;
    let comments_count = state.comment_service.count_for_post(&model.id).await?;
    Ok(PostResponse::new(model, reactions_count, comments_count))
}

/// Create a post, fanning out notifications to followers.
async fn create(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Json(input): Json<CreatePostInput>,
) -> AppResult<ApiResponse<PostResponse>> {
    let post = state
        .post_service
        .create(&profile.id, &user.username, input)
        .await?;

    Ok(ApiResponse::created(PostResponse::new(post, 0, 0)))
}

/// List query params.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub until_id: Option<String>,
}

/// List posts, newest first.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<PostResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let models = state
        .post_service
        .list(limit, query.until_id.as_deref())
        .await?;

    let mut responses = Vec::with_capacity(models.len());
    for model in models {
        responses.push(with_counts(&state, model).await?);
    }

    Ok(ApiResponse::ok(responses))
}

/// Get a post.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<PostResponse>> {
    let model = state.post_service.get(&id).await?;
    Ok(ApiResponse::ok(with_counts(&state, model).await?))
}

/// Update a post. Owner only; marks it as edited.
async fn update(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePostInput>,
) -> AppResult<ApiResponse<PostResponse>> {
    let model = state.post_service.update(&id, &profile.id, input).await?;
    Ok(ApiResponse::ok(with_counts(&state, model).await?))
}

/// Delete a post. Owner or admin; dependents cascade.
async fn delete(
    AuthUser(user): AuthUser,
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let is_admin = user.role == Role::Admin;
    state.post_service.delete(&id, &profile.id, is_admin).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}
