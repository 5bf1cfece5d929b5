//! Reaction endpoints for posts, comments and replies.
//!
//! Reacting is an upsert: a second reaction from the same profile replaces
//! the kind in place. The response says which of the two happened.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use linkup_common::AppResult;
use linkup_core::ReactionOutcome;
use linkup_db::entities::{ReactionKind, comment_reaction, post_reaction, reply_reaction};
use serde::{Deserialize, Serialize};

use crate::{
    extractors::AuthProfile,
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Reaction request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactRequest {
    pub kind: ReactionKind,
}

/// Reaction as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub id: String,
    pub target_id: String,
    pub profile_id: String,
    pub kind: ReactionKind,
    /// `"created"` for a new reaction, `"updated"` for a replaced kind.
    pub status: &'static str,
}

impl ReactionResponse {
    fn from_post(outcome: &ReactionOutcome<post_reaction::Model>) -> Self {
        let status = outcome_status(outcome);
        let r = outcome.as_ref();
        Self {
            id: r.id.clone(),
            target_id: r.post_id.clone(),
            profile_id: r.profile_id.clone(),
            kind: r.kind,
            status,
        }
    }

    fn from_comment(outcome: &ReactionOutcome<comment_reaction::Model>) -> Self {
        let status = outcome_status(outcome);
        let r = outcome.as_ref();
        Self {
            id: r.id.clone(),
            target_id: r.comment_id.clone(),
            profile_id: r.profile_id.clone(),
            kind: r.kind,
            status,
        }
    }

    fn from_reply(outcome: &ReactionOutcome<reply_reaction::Model>) -> Self {
        let status = outcome_status(outcome);
        let r = outcome.as_ref();
        Self {
            id: r.id.clone(),
            target_id: r.reply_id.clone(),
            profile_id: r.profile_id.clone(),
            kind: r.kind,
            status,
        }
    }
}

const fn outcome_status<T>(outcome: &ReactionOutcome<T>) -> &'static str {
    if outcome.is_created() { "created" } else { "updated" }
}

/// React to a post.
async fn react_to_post(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(req): Json<ReactRequest>,
) -> AppResult<ApiResponse<ReactionResponse>> {
    let outcome = state
        .reaction_service
        .react_to_post(&post_id, &profile.id, req.kind)
        .await?;

    Ok(ApiResponse::created(ReactionResponse::from_post(&outcome)))
}

/// Remove the caller's reaction from a post.
async fn remove_post_reaction(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .reaction_service
        .remove_post_reaction(&post_id, &profile.id)
        .await?;
    Ok(no_content())
}

/// List reactions on a post.
async fn list_post_reactions(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<ApiResponse<Vec<ReactionItem>>> {
    let reactions = state.reaction_service.list_post_reactions(&post_id).await?;
    Ok(ApiResponse::ok(
        reactions
            .into_iter()
            .map(|r| ReactionItem {
                id: r.id,
                target_id: r.post_id,
                profile_id: r.profile_id,
                kind: r.kind,
                created_at: r.created_at.to_rfc3339(),
            })
            .collect(),
    ))
}

/// Listed reaction row.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionItem {
    pub id: String,
    pub target_id: String,
    pub profile_id: String,
    pub kind: ReactionKind,
    pub created_at: String,
}

/// React to a comment.
async fn react_to_comment(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(req): Json<ReactRequest>,
) -> AppResult<ApiResponse<ReactionResponse>> {
    let outcome = state
        .reaction_service
        .react_to_comment(&comment_id, &profile.id, req.kind)
        .await?;

    Ok(ApiResponse::created(ReactionResponse::from_comment(&outcome)))
}

/// Remove the caller's reaction from a comment.
async fn remove_comment_reaction(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .reaction_service
        .remove_comment_reaction(&comment_id, &profile.id)
        .await?;
    Ok(no_content())
}

/// List reactions on a comment.
async fn list_comment_reactions(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<ApiResponse<Vec<ReactionItem>>> {
    let reactions = state
        .reaction_service
        .list_comment_reactions(&comment_id)
        .await?;
    Ok(ApiResponse::ok(
        reactions
            .into_iter()
            .map(|r| ReactionItem {
                id: r.id,
                target_id: r.comment_id,
                profile_id: r.profile_id,
                kind: r.kind,
                created_at: r.created_at.to_rfc3339(),
            })
            .collect(),
    ))
}

/// React to a reply.
async fn react_to_reply(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(reply_id): Path<String>,
    Json(req): Json<ReactRequest>,
) -> AppResult<ApiResponse<ReactionResponse>> {
    let outcome = state
        .reaction_service
        .react_to_reply(&reply_id, &profile.id, req.kind)
        .await?;

    Ok(ApiResponse::created(ReactionResponse::from_reply(&outcome)))
}

/// Remove the caller's reaction from a reply.
async fn remove_reply_reaction(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Path(reply_id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .reaction_service
        .remove_reply_reaction(&reply_id, &profile.id)
        .await?;
    Ok(no_content())
}

/// List reactions on a reply.
async fn list_reply_reactions(
    State(state): State<AppState>,
    Path(reply_id): Path<String>,
) -> AppResult<ApiResponse<Vec<ReactionItem>>> {
    let reactions = state.reaction_service.list_reply_reactions(&reply_id).await?;
    Ok(ApiResponse::ok(
        reactions
            .into_iter()
            .map(|r| ReactionItem {
                id: r.id,
                target_id: r.reply_id,
                profile_id: r.profile_id,
                kind: r.kind,
                created_at: r.created_at.to_rfc3339(),
            })
            .collect(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/{post_id}/reactions",
            post(react_to_post)
                .get(list_post_reactions)
                .delete(remove_post_reaction),
        )
        .route(
            "/comments/{comment_id}/reactions",
            post(react_to_comment)
                .get(list_comment_reactions)
                .delete(remove_comment_reaction),
        )
        .route(
            "/replies/{reply_id}/reactions",
            post(react_to_reply)
                .get(list_reply_reactions)
                .delete(remove_reply_reaction),
        )
}
