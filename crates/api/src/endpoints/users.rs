//! User endpoints.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use linkup_common::{AppError, AppResult};
use linkup_db::entities::user::{self, Role};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::AuthUser,
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Identity as it appears on the wire. Never includes the password hash.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            role: u.role,
            is_active: u.is_active,
            created_at: u.created_at.to_rfc3339(),
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

/// List identities.
async fn list(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<UserResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let users = state
        .user_service
        .list(limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(users.into_iter().map(Into::into).collect()))
}

/// Delete an identity. Self or admin only.
async fn delete(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if user.id != id && user.role != Role::Admin {
        return Err(AppError::Forbidden);
    }

    state.user_service.delete(&id).await?;
    Ok(no_content())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", axum::routing::delete(delete))
}
