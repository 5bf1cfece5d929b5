//! Notification endpoints.

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use linkup_common::{AppResult, relative_time};
use linkup_db::entities::notification;
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{MAX_LIMIT, default_limit},
    extractors::AuthProfile,
    middleware::AppState,
    response::ApiResponse,
};

/// Notification as it appears on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: String,
    pub recipient_id: String,
    pub message: String,
    pub post_id: String,
    pub time_ago: String,
    pub created_at: String,
}

impl From<notification::Model> for NotificationResponse {
    fn from(n: notification::Model) -> Self {
        Self {
            time_ago: relative_time(n.created_at),
            created_at: n.created_at.to_rfc3339(),
            id: n.id,
            recipient_id: n.recipient_id,
            message: n.message,
            post_id: n.post_id,
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

/// List the caller's notifications, newest first.
async fn list(
    AuthProfile(profile): AuthProfile,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<NotificationResponse>>> {
    let limit = query.limit.min(MAX_LIMIT);
    let notifications = state
        .notification_service
        .list(&profile.id, limit, query.until_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(
        notifications.into_iter().map(Into::into).collect(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list))
}
