//! API endpoints.

mod applications;
mod auth;
mod career;
mod comments;
mod follow;
mod jobs;
mod notifications;
mod posts;
mod profiles;
mod reactions;
mod replies;
mod users;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/profiles", profiles::router())
        .nest("/follow", follow::router())
        .nest("/career", career::router())
        .nest("/posts", posts::router())
        .merge(comments::router())
        .merge(replies::router())
        .merge(reactions::router())
        .nest("/notifications", notifications::router())
        .nest("/jobs", jobs::router())
        .merge(applications::router())
}

/// Default page size for list endpoints.
pub(crate) const fn default_limit() -> u64 {
    10
}

/// Cap a requested page size.
pub(crate) const MAX_LIMIT: u64 = 100;
