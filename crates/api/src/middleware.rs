//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use linkup_core::{
    CertificationService, CommentReplyService, CommentService, CourseService, EducationService,
    ExperienceService, FollowService, JobApplicationService, JobPostService, NotificationService,
    PostService, ProfileService, ReactionService, UserService,
};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub profile_service: ProfileService,
    pub follow_service: FollowService,
    pub post_service: PostService,
    pub comment_service: CommentService,
    pub reply_service: CommentReplyService,
    pub reaction_service: ReactionService,
    pub notification_service: NotificationService,
    pub experience_service: ExperienceService,
    pub education_service: EducationService,
    pub certification_service: CertificationService,
    pub course_service: CourseService,
    pub job_post_service: JobPostService,
    pub job_application_service: JobApplicationService,
}

/// Authentication middleware.
///
/// Resolves a bearer token to its user and profile and stashes both in
/// request extensions. Anonymous or invalid-token requests pass through
/// untouched; handlers that need auth reject via the extractors.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && let Ok(user) = state.user_service.authenticate_by_token(token).await
    {
        if let Ok(profile) = state.profile_service.get_by_user(&user.id).await {
            req.extensions_mut().insert(profile);
        }
        req.extensions_mut().insert(user);
    }

    next.run(req).await
}
