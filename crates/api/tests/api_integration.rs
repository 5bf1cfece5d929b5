//! API integration tests.
//!
//! Drives the assembled router with mock-backed state and checks status
//! codes and bodies at the HTTP boundary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use linkup_api::{middleware::AppState, router as api_router};
use linkup_core::{
    CertificationService, CommentReplyService, CommentService, CourseService, EducationService,
    ExperienceService, FollowService, JobApplicationService, JobPostService, NotificationService,
    PostService, ProfileService, ReactionService, UserService,
};
use linkup_db::entities::post;
use linkup_db::repositories::{
    AccessTokenRepository, CertificationRepository, CommentReactionRepository,
    CommentReplyRepository, CommentRepository, CourseRepository, EducationRepository,
    ExperienceRepository, FollowRepository, JobApplicationRepository, JobPostRepository,
    NotificationRepository, PostReactionRepository, PostRepository, ProfileRepository,
    ReplyReactionRepository, TagRepository, UserRepository,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use tower::ServiceExt;

fn empty_db() -> Arc<DatabaseConnection> {
    Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

/// Build app state where every repository sits on its own mock connection.
/// `post_db` backs the post repository so list tests can seed results.
fn test_state(post_db: Arc<DatabaseConnection>) -> AppState {
    let user_repo = UserRepository::new(empty_db());
    let token_repo = AccessTokenRepository::new(empty_db());
    let profile_repo = ProfileRepository::new(empty_db());
    let follow_repo = FollowRepository::new(empty_db());
    let post_repo = PostRepository::new(post_db);
    let comment_repo = CommentRepository::new(empty_db());
    let reply_repo = CommentReplyRepository::new(empty_db());
    let job_post_repo = JobPostRepository::new(empty_db());

    let notification_service =
        NotificationService::new(NotificationRepository::new(empty_db()), follow_repo.clone());

    AppState {
        user_service: UserService::new(user_repo, token_repo),
        profile_service: ProfileService::new(profile_repo.clone(), follow_repo.clone()),
        follow_service: FollowService::new(follow_repo, profile_repo),
        post_service: PostService::new(post_repo.clone(), notification_service.clone()),
        comment_service: CommentService::new(comment_repo.clone(), post_repo.clone()),
        reply_service: CommentReplyService::new(reply_repo.clone(), comment_repo.clone()),
        reaction_service: ReactionService::new(
            PostReactionRepository::new(empty_db()),
            CommentReactionRepository::new(empty_db()),
            ReplyReactionRepository::new(empty_db()),
            post_repo,
            comment_repo,
            reply_repo,
        ),
        notification_service,
        experience_service: ExperienceService::new(ExperienceRepository::new(empty_db())),
        education_service: EducationService::new(EducationRepository::new(empty_db())),
        certification_service: CertificationService::new(CertificationRepository::new(empty_db())),
        course_service: CourseService::new(CourseRepository::new(empty_db())),
        job_post_service: JobPostService::new(job_post_repo.clone(), TagRepository::new(empty_db())),
        job_application_service: JobApplicationService::new(
            JobApplicationRepository::new(empty_db()),
            job_post_repo,
        ),
    }
}

fn test_app(post_db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .nest("/api", api_router())
        .with_state(test_state(post_db))
}

#[tokio::test]
async fn test_unauthenticated_notifications_rejected() {
    let app = test_app(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/notifications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthenticated_follow_rejected() {
    let app = test_app(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/follow")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"profileId":"profile2"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_posts_empty() {
    let post_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection(),
    );
    let app = test_app(post_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn test_register_mismatched_passwords_rejected() {
    let app = test_app(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"email":"alice@example.com","username":"alice","password":"password123","confirmPassword":"password456"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let app = test_app(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
