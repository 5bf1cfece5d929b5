//! Linkup server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use linkup_api::{middleware::AppState, router as api_router};
use linkup_common::Config;
use linkup_core::{
    CertificationService, CommentReplyService, CommentService, CourseService, EducationService,
    ExperienceService, FollowService, JobApplicationService, JobPostService, NotificationService,
    PostService, ProfileService, ReactionService, UserService,
};
use linkup_db::repositories::{
    AccessTokenRepository, CertificationRepository, CommentReactionRepository,
    CommentReplyRepository, CommentRepository, CourseRepository, EducationRepository,
    ExperienceRepository, FollowRepository, JobApplicationRepository, JobPostRepository,
    NotificationRepository, PostReactionRepository, PostRepository, ProfileRepository,
    ReplyReactionRepository, TagRepository, UserRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkup=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting linkup server...");

    let config = Config::load()?;

    let db = linkup_db::init(&config).await?;
    info!("Connected to database");

    info!("Running database migrations...");
    linkup_db::migrate(&db).await?;
    info!("Migrations completed");

    let db = Arc::new(db);

    // Repositories
    let user_repo = UserRepository::new(Arc::clone(&db));
    let token_repo = AccessTokenRepository::new(Arc::clone(&db));
    let profile_repo = ProfileRepository::new(Arc::clone(&db));
    let follow_repo = FollowRepository::new(Arc::clone(&db));
    let post_repo = PostRepository::new(Arc::clone(&db));
    let comment_repo = CommentRepository::new(Arc::clone(&db));
    let reply_repo = CommentReplyRepository::new(Arc::clone(&db));
    let post_reaction_repo = PostReactionRepository::new(Arc::clone(&db));
    let comment_reaction_repo = CommentReactionRepository::new(Arc::clone(&db));
    let reply_reaction_repo = ReplyReactionRepository::new(Arc::clone(&db));
    let notification_repo = NotificationRepository::new(Arc::clone(&db));
    let experience_repo = ExperienceRepository::new(Arc::clone(&db));
    let education_repo = EducationRepository::new(Arc::clone(&db));
    let certification_repo = CertificationRepository::new(Arc::clone(&db));
    let course_repo = CourseRepository::new(Arc::clone(&db));
    let job_post_repo = JobPostRepository::new(Arc::clone(&db));
    let tag_repo = TagRepository::new(Arc::clone(&db));
    let application_repo = JobApplicationRepository::new(Arc::clone(&db));

    // Services
    let user_service = UserService::new(user_repo, token_repo);
    let profile_service = ProfileService::new(profile_repo.clone(), follow_repo.clone());
    let follow_service = FollowService::new(follow_repo.clone(), profile_repo.clone());
    let notification_service =
        NotificationService::new(notification_repo.clone(), follow_repo.clone());
    let post_service = PostService::new(post_repo.clone(), notification_service.clone());
    let comment_service = CommentService::new(comment_repo.clone(), post_repo.clone());
    let reply_service = CommentReplyService::new(reply_repo.clone(), comment_repo.clone());
    let reaction_service = ReactionService::new(
        post_reaction_repo,
        comment_reaction_repo,
        reply_reaction_repo,
        post_repo.clone(),
        comment_repo.clone(),
        reply_repo.clone(),
    );
    let experience_service = ExperienceService::new(experience_repo);
    let education_service = EducationService::new(education_repo);
    let certification_service = CertificationService::new(certification_repo);
    let course_service = CourseService::new(course_repo);
    let job_post_service = JobPostService::new(job_post_repo.clone(), tag_repo);
    let job_application_service =
        JobApplicationService::new(application_repo, job_post_repo.clone());

    let state = AppState {
        user_service,
        profile_service,
        follow_service,
        post_service,
        comment_service,
        reply_service,
        reaction_service,
        notification_service,
        experience_service,
        education_service,
        certification_service,
        course_service,
        job_post_service,
        job_application_service,
    };

    let app = Router::new()
        .nest("/api", api_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            linkup_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
