//! Database repositories.
//!
//! Thin data-access layer over the entities. Repositories hold a shared
//! connection and translate database errors into application errors;
//! business rules live in the service layer above.

pub mod access_token;
pub mod career;
pub mod comment;
pub mod comment_reply;
pub mod follow;
pub mod job_application;
pub mod job_post;
pub mod notification;
pub mod post;
pub mod profile;
pub mod reaction;
pub mod user;

pub use access_token::AccessTokenRepository;
pub use career::{
    CertificationRepository, CourseRepository, EducationRepository, ExperienceRepository,
};
pub use comment::CommentRepository;
pub use comment_reply::CommentReplyRepository;
pub use follow::FollowRepository;
pub use job_application::JobApplicationRepository;
pub use job_post::{JobPostRepository, TagRepository};
pub use notification::NotificationRepository;
pub use post::PostRepository;
pub use profile::ProfileRepository;
pub use reaction::{CommentReactionRepository, PostReactionRepository, ReplyReactionRepository};
pub use user::UserRepository;
