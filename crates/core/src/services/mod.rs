//! Business logic services.

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

pub use career::{
    CertificationInput, CertificationService, CourseInput, CourseService, EducationInput,
    EducationService, ExperienceInput, ExperienceService,
};
pub use comment::{CommentService, CreateCommentInput, UpdateCommentInput};
pub use comment_reply::{CommentReplyService, CreateReplyInput, UpdateReplyInput};
pub use follow::FollowService;
pub use job_application::{ApplyInput, JobApplicationService, UpdateApplicationInput};
pub use job_post::{CreateJobPostInput, JobPostService, JobPostView, UpdateJobPostInput};
pub use notification::NotificationService;
pub use post::{CreatePostInput, PostService, UpdatePostInput};
pub use profile::{ProfileService, ProfileView, UpdateProfileInput};
pub use reaction::{ReactionOutcome, ReactionService};
pub use user::{ChangePasswordInput, LoginInput, RegisterInput, UserService};
