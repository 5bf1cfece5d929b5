//! Database entities.

pub mod access_token;
pub mod certification;
pub mod comment;
pub mod comment_reaction;
pub mod comment_reply;
pub mod course;
pub mod education;
pub mod experience;
pub mod follow;
pub mod job_application;
pub mod job_post;
pub mod job_post_tag;
pub mod notification;
pub mod post;
pub mod post_reaction;
pub mod profile;
pub mod reaction_kind;
pub mod reply_reaction;
pub mod tag;
pub mod user;

pub use access_token::Entity as AccessToken;
pub use certification::Entity as Certification;
pub use comment::Entity as Comment;
pub use comment_reaction::Entity as CommentReaction;
pub use comment_reply::Entity as CommentReply;
pub use course::Entity as Course;
pub use education::Entity as Education;
pub use experience::Entity as Experience;
pub use follow::Entity as Follow;
pub use job_application::Entity as JobApplication;
pub use job_post::Entity as JobPost;
pub use job_post_tag::Entity as JobPostTag;
pub use notification::Entity as Notification;
pub use post::Entity as Post;
pub use post_reaction::Entity as PostReaction;
pub use profile::Entity as Profile;
pub use reaction_kind::ReactionKind;
pub use reply_reaction::Entity as ReplyReaction;
pub use tag::Entity as Tag;
pub use user::Entity as User;

#[cfg(test)]
mod tests {
    use sea_orm::{Related, RelationDef};

    // Every has_many relation needs the reverse Related impl on its target
    // entity or the Relation derive does not compile.
    #[test]
    fn test_reverse_relations_resolve() {
        let _: RelationDef = <super::post::Entity as Related<super::profile::Entity>>::to();
        let _: RelationDef = <super::notification::Entity as Related<super::profile::Entity>>::to();
        let _: RelationDef = <super::job_post_tag::Entity as Related<super::job_post::Entity>>::to();
        let _: RelationDef = <super::job_post_tag::Entity as Related<super::tag::Entity>>::to();
    }
}
