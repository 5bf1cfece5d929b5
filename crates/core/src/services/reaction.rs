//! Reaction service.
//!
//! A profile holds at most one reaction per target. Reacting again with a
//! different kind updates the existing row; the caller is told which
//! happened so the API can answer created versus ok.

use linkup_common::{AppError, AppResult, IdGenerator};
use linkup_db::{
    entities::{comment_reaction, post_reaction, reply_reaction, ReactionKind},
    repositories::{
        CommentReactionRepository, CommentReplyRepository, CommentRepository,
        PostReactionRepository, PostRepository, ReplyReactionRepository,
    },
};
use sea_orm::Set;

/// Whether an upsert created a new reaction or changed an existing one.
#[derive(Debug, Clone)]
pub enum ReactionOutcome<T> {
    /// A new reaction row was inserted.
    Created(T),
    /// An existing row's kind was updated.
    Updated(T),
}

impl<T> ReactionOutcome<T> {
    /// True when the upsert inserted a new row.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// The reaction row either way.
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(model) | Self::Updated(model) => model,
        }
    }

    /// Borrow the reaction row either way.
    pub const fn as_ref(&self) -> &T {
        match self {
            Self::Created(model) | Self::Updated(model) => model,
        }
    }
}

/// Reaction service for business logic.
#[derive(Clone)]
pub struct ReactionService {
    post_reaction_repo: PostReactionRepository,
    comment_reaction_repo: CommentReactionRepository,
    reply_reaction_repo: ReplyReactionRepository,
    post_repo: PostRepository,
    comment_repo: CommentRepository,
    reply_repo: CommentReplyRepository,
    id_gen: IdGenerator,
}

impl ReactionService {
    /// Create a new reaction service.
    #[must_use]
    pub fn new(
        post_reaction_repo: PostReactionRepository,
        comment_reaction_repo: CommentReactionRepository,
        reply_reaction_repo: ReplyReactionRepository,
        post_repo: PostRepository,
        comment_repo: CommentRepository,
        reply_repo: CommentReplyRepository,
    ) -> Self {
        Self {
            post_reaction_repo,
            comment_reaction_repo,
            reply_reaction_repo,
            post_repo,
            comment_repo,
            reply_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// React to a post, inserting or updating the profile's reaction.
    pub async fn react_to_post(
        &self,
        post_id: &str,
        profile_id: &str,
        kind: ReactionKind,
    ) -> AppResult<ReactionOutcome<post_reaction::Model>> {
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::PostNotFound);
        }

        if let Some(existing) = self
            .post_reaction_repo
            .find_by_pair(post_id, profile_id)
            .await?
        {
            if existing.kind == kind {
                return Ok(ReactionOutcome::Updated(existing));
            }
            let mut active: post_reaction::ActiveModel = existing.into();
            active.kind = Set(kind);
            active.updated_at = Set(Some(chrono::Utc::now().into()));
            let updated = self.post_reaction_repo.update(active).await?;
            return Ok(ReactionOutcome::Updated(updated));
        }

        let model = post_reaction::ActiveModel {
            id: Set(self.id_gen.generate()),
            post_id: Set(post_id.to_string()),
            profile_id: Set(profile_id.to_string()),
            kind: Set(kind),
            ..Default::default()
        };

        let created = self.post_reaction_repo.create(model).await?;
        Ok(ReactionOutcome::Created(created))
    }

    /// Remove the reaction a profile left on a post.
    pub async fn remove_post_reaction(&self, post_id: &str, profile_id: &str) -> AppResult<()> {
        let reaction = self
            .post_reaction_repo
            .find_by_pair(post_id, profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reaction not found".to_string()))?;

        self.post_reaction_repo.delete(&reaction.id).await
    }

    /// Count reactions on a post.
    pub async fn count_post_reactions(&self, post_id: &str) -> AppResult<u64> {
        self.post_reaction_repo.count_by_post(post_id).await
    }

    /// List reactions on a post.
    pub async fn list_post_reactions(
        &self,
        post_id: &str,
    ) -> AppResult<Vec<post_reaction::Model>> {
        self.post_reaction_repo.find_by_post(post_id).await
    }

    /// React to a comment, inserting or updating the profile's reaction.
    pub async fn react_to_comment(
        &self,
        comment_id: &str,
        profile_id: &str,
        kind: ReactionKind,
    ) -> AppResult<ReactionOutcome<comment_reaction::Model>> {
        if self.comment_repo.find_by_id(comment_id).await?.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        if let Some(existing) = self
            .comment_reaction_repo
            .find_by_pair(comment_id, profile_id)
            .await?
        {
            if existing.kind == kind {
                return Ok(ReactionOutcome::Updated(existing));
            }
            let mut active: comment_reaction::ActiveModel = existing.into();
            active.kind = Set(kind);
            active.updated_at = Set(Some(chrono::Utc::now().into()));
            let updated = self.comment_reaction_repo.update(active).await?;
            return Ok(ReactionOutcome::Updated(updated));
        }

        let model = comment_reaction::ActiveModel {
            id: Set(self.id_gen.generate()),
            comment_id: Set(comment_id.to_string()),
            profile_id: Set(profile_id.to_string()),
            kind: Set(kind),
            ..Default::default()
        };

        let created = self.comment_reaction_repo.create(model).await?;
        Ok(ReactionOutcome::Created(created))
    }

    /// Remove the reaction a profile left on a comment.
    pub async fn remove_comment_reaction(
        &self,
        comment_id: &str,
        profile_id: &str,
    ) -> AppResult<()> {
        let reaction = self
            .comment_reaction_repo
            .find_by_pair(comment_id, profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reaction not found".to_string()))?;

        self.comment_reaction_repo.delete(&reaction.id).await
    }

    /// List reactions on a comment.
    pub async fn list_comment_reactions(
        &self,
        comment_id: &str,
    ) -> AppResult<Vec<comment_reaction::Model>> {
        self.comment_reaction_repo.find_by_comment(comment_id).await
    }

    /// React to a reply, inserting or updating the profile's reaction.
    pub async fn react_to_reply(
        &self,
        reply_id: &str,
        profile_id: &str,
        kind: ReactionKind,
    ) -> AppResult<ReactionOutcome<reply_reaction::Model>> {
        if self.reply_repo.find_by_id(reply_id).await?.is_none() {
            return Err(AppError::NotFound("Reply not found".to_string()));
        }

        if let Some(existing) = self
            .reply_reaction_repo
            .find_by_pair(reply_id, profile_id)
            .await?
        {
            if existing.kind == kind {
                return Ok(ReactionOutcome::Updated(existing));
            }
            let mut active: reply_reaction::ActiveModel = existing.into();
            active.kind = Set(kind);
            active.updated_at = Set(Some(chrono::Utc::now().into()));
            let updated = self.reply_reaction_repo.update(active).await?;
            return Ok(ReactionOutcome::Updated(updated));
        }

        let model = reply_reaction::ActiveModel {
            id: Set(self.id_gen.generate()),
            reply_id: Set(reply_id.to_string()),
            profile_id: Set(profile_id.to_string()),
            kind: Set(kind),
            ..Default::default()
        };

        let created = self.reply_reaction_repo.create(model).await?;
        Ok(ReactionOutcome::Created(created))
    }

    /// Remove the reaction a profile left on a reply.
    pub async fn remove_reply_reaction(&self, reply_id: &str, profile_id: &str) -> AppResult<()> {
        let reaction = self
            .reply_reaction_repo
            .find_by_pair(reply_id, profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reaction not found".to_string()))?;

        self.reply_reaction_repo.delete(&reaction.id).await
    }

    /// List reactions on a reply.
    pub async fn list_reply_reactions(
        &self,
        reply_id: &str,
    ) -> AppResult<Vec<reply_reaction::Model>> {
        self.reply_reaction_repo.find_by_reply(reply_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkup_db::entities::post;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_post(id: &str) -> post::Model {
        post::Model {
            id: id.to_string(),
            owner_id: "p1".to_string(),
            parent_post_id: None,
            text_body: "hello".to_string(),
            media_path: None,
            edited: false,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn create_test_reaction(id: &str, post_id: &str, profile_id: &str) -> post_reaction::Model {
        post_reaction::Model {
            id: id.to_string(),
            post_id: post_id.to_string(),
            profile_id: profile_id.to_string(),
            kind: ReactionKind::Like,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn empty_db() -> Arc<sea_orm::DatabaseConnection> {
        Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    fn service(
        post_reaction_db: Arc<sea_orm::DatabaseConnection>,
        post_db: Arc<sea_orm::DatabaseConnection>,
    ) -> ReactionService {
        ReactionService::new(
            PostReactionRepository::new(post_reaction_db),
            CommentReactionRepository::new(empty_db()),
            ReplyReactionRepository::new(empty_db()),
            PostRepository::new(post_db),
            CommentRepository::new(empty_db()),
            CommentReplyRepository::new(empty_db()),
        )
    }

    #[tokio::test]
    async fn test_react_to_missing_post() {
        let post_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<post::Model>::new()])
                .into_connection(),
        );

        let service = service(empty_db(), post_db);
        let result = service
            .react_to_post("missing", "p1", ReactionKind::Like)
            .await;

        assert!(matches!(result, Err(AppError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_first_reaction_is_created() {
        let reaction = create_test_reaction("r1", "n1", "p2");

        let post_reaction_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<post_reaction::Model>::new()])
                .append_query_results([[reaction]])
                .into_connection(),
        );
        let post_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_post("n1")]])
                .into_connection(),
        );

        let service = service(post_reaction_db, post_db);
        let outcome = service
            .react_to_post("n1", "p2", ReactionKind::Like)
            .await
            .unwrap();

        assert!(outcome.is_created());
    }

    #[tokio::test]
    async fn test_repeat_reaction_is_updated() {
        let existing = create_test_reaction("r1", "n1", "p2");
        let mut changed = existing.clone();
        changed.kind = ReactionKind::Celebrate;

        let post_reaction_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .append_query_results([[changed.clone()]])
                .into_connection(),
        );
        let post_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_post("n1")]])
                .into_connection(),
        );

        let service = service(post_reaction_db, post_db);
        let outcome = service
            .react_to_post("n1", "p2", ReactionKind::Celebrate)
            .await
            .unwrap();

        assert!(!outcome.is_created());
        assert_eq!(outcome.into_inner().kind, ReactionKind::Celebrate);
    }

    #[tokio::test]
    async fn test_remove_missing_reaction() {
        let post_reaction_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<post_reaction::Model>::new()])
                .into_connection(),
        );

        let service = service(post_reaction_db, empty_db());
        let result = service.remove_post_reaction("n1", "p2").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
