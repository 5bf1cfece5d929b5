//! Reaction repositories for posts, comments and replies.
//!
//! All three follow the same shape: at most one reaction row per
//! (target, profile) pair, looked up by that pair so the service layer
//! can decide between insert and update.

use std::sync::Arc;

use crate::entities::{
    comment_reaction, post_reaction, reply_reaction, CommentReaction, PostReaction, ReplyReaction,
};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

/// Post reaction repository for database operations.
#[derive(Clone)]
pub struct PostReactionRepository {
    db: Arc<DatabaseConnection>,
}

impl PostReactionRepository {
    /// Create a new post reaction repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a reaction by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<post_reaction::Model>> {
        PostReaction::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the reaction a profile left on a post, if any.
    pub async fn find_by_pair(
        &self,
        post_id: &str,
        profile_id: &str,
    ) -> AppResult<Option<post_reaction::Model>> {
        PostReaction::find()
            .filter(post_reaction::Column::PostId.eq(post_id))
            .filter(post_reaction::Column::ProfileId.eq(profile_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new reaction.
    pub async fn create(&self, model: post_reaction::ActiveModel) -> AppResult<post_reaction::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a reaction (kind change).
    pub async fn update(&self, model: post_reaction::ActiveModel) -> AppResult<post_reaction::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a reaction.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let reaction = self.find_by_id(id).await?;
        if let Some(r) = reaction {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List reactions on a post.
    pub async fn find_by_post(&self, post_id: &str) -> AppResult<Vec<post_reaction::Model>> {
        PostReaction::find()
            .filter(post_reaction::Column::PostId.eq(post_id))
            .order_by_desc(post_reaction::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count reactions on a post.
    pub async fn count_by_post(&self, post_id: &str) -> AppResult<u64> {
        PostReaction::find()
            .filter(post_reaction::Column::PostId.eq(post_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// Comment reaction repository for database operations.
#[derive(Clone)]
pub struct CommentReactionRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentReactionRepository {
    /// Create a new comment reaction repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a reaction by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<comment_reaction::Model>> {
        CommentReaction::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the reaction a profile left on a comment, if any.
    pub async fn find_by_pair(
        &self,
        comment_id: &str,
        profile_id: &str,
    ) -> AppResult<Option<comment_reaction::Model>> {
        CommentReaction::find()
            .filter(comment_reaction::Column::CommentId.eq(comment_id))
            .filter(comment_reaction::Column::ProfileId.eq(profile_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new reaction.
    pub async fn create(
        &self,
        model: comment_reaction::ActiveModel,
    ) -> AppResult<comment_reaction::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a reaction (kind change).
    pub async fn update(
        &self,
        model: comment_reaction::ActiveModel,
    ) -> AppResult<comment_reaction::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a reaction.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let reaction = self.find_by_id(id).await?;
        if let Some(r) = reaction {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List reactions on a comment.
    pub async fn find_by_comment(
        &self,
        comment_id: &str,
    ) -> AppResult<Vec<comment_reaction::Model>> {
        CommentReaction::find()
            .filter(comment_reaction::Column::CommentId.eq(comment_id))
            .order_by_desc(comment_reaction::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// Reply reaction repository for database operations.
#[derive(Clone)]
pub struct ReplyReactionRepository {
    db: Arc<DatabaseConnection>,
}

impl ReplyReactionRepository {
    /// Create a new reply reaction repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a reaction by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<reply_reaction::Model>> {
        ReplyReaction::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the reaction a profile left on a reply, if any.
    pub async fn find_by_pair(
        &self,
        reply_id: &str,
        profile_id: &str,
    ) -> AppResult<Option<reply_reaction::Model>> {
        ReplyReaction::find()
            .filter(reply_reaction::Column::ReplyId.eq(reply_id))
            .filter(reply_reaction::Column::ProfileId.eq(profile_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new reaction.
    pub async fn create(
        &self,
        model: reply_reaction::ActiveModel,
    ) -> AppResult<reply_reaction::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a reaction (kind change).
    pub async fn update(
        &self,
        model: reply_reaction::ActiveModel,
    ) -> AppResult<reply_reaction::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a reaction.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let reaction = self.find_by_id(id).await?;
        if let Some(r) = reaction {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List reactions on a reply.
    pub async fn find_by_reply(&self, reply_id: &str) -> AppResult<Vec<reply_reaction::Model>> {
        ReplyReaction::find()
            .filter(reply_reaction::Column::ReplyId.eq(reply_id))
            .order_by_desc(reply_reaction::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
