//! Post repository.

use std::sync::Arc;

use crate::entities::{post, Post};
use linkup_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Post repository for database operations.
#[derive(Clone)]
pub struct PostRepository {
    db: Arc<DatabaseConnection>,
}

impl PostRepository {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<post::Model>> {
        Post::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new post.
    pub async fn create(&self, model: post::ActiveModel) -> AppResult<post::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a post.
    pub async fn update(&self, model: post::ActiveModel) -> AppResult<post::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a post.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let post = self.find_by_id(id).await?;
        if let Some(p) = post {
            p.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// List posts across the instance (paginated).
    pub async fn find_all(&self, limit: u64, until_id: Option<&str>) -> AppResult<Vec<post::Model>> {
        let mut query = Post::find().order_by_desc(post::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(post::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List posts owned by a profile (paginated).
    pub async fn find_by_owner(
        &self,
        owner_id: &str,
        limit: u64,
        until_id: Option<&str>,
    ) -> AppResult<Vec<post::Model>> {
        let mut query = Post::find()
            .filter(post::Column::OwnerId.eq(owner_id))
            .order_by_desc(post::Column::Id);

        if let Some(id) = until_id {
            query = query.filter(post::Column::Id.lt(id));
        }

        query
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Walk the parent chain from a post, returning visited IDs in order.
    ///
    /// Used to reject share cycles before insert. The walk is bounded so a
    /// corrupted chain cannot loop forever.
    pub async fn ancestor_ids(&self, post_id: &str, max_depth: usize) -> AppResult<Vec<String>> {
        let mut ids = Vec::new();
        let mut current = Some(post_id.to_string());

        while let Some(id) = current {
            if ids.len() >= max_depth {
                break;
            }
            let Some(post) = self.find_by_id(&id).await? else {
                break;
            };
            if ids.contains(&post.id) {
                break;
            }
            ids.push(post.id.clone());
            current = post.parent_post_id;
        }

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_post(id: &str, owner_id: &str, parent: Option<&str>) -> post::Model {
        post::Model {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            parent_post_id: parent.map(ToString::to_string),
            text_body: "hello".to_string(),
            media_path: None,
            edited: false,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let post = create_test_post("n1", "p1", None);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[post.clone()]])
                .into_connection(),
        );

        let repo = PostRepository::new(db);
        let result = repo.find_by_id("n1").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().owner_id, "p1");
    }

    #[tokio::test]
    async fn test_find_by_owner() {
        let p1 = create_test_post("n2", "p1", None);
        let p2 = create_test_post("n1", "p1", None);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[p1, p2]])
                .into_connection(),
        );

        let repo = PostRepository::new(db);
        let result = repo.find_by_owner("p1", 10, None).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_ancestor_ids_walks_chain() {
        let child = create_test_post("n3", "p1", Some("n2"));
        let middle = create_test_post("n2", "p2", Some("n1"));
        let root = create_test_post("n1", "p3", None);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[child], [middle], [root]])
                .into_connection(),
        );

        let repo = PostRepository::new(db);
        let ids = repo.ancestor_ids("n3", 16).await.unwrap();

        assert_eq!(ids, vec!["n3", "n2", "n1"]);
    }

    #[tokio::test]
    async fn test_ancestor_ids_bounded() {
        let a = create_test_post("a", "p1", Some("b"));
        let b = create_test_post("b", "p2", Some("a"));
        let a2 = create_test_post("a", "p1", Some("b"));

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[a], [b], [a2]])
                .into_connection(),
        );

        let repo = PostRepository::new(db);
        let ids = repo.ancestor_ids("a", 16).await.unwrap();

        // The revisited ID stops the walk
        assert_eq!(ids, vec!["a", "b"]);
    }
}
