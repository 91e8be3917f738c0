use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse as _, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<post::Model> for PostSummaryEntity {
    fn from(value: post::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl PostRepository {
    /// Newest first. Empty vec when the table has no rows.
    pub async fn find_all(&self) -> Response<Vec<PostSummaryEntity>> {
        let posts = Post::find()
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .into_response("in find all posts")?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Exact primary-key match. Absence is `None`, never an error.
    pub async fn find_by_id(&self, id: i32) -> Response<Option<PostEntity>> {
        let post = Post::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find post by id")?;

        Ok(post.map(Into::into))
    }

    /// Inserts one row. `id` and `created_at` come from the storage
    /// defaults; callers validate non-emptiness before getting here.
    pub async fn create(&self, title: &str, content: &str) -> Response<i32> {
        let model = post::ActiveModel {
            title: ActiveValue::set(title.to_string()),
            content: ActiveValue::set(content.to_string()),
            ..Default::default()
        };

        let result = Post::insert(model)
            .exec(&self.db)
            .await
            .into_response("in insert post")?;

        Ok(result.last_insert_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{init_repository, Repository, StorageConfig};

    async fn repository(dir: &std::path::Path) -> Repository {
        init_repository(&StorageConfig {
            path: dir.join("board.db"),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_find_by_id_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path()).await;

        let id = repo.post.create("Hello", "World").await.unwrap();

        let post = repo.post.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path()).await;

        let first = repo.post.create("first", "a").await.unwrap();
        let second = repo.post.create("second", "b").await.unwrap();

        let posts = repo.post.find_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, second);
        assert_eq!(posts[0].title, "second");
        assert_eq!(posts[1].id, first);
        assert!(posts[0].id > posts[1].id);
    }

    #[tokio::test]
    async fn find_all_is_empty_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path()).await;

        assert!(repo.post.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_unknown_id_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path()).await;

        assert!(repo.post.find_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reinit_preserves_existing_rows() {
        let dir = tempfile::tempdir().unwrap();

        let repo = repository(dir.path()).await;
        let id = repo.post.create("kept", "across restarts").await.unwrap();
        drop(repo);

        // same path, fresh init: migrator must not touch existing data
        let repo = repository(dir.path()).await;
        let post = repo.post.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.title, "kept");
    }

    #[tokio::test]
    async fn init_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("nested");

        let repo = repository(&nested).await;
        repo.post.create("t", "c").await.unwrap();

        assert!(nested.join("board.db").exists());
    }
}
