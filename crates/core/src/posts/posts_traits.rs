use crate::errors::Result;
use crate::posts::posts_model::{NewPost, Post, PostUpdate};
use async_trait::async_trait;

/// Trait for post repository operations
#[async_trait]
pub trait PostRepositoryTrait: Send + Sync {
    /// All posts in creation order.
    fn list_posts(&self) -> Result<Vec<Post>>;
    fn find_post(&self, post_id: i32) -> Result<Option<Post>>;
    fn count_posts(&self) -> Result<i64>;
    async fn insert_post(&self, new_post: NewPost) -> Result<Post>;
    /// Returns `None` when no row has the given id.
    async fn update_post(&self, post_update: PostUpdate) -> Result<Option<Post>>;
    /// Returns the number of rows removed.
    async fn delete_post(&self, post_id: i32) -> Result<usize>;
}

/// Trait for post service operations
#[async_trait]
pub trait PostServiceTrait: Send + Sync {
    fn get_posts(&self) -> Result<Vec<Post>>;
    fn get_post(&self, post_id: i32) -> Result<Post>;
    fn count_posts(&self) -> Result<i64>;
    async fn create_post(&self, new_post: NewPost) -> Result<Post>;
    async fn update_post(&self, post_update: PostUpdate) -> Result<Post>;
    async fn delete_post(&self, post_id: i32) -> Result<()>;
}
