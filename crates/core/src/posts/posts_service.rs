use crate::errors::Result;
use crate::posts::posts_errors::PostError;
use crate::posts::posts_model::{NewPost, Post, PostUpdate};
use crate::posts::posts_traits::{PostRepositoryTrait, PostServiceTrait};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

pub struct PostService<T: PostRepositoryTrait> {
    post_repo: Arc<T>,
}

impl<T: PostRepositoryTrait> PostService<T> {
    pub fn new(post_repo: Arc<T>) -> Self {
        PostService { post_repo }
    }
}

#[async_trait]
impl<T: PostRepositoryTrait + Send + Sync> PostServiceTrait for PostService<T> {
    fn get_posts(&self) -> Result<Vec<Post>> {
        self.post_repo.list_posts()
    }

    fn get_post(&self, post_id: i32) -> Result<Post> {
        self.post_repo
            .find_post(post_id)?
            .ok_or_else(|| PostError::NotFound(post_id).into())
    }

    fn count_posts(&self) -> Result<i64> {
        self.post_repo.count_posts()
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        let post = self.post_repo.insert_post(new_post).await?;
        info!("Created post {}", post.id);
        Ok(post)
    }

    async fn update_post(&self, post_update: PostUpdate) -> Result<Post> {
        let post_id = post_update.id;
        let post = self
            .post_repo
            .update_post(post_update)
            .await?
            .ok_or(PostError::NotFound(post_id))?;
        debug!("Updated post {}", post_id);
        Ok(post)
    }

    async fn delete_post(&self, post_id: i32) -> Result<()> {
        let removed = self.post_repo.delete_post(post_id).await?;
        if removed == 0 {
            return Err(PostError::NotFound(post_id).into());
        }
        info!("Deleted post {}", post_id);
        Ok(())
    }
}
