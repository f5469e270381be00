use forum_core::posts::{NewPost, Post, PostRepositoryTrait, PostUpdate};
use forum_core::Result;

use super::model::{NewPostDB, PostChangesDB, PostDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::posts;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct PostRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PostRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PostRepository { pool, writer }
    }
}

#[async_trait]
impl PostRepositoryTrait for PostRepository {
    fn list_posts(&self) -> Result<Vec<Post>> {
        let mut conn = get_connection(&self.pool)?;
        let posts_db = posts::table
            .order(posts::id.asc())
            .select(PostDB::as_select())
            .load::<PostDB>(&mut conn)
            .into_core()?;
        Ok(posts_db.into_iter().map(Post::from).collect())
    }

    fn find_post(&self, post_id: i32) -> Result<Option<Post>> {
        let mut conn = get_connection(&self.pool)?;
        let post_db = posts::table
            .find(post_id)
            .select(PostDB::as_select())
            .first::<PostDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(post_db.map(Post::from))
    }

    fn count_posts(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        posts::table.count().get_result::<i64>(&mut conn).into_core()
    }

    async fn insert_post(&self, new_post: NewPost) -> Result<Post> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Post> {
                let new_post_db = NewPostDB::from_domain(new_post, Utc::now().naive_utc());

                let result_db = diesel::insert_into(posts::table)
                    .values(&new_post_db)
                    .returning(PostDB::as_returning())
                    .get_result::<PostDB>(conn)
                    .into_core()?;
                Ok(Post::from(result_db))
            })
            .await
    }

    async fn update_post(&self, post_update: PostUpdate) -> Result<Option<Post>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Post>> {
                let changes = PostChangesDB::from_domain(&post_update, Utc::now().naive_utc());

                let result_db = diesel::update(posts::table.find(post_update.id))
                    .set(&changes)
                    .returning(PostDB::as_returning())
                    .get_result::<PostDB>(conn)
                    .optional()
                    .into_core()?;
                Ok(result_db.map(Post::from))
            })
            .await
    }

    async fn delete_post(&self, post_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(posts::table.find(post_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
