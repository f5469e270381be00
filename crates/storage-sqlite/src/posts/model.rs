//! Database models for posts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for posts
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostDB {
    pub id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new post; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPostDB {
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Columns touched by an update.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::posts)]
pub struct PostChangesDB {
    pub content: String,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<PostDB> for forum_core::posts::Post {
    fn from(db: PostDB) -> Self {
        Self {
            id: db.id,
            content: db.content,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewPostDB {
    pub fn from_domain(domain: forum_core::posts::NewPost, now: NaiveDateTime) -> Self {
        Self {
            content: domain.content,
            created_at: now,
            updated_at: now,
        }
    }
}

impl PostChangesDB {
    pub fn from_domain(domain: &forum_core::posts::PostUpdate, now: NaiveDateTime) -> Self {
        Self {
            content: domain.content.clone(),
            updated_at: now,
        }
    }
}
