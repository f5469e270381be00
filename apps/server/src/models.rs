use chrono::NaiveDateTime;
use forum_core::posts as core_posts;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_posts::Post> for Post {
    fn from(p: core_posts::Post) -> Self {
        Self {
            id: p.id,
            content: p.content,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub content: String,
}

impl From<NewPost> for core_posts::NewPost {
    fn from(p: NewPost) -> Self {
        core_posts::NewPost::new(p.content)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub content: String,
}

impl PostUpdate {
    pub fn into_core(self, id: i32) -> core_posts::PostUpdate {
        core_posts::PostUpdate::new(id, self.content)
    }
}

/// Body of the HTML create and edit forms.
///
/// `content` is optional here so a missing field is reported as a
/// validation error rather than a generic form rejection.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PostForm {
    pub content: Option<String>,
}
