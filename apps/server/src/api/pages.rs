//! Browser-facing resource controller for posts.
//!
//! Native verbs are routed directly (`PUT /{id}`, `DELETE /{id}`). HTML forms
//! can only send GET and POST, so the rendered forms target the
//! `/{id}/update` and `/{id}/delete` aliases instead.

use std::sync::Arc;

use crate::{
    error::PageResult,
    extract::{PageForm, PagePath},
    main_lib::AppState,
    models::PostForm,
    views,
};
use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use forum_core::{
    errors::{Error as CoreError, ValidationError},
    posts::{NewPost, PostUpdate},
};

fn require_content(form: PostForm) -> Result<String, CoreError> {
    form.content
        .ok_or_else(|| ValidationError::MissingField("content".to_string()).into())
}

async fn index(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let posts = state.post_service.get_posts()?;
    Ok(Html(views::index_page(&posts)))
}

async fn create() -> Html<String> {
    Html(views::create_page())
}

async fn store(
    State(state): State<Arc<AppState>>,
    PageForm(form): PageForm<PostForm>,
) -> PageResult<Redirect> {
    let content = require_content(form)?;
    state.post_service.create_post(NewPost::new(content)).await?;
    Ok(Redirect::to("/"))
}

async fn show(
    PagePath(id): PagePath<i32>,
    State(state): State<Arc<AppState>>,
) -> PageResult<Html<String>> {
    let post = state.post_service.get_post(id)?;
    Ok(Html(views::show_page(&post)))
}

async fn edit(
    PagePath(id): PagePath<i32>,
    State(state): State<Arc<AppState>>,
) -> PageResult<Html<String>> {
    let post = state.post_service.get_post(id)?;
    Ok(Html(views::edit_page(&post)))
}

async fn update(
    PagePath(id): PagePath<i32>,
    State(state): State<Arc<AppState>>,
    PageForm(form): PageForm<PostForm>,
) -> PageResult<Redirect> {
    let content = require_content(form)?;
    state
        .post_service
        .update_post(PostUpdate::new(id, content))
        .await?;
    Ok(Redirect::to("/"))
}

async fn destroy(
    PagePath(id): PagePath<i32>,
    State(state): State<Arc<AppState>>,
) -> PageResult<Redirect> {
    state.post_service.delete_post(id).await?;
    Ok(Redirect::to("/"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index).post(store))
        .route("/create", get(create))
        .route("/{id}", get(show).put(update).delete(destroy))
        .route("/{id}/edit", get(edit))
        .route("/{id}/update", post(update))
        .route("/{id}/delete", post(destroy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_is_a_validation_error() {
        let err = require_content(PostForm::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingField(ref field)) if field == "content"
        ));
    }

    #[test]
    fn empty_content_is_accepted() {
        let form = PostForm {
            content: Some(String::new()),
        };
        assert_eq!(require_content(form).unwrap(), "");
    }
}
