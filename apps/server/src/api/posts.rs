use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiPath},
    main_lib::AppState,
    models::{NewPost, Post, PostUpdate},
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

#[utoipa::path(get, path = "/api/v1/posts", responses((status = 200, body = [Post])))]
pub async fn list_posts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Post>>> {
    let posts = state.post_service.get_posts()?;
    Ok(Json(posts.into_iter().map(Post::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = NewPost,
    responses((status = 201, body = Post))
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewPost>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let created = state.post_service.create_post(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Post::from(created))))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i32, Path, description = "Post id")),
    responses((status = 200, body = Post), (status = 404, description = "No such post"))
)]
pub async fn get_post(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Post>> {
    let post = state.post_service.get_post(id)?;
    Ok(Json(Post::from(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i32, Path, description = "Post id")),
    request_body = PostUpdate,
    responses((status = 200, body = Post), (status = 404, description = "No such post"))
)]
pub async fn update_post(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<PostUpdate>,
) -> ApiResult<Json<Post>> {
    let updated = state.post_service.update_post(payload.into_core(id)).await?;
    Ok(Json(Post::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i32, Path, description = "Post id")),
    responses((status = 204), (status = 404, description = "No such post"))
)]
pub async fn delete_post(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.post_service.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}
