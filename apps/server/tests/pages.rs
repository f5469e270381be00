use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use forum_server::{api::app_router, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn build_test_router() -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config).unwrap(), tmp)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Ids of the posts currently listed, read through the JSON API.
async fn listed_ids(app: &Router) -> Vec<i64> {
    let (_, _, body) = send(app, get("/api/v1/posts")).await;
    let posts: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    posts.iter().map(|p| p["id"].as_i64().unwrap()).collect()
}

#[tokio::test]
async fn index_with_no_posts_renders_empty_list() {
    let (app, _tmp) = build_test_router().await;

    let (status, _, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No posts yet."));
}

#[tokio::test]
async fn create_form_posts_back_to_root() {
    let (app, _tmp) = build_test_router().await;

    let (status, _, body) = send(&app, get("/create")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<form action="/" method="post">"#));
    assert!(body.contains(r#"name="content""#));
}

#[tokio::test]
async fn store_redirects_and_post_appears_in_index() {
    let (app, _tmp) = build_test_router().await;

    let (status, location, _) = send(&app, form(Method::POST, "/", "content=hello")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));

    let (status, _, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("hello"));
    assert_eq!(listed_ids(&app).await.len(), 1);
}

#[tokio::test]
async fn show_and_edit_render_the_post() {
    let (app, _tmp) = build_test_router().await;
    send(&app, form(Method::POST, "/", "content=read+me")).await;
    let id = listed_ids(&app).await[0];

    let (status, _, body) = send(&app, get(&format!("/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("read me"));

    let (status, _, body) = send(&app, get(&format!("/{id}/edit"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&format!(r#"action="/{id}/update""#)));
    assert!(body.contains("read me"));
}

#[tokio::test]
async fn update_through_put_and_form_alias() {
    let (app, _tmp) = build_test_router().await;
    send(&app, form(Method::POST, "/", "content=a")).await;
    let id = listed_ids(&app).await[0];

    let (status, location, _) =
        send(&app, form(Method::PUT, &format!("/{id}"), "content=b")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
    let (_, _, body) = send(&app, get(&format!("/api/v1/posts/{id}"))).await;
    assert!(body.contains(r#""content":"b""#));

    let (status, _, _) = send(
        &app,
        form(Method::POST, &format!("/{id}/update"), "content=c"),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let (_, _, body) = send(&app, get(&format!("/api/v1/posts/{id}"))).await;
    assert!(body.contains(r#""content":"c""#));
}

#[tokio::test]
async fn delete_through_verb_and_form_alias() {
    let (app, _tmp) = build_test_router().await;
    send(&app, form(Method::POST, "/", "content=one")).await;
    send(&app, form(Method::POST, "/", "content=two")).await;
    let ids = listed_ids(&app).await;

    let (status, location, _) = send(&app, delete(&format!("/{}", ids[0]))).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));

    let (status, _, _) = send(&app, form(Method::POST, &format!("/{}/delete", ids[1]), "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    assert!(listed_ids(&app).await.is_empty());
    let (status, _, _) = send(&app, get(&format!("/{}", ids[0]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_ids_render_not_found_pages() {
    let (app, _tmp) = build_test_router().await;

    let (status, _, body) = send(&app, get("/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404 Not Found"));

    let (status, _, _) = send(&app, get("/999/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, form(Method::PUT, "/999", "content=x")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, delete("/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, form(Method::POST, "/999/delete", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_input_is_a_client_error() {
    let (app, _tmp) = build_test_router().await;

    let (status, _, body) = send(&app, form(Method::POST, "/", "title=nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("content"));

    let (status, _, _) = send(&app, get("/not-a-number")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(listed_ids(&app).await.is_empty());
}

#[tokio::test]
async fn rejected_requests_render_html_error_pages() {
    let (app, _tmp) = build_test_router().await;

    let (status, _, body) = send(&app, get("/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("400 Bad Request"));

    let (status, _, body) = send(&app, get("/abc/edit")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("400 Bad Request"));

    let wrong_type = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("content=hi"))
        .unwrap();
    let (status, _, body) = send(&app, wrong_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("400 Bad Request"));

    assert!(listed_ids(&app).await.is_empty());
}

#[tokio::test]
async fn empty_content_is_allowed() {
    let (app, _tmp) = build_test_router().await;

    let (status, _, _) = send(&app, form(Method::POST, "/", "content=")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(listed_ids(&app).await.len(), 1);
}

#[tokio::test]
async fn rendered_content_is_escaped() {
    let (app, _tmp) = build_test_router().await;
    send(
        &app,
        form(
            Method::POST,
            "/",
            "content=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
        ),
    )
    .await;

    let (_, _, body) = send(&app, get("/")).await;
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}
