//! The `/posts` resource and the root route, dispatched in-process against
//! fixture backends.

mod common;

use std::sync::Arc;

use common::{sample_post, Canned, Down, Placeholder};
use postsgate::posts::{Post, PostsBackend};
use postsgate::{app, Method, Request, Response, Router};

fn router(backend: impl PostsBackend) -> Arc<Router> {
    Arc::new(app(backend))
}

async fn get(router: &Arc<Router>, path: &str) -> Response {
    Arc::clone(router).dispatch(Request::new(Method::Get, path)).await
}

async fn post_json(router: &Arc<Router>, body: &'static str) -> Response {
    let req = Request::new(Method::Post, "/posts")
        .with_header("Content-Type", "application/json")
        .with_body(body);
    Arc::clone(router).dispatch(req).await
}

#[tokio::test]
async fn root_says_hello() {
    let res = get(&router(Placeholder::default()), "/").await;

    assert_eq!(res.status_code(), 200);
    assert_eq!(res.body(), b"Hello World!");
    assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
}

#[tokio::test]
async fn list_relays_upstream_posts() {
    let res = get(&router(Placeholder::default()), "/posts").await;

    assert_eq!(res.status_code(), 200);
    assert_eq!(res.header("content-type"), Some("application/json"));
    let posts: Vec<Post> = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(posts, vec![sample_post()]);
}

#[tokio::test]
async fn list_answers_on_trailing_slash() {
    let res = get(&router(Placeholder::default()), "/posts/").await;
    assert_eq!(res.status_code(), 200);
}

#[tokio::test]
async fn list_is_repeatable() {
    let backend = Placeholder::default();
    let router = router(backend.clone());

    let first = get(&router, "/posts").await;
    let second = get(&router, "/posts").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.body(), second.body());
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn list_keeps_upstream_success_status() {
    let res = get(&router(Canned { status: 203, body: "[]" }), "/posts").await;

    assert_eq!(res.status_code(), 203);
    assert_eq!(res.body(), b"[]");
}

#[tokio::test]
async fn create_returns_post_with_assigned_id() {
    let backend = Placeholder::default();
    let router = router(backend.clone());

    let res = post_json(&router, r#"{"UserId":1,"Title":"Hello World","Body":"Foo Bar"}"#).await;

    assert_eq!(res.status_code(), 200);
    let post: Post = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(post.id, 101);
    assert_eq!(post.user_id, 1);
    assert_eq!(post.title, "Hello World");
    assert_eq!(post.body, "Foo Bar");
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn create_accepts_camel_case_without_content_type() {
    let req = Request::new(Method::Post, "/posts")
        .with_body(r#"{"userId":7,"title":"t","body":"b"}"#);
    let res = router(Placeholder::default()).dispatch(req).await;

    assert_eq!(res.status_code(), 200);
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body, serde_json::json!({"id": 101, "userId": 7, "title": "t", "body": "b"}));
}

#[tokio::test]
async fn create_rejects_malformed_body_without_calling_upstream() {
    let backend = Placeholder::default();
    let router = router(backend.clone());

    let res = post_json(&router, "{not json").await;
    assert_eq!(res.status_code(), 400);

    let res = post_json(&router, r#"{"userId":1,"title":"missing body"}"#).await;
    assert_eq!(res.status_code(), 400);
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert!(body["error"].as_str().unwrap().contains("body"));

    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn create_rejects_non_json_content_type() {
    let req = Request::new(Method::Post, "/posts")
        .with_header("content-type", "text/plain")
        .with_body(r#"{"userId":1,"title":"t","body":"b"}"#);
    let res = router(Placeholder::default()).dispatch(req).await;

    assert_eq!(res.status_code(), 415);
}

#[tokio::test]
async fn upstream_transport_failure_is_bad_gateway() {
    let router = router(Down);

    assert_eq!(get(&router, "/posts").await.status_code(), 502);
    let res = post_json(&router, r#"{"userId":1,"title":"t","body":"b"}"#).await;
    assert_eq!(res.status_code(), 502);
    assert_eq!(res.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn malformed_upstream_body_is_bad_gateway() {
    let router = router(Canned { status: 200, body: "<html>oops</html>" });

    assert_eq!(get(&router, "/posts").await.status_code(), 502);
    let res = post_json(&router, r#"{"userId":1,"title":"t","body":"b"}"#).await;
    assert_eq!(res.status_code(), 502);
}

#[tokio::test]
async fn upstream_error_status_is_bad_gateway() {
    let res = get(&router(Canned { status: 500, body: "[]" }), "/posts").await;

    assert_eq!(res.status_code(), 502);
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body["error"], "upstream answered with status 500");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let res = get(&router(Placeholder::default()), "/comments").await;
    assert_eq!(res.status_code(), 404);
}

#[tokio::test]
async fn unsupported_method_is_not_allowed() {
    let res = router(Placeholder::default())
        .dispatch(Request::new(Method::Delete, "/posts"))
        .await;

    assert_eq!(res.status_code(), 405);
    assert_eq!(res.header("allow"), Some("GET, POST"));
}
