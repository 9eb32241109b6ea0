//! Router-level tests for the HTTP todo API.
//!
//! The router is exercised in process with `tower::ServiceExt::oneshot`
//! over an in-memory repository, covering the route table, the wire
//! representation, and the error-to-status mapping.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use mockable::DefaultClock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use tally::http::router;
use tally::todo::adapters::memory::InMemoryTodoRepository;
use tally::todo::services::TodoService;

fn app() -> Router {
    let service = Arc::new(TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    ));
    router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn create_item(app: &Router, title: &str, description: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "title": title, "description": description }),
        ))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_wire_representation() {
    let app = app();

    let item = create_item(&app, "Buy milk", "2% milk").await;

    assert_eq!(item["title"], "Buy milk");
    assert_eq!(item["description"], "2% milk");
    assert_eq!(item["status"], "PENDING");
    assert!(item["id"].is_string());
    assert!(item["createdAt"].is_string());
    assert!(item["updatedAt"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_empty_title_returns_422() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "title": "", "description": "2% milk" }),
        ))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_created_items() {
    let app = app();
    create_item(&app, "One", "first item").await;
    create_item(&app, "Two", "second item").await;

    let response = app
        .oneshot(empty_request("GET", "/todos"))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let items = body.as_array().expect("body should be an array");
    assert_eq!(items.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_item_returns_404() {
    let app = app();

    let response = app
        .oneshot(empty_request(
            "GET",
            "/todos/00000000-0000-4000-8000-000000000000",
        ))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_with_null_status_leaves_status_unchanged() {
    let app = app();
    let created = create_item(&app, "Buy milk", "2% milk").await;
    let id = created["id"].as_str().expect("id should be a string");

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            json!({ "status": null }),
        ))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "PENDING");
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_with_invalid_title_returns_422() {
    let app = app();
    let created = create_item(&app, "Buy milk", "2% milk").await;
    let id = created["id"].as_str().expect("id should be a string");

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            json!({ "title": "" }),
        ))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The stored item is untouched by the rejected patch.
    let fetched = app
        .oneshot(empty_request("GET", &format!("/todos/{id}")))
        .await
        .expect("request should complete");
    let body = response_json(fetched).await;
    assert_eq!(body["title"], "Buy milk");
}

#[tokio::test(flavor = "multi_thread")]
async fn put_updates_like_patch() {
    let app = app();
    let created = create_item(&app, "Buy milk", "2% milk").await;
    let id = created["id"].as_str().expect("id should be a string");

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/todos/{id}"),
            json!({ "status": "COMPLETED" }),
        ))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "COMPLETED");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_item_returns_404() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PATCH",
            "/todos/00000000-0000-4000-8000-000000000000",
            json!({ "status": "COMPLETED" }),
        ))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_item_returns_404() {
    let app = app();

    let response = app
        .oneshot(empty_request(
            "DELETE",
            "/todos/00000000-0000-4000-8000-000000000000",
        ))
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn buy_milk_scenario_runs_over_http() {
    let app = app();
    let created = create_item(&app, "Buy milk", "2% milk").await;
    assert_eq!(created["status"], "PENDING");
    let id = created["id"].as_str().expect("id should be a string");

    let patched = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            json!({ "status": "IN_PROGRESS" }),
        ))
        .await
        .expect("request should complete");
    assert_eq!(patched.status(), StatusCode::OK);
    let patched_body = response_json(patched).await;
    assert_eq!(patched_body["status"], "IN_PROGRESS");
    assert_eq!(patched_body["title"], "Buy milk");

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/todos/{id}")))
        .await
        .expect("request should complete");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let fetched = app
        .oneshot(empty_request("GET", &format!("/todos/{id}")))
        .await
        .expect("request should complete");
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}
