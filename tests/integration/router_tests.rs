//! Router tests against an in-memory record store

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{
    api, repository::MemoryRecordsRepository, services::Services, AppState,
};

fn app() -> Router {
    let state = AppState {
        services: Arc::new(Services::new(Arc::new(MemoryRecordsRepository::new()))),
    };
    api::create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, title: &str, author: &str, created_by: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/records",
        Some(json!({ "title": title, "author": author, "createdBy": created_by })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_echoes_fields_and_assigns_id() {
    let app = app();
    let body = create(&app, "Clean Code", "Robert Martin", "admin").await;

    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["title"], "Clean Code");
    assert_eq!(body["author"], "Robert Martin");
    assert_eq!(body["createdBy"], "admin");
}

#[tokio::test]
async fn test_create_validation_failures_are_422() {
    let app = app();
    let cases = [
        json!({ "title": "Clean Code", "author": "Robert Martin" }),
        json!({ "title": "", "author": "Robert Martin", "createdBy": "admin" }),
        json!({ "title": "t".repeat(201), "author": "Robert Martin", "createdBy": "admin" }),
        json!({ "title": "Clean Code", "author": "a".repeat(101), "createdBy": "admin" }),
        json!({ "title": "Clean Code", "author": "Robert Martin", "createdBy": "u".repeat(51) }),
    ];

    for payload in cases {
        let (status, body) = send(&app, Method::POST, "/records", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    // nothing reached the store
    let (_, body) = send(&app, Method::GET, "/records", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_unknown_record_is_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/records/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_non_numeric_id_is_422() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/records/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_title_only_update_keeps_other_fields() {
    let app = app();
    let created = create(&app, "Clean Code", "Robert Martin", "admin").await;
    let uri = format!("/records/{}", created["id"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "title": "Clean Code, 2nd Edition" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Clean Code, 2nd Edition");

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["author"], "Robert Martin");
    assert_eq!(fetched["createdBy"], "admin");
    assert_eq!(fetched["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_rejects_empty_title_and_unknown_ids() {
    let app = app();
    let created = create(&app, "Clean Code", "Robert Martin", "admin").await;
    let uri = format!("/records/{}", created["id"]);

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/records/99999",
        Some(json!({ "title": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_and_delete_again() {
    let app = app();
    let created = create(&app, "Clean Code", "Robert Martin", "admin").await;
    let uri = format!("/records/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_by_title() {
    let app = app();
    create(&app, "Clean Code", "Robert Martin", "admin").await;
    create(&app, "Design Patterns", "Gang of Four", "admin").await;

    let (status, body) = send(&app, Method::GET, "/records?title=Clean", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Clean Code"]);
}

#[tokio::test]
async fn test_search_criteria_combine_with_or() {
    let app = app();
    create(&app, "Clean Code", "Robert Martin", "admin").await;
    create(&app, "Design Patterns", "Gang of Four", "admin").await;
    create(&app, "Refactoring", "Martin Fowler", "admin").await;

    let (_, body) = send(
        &app,
        Method::GET,
        "/records?title=Design&author=Robert%20Martin",
        None,
    )
    .await;
    assert_eq!(titles(&body), vec!["Clean Code", "Design Patterns"]);
}

#[tokio::test]
async fn test_search_created_by_is_exact() {
    let app = app();
    create(&app, "Clean Code", "Robert Martin", "admin").await;
    create(&app, "Design Patterns", "Gang of Four", "administrator").await;

    let (_, body) = send(&app, Method::GET, "/records?createdBy=admin", None).await;
    assert_eq!(titles(&body), vec!["Clean Code"]);
}

#[tokio::test]
async fn test_pagination_returns_disjoint_pages() {
    let app = app();
    for i in 1..=15 {
        create(&app, &format!("Book {}", i), "Author", "seed").await;
    }

    let (_, first) = send(&app, Method::GET, "/records?skip=0&limit=5", None).await;
    let (_, second) = send(&app, Method::GET, "/records?skip=5&limit=5", None).await;

    assert_eq!(titles(&first), vec!["Book 1", "Book 2", "Book 3", "Book 4", "Book 5"]);
    assert_eq!(titles(&second), vec!["Book 6", "Book 7", "Book 8", "Book 9", "Book 10"]);
}

#[tokio::test]
async fn test_search_results_are_paginated() {
    let app = app();
    for i in 1..=15 {
        create(&app, &format!("Book {}", i), "Author", "seed").await;
    }
    create(&app, "Unrelated", "Someone", "other").await;

    let (_, body) = send(&app, Method::GET, "/records?createdBy=seed&skip=10&limit=10", None).await;
    assert_eq!(
        titles(&body),
        vec!["Book 11", "Book 12", "Book 13", "Book 14", "Book 15"]
    );
}

#[tokio::test]
async fn test_out_of_range_query_is_422() {
    let app = app();
    for uri in [
        "/records?limit=0",
        "/records?limit=1001",
        "/records?skip=-1",
        "/records?limit=ten",
    ] {
        let (status, _) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }

    let (status, _) = send(&app, Method::GET, "/records?limit=1000", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_deleted_records_never_listed() {
    let app = app();
    let doomed = create(&app, "Clean Code", "Robert Martin", "admin").await;
    create(&app, "Clean Architecture", "Robert Martin", "admin").await;

    send(&app, Method::DELETE, &format!("/records/{}", doomed["id"]), None).await;

    let (_, listed) = send(&app, Method::GET, "/records", None).await;
    assert_eq!(titles(&listed), vec!["Clean Architecture"]);

    let (_, searched) = send(&app, Method::GET, "/records?title=clean", None).await;
    assert_eq!(titles(&searched), vec!["Clean Architecture"]);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs"], "/swagger-ui");
}

#[tokio::test]
async fn test_openapi_document_lists_record_paths() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/records"].is_object());
    assert!(body["paths"]["/records/{id}"].is_object());
}
