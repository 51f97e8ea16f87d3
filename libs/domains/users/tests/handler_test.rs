//! Handler tests for the Users domain
//!
//! These tests drive the axum router directly with `oneshot` and verify:
//! - HTTP status codes
//! - The `{data}` / `{meta, data}` / `{error}` response envelopes
//! - Validation rejection before payloads reach the store

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::{InMemoryUserRepository, UserService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    handlers::router(service)
}

// Helper to parse a JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_user(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// Seed Asha/Ravi (students) and Maya (instructor); returns created ids.
async fn seed(app: &Router) -> Vec<String> {
    let mut ids = Vec::new();
    for (name, email, role) in [
        ("Asha", "asha@example.com", "student"),
        ("Ravi", "ravi@example.com", "student"),
        ("Maya", "maya@example.com", "instructor"),
    ] {
        let response = app
            .clone()
            .oneshot(post_user(json!({"name": name, "email": email, "role": role})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response.into_body()).await;
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }
    ids
}

#[tokio::test]
async fn test_create_user_returns_201_with_defaults() {
    let app = app();

    let response = app
        .oneshot(post_user(
            json!({"name": "Alex Johnson", "email": "alex@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    let user = &body["data"];
    assert_eq!(user["name"], "Alex Johnson");
    assert_eq!(user["email"], "alex@example.com");
    assert_eq!(user["role"], "student");
    assert!(user["id"].is_string());
    assert!(user["createdAt"].is_string());
    assert!(user.get("updatedAt").is_none());
}

#[tokio::test]
async fn test_create_user_validates_name_length() {
    let app = app();

    let response = app
        .oneshot(post_user(json!({"name": "A", "email": "a@example.com"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "validation_error");
    assert!(body["error"]["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_user_rejects_unknown_role() {
    let app = app();

    let response = app
        .oneshot(post_user(
            json!({"name": "Alex", "email": "alex@example.com", "role": "admin"}),
        ))
        .await
        .unwrap();

    // Enum rejection happens at deserialization, before the validator
    // runs; it must still surface as a 400 in the error envelope
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_create_duplicate_email_returns_409() {
    let app = app();
    seed(&app).await;

    let response = app
        .clone()
        .oneshot(post_user(
            json!({"name": "Alex Johnson", "email": "alex@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same email, different case
    let response = app
        .oneshot(post_user(
            json!({"name": "Alex Clone", "email": "ALEX@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "duplicate_email");
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = app();
    let ids = seed(&app).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/{}", ids[0])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Asha");
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let app = app();

    let response = app
        .oneshot(get("/00000000-0000-7000-8000-000000000000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "not_found");
}

#[tokio::test]
async fn test_update_merges_partial_payload() {
    let app = app();
    let ids = seed(&app).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", ids[0]))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"name": "Asha K"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let user = &body["data"];
    assert_eq!(user["name"], "Asha K");
    assert_eq!(user["email"], "asha@example.com");
    assert_eq!(user["role"], "student");
    assert!(user["updatedAt"].is_string());
}

#[tokio::test]
async fn test_update_to_taken_email_returns_409() {
    let app = app();
    let ids = seed(&app).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", ids[1]))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": "asha@example.com"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_then_404() {
    let app = app();
    let ids = seed(&app).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", ids[2]))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", ids[2]))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pagination_boundary() {
    let app = app();
    seed(&app).await;

    let response = app
        .clone()
        .oneshot(get("/?limit=2&offset=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["limit"], 2);
    assert_eq!(body["meta"]["offset"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Maya");

    let response = app.oneshot(get("/?limit=2&offset=10")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["total"], 3);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_filter_and_sort_composition() {
    let app = app();
    seed(&app).await;

    let response = app
        .oneshot(get("/?role=student&sortBy=name&order=asc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Asha", "Ravi"]);
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(body["meta"]["role"], "student");
    assert_eq!(body["meta"]["sortBy"], "name");
    assert_eq!(body["meta"]["order"], "asc");
}

#[tokio::test]
async fn test_list_clamps_out_of_range_pagination() {
    let app = app();
    seed(&app).await;

    let response = app
        .oneshot(get("/?limit=-5&offset=-3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["limit"], 1);
    assert_eq!(body["meta"]["offset"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_ignores_unknown_sort_field() {
    let app = app();
    seed(&app).await;

    let response = app.oneshot(get("/?sortBy=email")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    // No sort applied: insertion order, and no sort echo in meta
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Asha", "Ravi", "Maya"]);
    assert!(body["meta"].get("sortBy").is_none());
}

#[tokio::test]
async fn test_list_default_limit_is_10() {
    let app = app();

    for i in 0..12 {
        let response = app
            .clone()
            .oneshot(post_user(json!({
                "name": format!("User {:02}", i),
                "email": format!("user{:02}@example.com", i),
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["limit"], 10);
    assert_eq!(body["meta"]["total"], 12);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}
