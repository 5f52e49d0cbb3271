#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use tasklist_api::config::{DatabaseConfig, ServerConfig};
use tasklist_api::router::build_app_router;
use tasklist_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The connect options are unused: tests hand
/// in the pool created by `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        app_env: "test".to_string(),
        database: DatabaseConfig {
            connect_options: PgConnectOptions::new(),
            max_connections: 5,
            min_connections: 0,
            max_lifetime_secs: 3600,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool), &test_config())
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn patch(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a todo through the API and return the `data` object.
pub async fn create_todo(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), "/api/todos", body).await;
    body_json(response).await["data"].clone()
}
