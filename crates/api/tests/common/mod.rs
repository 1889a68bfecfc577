//! Shared harness for integration tests.
//!
//! Mirrors the router construction in `main.rs` so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery)
//! that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use petshop_api::auth::jwt::{generate_token, JwtConfig};
use petshop_api::auth::password::hash_password;
use petshop_api::config::ServerConfig;
use petshop_api::router::build_app_router;
use petshop_api::state::AppState;
use petshop_db::models::funcionario::{CreateFuncionario, Funcionario};
use petshop_db::repositories::FuncionarioRepo;

/// JWT secret shared by the test config and token helpers.
pub const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: 8,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a funcionario with a hashed password. Returns the full row.
pub async fn seed_funcionario(
    pool: &PgPool,
    nome: &str,
    email: &str,
    senha: &str,
    cargo: &str,
) -> Funcionario {
    let senha_hash = hash_password(senha).expect("hashing should succeed");
    let input = CreateFuncionario {
        nome: nome.to_string(),
        email: email.to_string(),
        senha_hash,
        cargo: cargo.to_string(),
    };
    FuncionarioRepo::create(pool, &input)
        .await
        .expect("seeding funcionario should succeed")
}

/// Shorthand: seed an admin and return a valid bearer token for it.
pub async fn seed_admin_token(pool: &PgPool) -> String {
    let admin = seed_funcionario(pool, "Admin", "admin@petshop.test", "senha-admin-1", "admin").await;
    token_for(&admin)
}

/// Shorthand: seed an atendente and return a valid bearer token for it.
pub async fn seed_atendente_token(pool: &PgPool) -> String {
    let atendente = seed_funcionario(
        pool,
        "Atendente",
        "atendente@petshop.test",
        "senha-atend-1",
        "atendente",
    )
    .await;
    token_for(&atendente)
}

/// Generate a token for an existing funcionario using the test JWT config.
pub fn token_for(funcionario: &Funcionario) -> String {
    generate_token(
        funcionario.id,
        &funcionario.email,
        &funcionario.cargo,
        &test_config().jwt,
    )
    .expect("token generation should succeed")
}

/// Fire one request at the app. `token` adds a bearer Authorization header;
/// `body` is sent as JSON.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response {
    request(app, Method::GET, uri, token, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn patch_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    request(app, Method::PATCH, uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response {
    request(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
