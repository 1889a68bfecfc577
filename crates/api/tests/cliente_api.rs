//! Integration tests for `/api/v1/clientes` (CRUD, pagination, uniqueness).

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, seed_admin_token, seed_atendente_token};
use serde_json::json;
use sqlx::PgPool;

fn cliente_body(nome: &str, email: &str) -> serde_json::Value {
    json!({
        "nome": nome,
        "email": email,
        "telefone": "11987654321",
        "endereco": "Rua das Flores, 100",
    })
}

// ---------------------------------------------------------------------------
// Test: create returns 201 with the created row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_cliente_returns_201(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/clientes",
        Some(&token),
        cliente_body("Maria Silva", "maria@example.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["nome"], "Maria Silva");
    assert!(json["data"]["id"].is_i64());
}

// ---------------------------------------------------------------------------
// Test: duplicate email returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let first = post_json(
        &app,
        "/api/v1/clientes",
        Some(&token),
        cliente_body("Maria Silva", "maria@example.com"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        &app,
        "/api/v1/clientes",
        Some(&token),
        cliente_body("Outra Maria", "maria@example.com"),
    )
    .await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Test: invalid body returns 400 with per-field details
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_body_returns_400_with_details(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/clientes",
        Some(&token),
        json!({ "nome": "", "email": "not-an-email", "telefone": "123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["details"]["email"].is_array());
}

// ---------------------------------------------------------------------------
// Test: pagination returns at most `limit` items and ceil-divided totalPages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_pagination_respects_limit_and_total_pages(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    for i in 0..12 {
        let response = post_json(
            &app,
            "/api/v1/clientes",
            Some(&token),
            cliente_body(&format!("Cliente {i:02}"), &format!("c{i:02}@example.com")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(&app, "/api/v1/clientes?page=1&limit=5", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["total"], 12);
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["limit"], 5);
    // ceil(12 / 5) = 3
    assert_eq!(json["data"]["totalPages"], 3);

    // The last page holds the remainder.
    let response = get(&app, "/api/v1/clientes?page=3&limit=5", Some(&token)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: search filters by nome/email
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_search_filters_results(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    for (nome, email) in [
        ("Maria Silva", "maria@example.com"),
        ("Joana Souza", "joana@example.com"),
        ("Carlos Maria", "carlos@example.com"),
    ] {
        post_json(&app, "/api/v1/clientes", Some(&token), cliente_body(nome, email)).await;
    }

    let response = get(&app, "/api/v1/clientes?search=maria", Some(&token)).await;
    let json = body_json(response).await;

    // "maria" matches "Maria Silva" (nome + email) and "Carlos Maria" (nome).
    assert_eq!(json["data"]["total"], 2);
}

// ---------------------------------------------------------------------------
// Test: ordering by a whitelisted column, and 400 for an unknown one
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_ordering(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    for (nome, email) in [("Bruna", "b@example.com"), ("Alice", "a@example.com")] {
        post_json(&app, "/api/v1/clientes", Some(&token), cliente_body(nome, email)).await;
    }

    let response = get(
        &app,
        "/api/v1/clientes?orderBy=nome&order=desc",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["items"][0]["nome"], "Bruna");

    let response = get(&app, "/api/v1/clientes?orderBy=telefone", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: get/update/delete against a nonexistent id return 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn nonexistent_cliente_returns_404(pool: PgPool) {
    let admin_token = seed_admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/v1/clientes/9999", Some(&admin_token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        &app,
        "/api/v1/clientes/9999",
        Some(&admin_token),
        json!({ "nome": "Novo Nome" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, "/api/v1/clientes/9999", Some(&admin_token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Test: delete requires the admin cargo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_requires_admin(pool: PgPool) {
    let atendente_token = seed_atendente_token(&pool).await;
    let admin_token = seed_admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/clientes",
        Some(&atendente_token),
        cliente_body("Maria Silva", "maria@example.com"),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = delete(
        &app,
        &format!("/api/v1/clientes/{id}"),
        Some(&atendente_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete(&app, &format!("/api/v1/clientes/{id}"), Some(&admin_token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

// ---------------------------------------------------------------------------
// Test: /clientes/{id}/pets lists only that cliente's pets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_pets_of_cliente(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/clientes",
        Some(&token),
        cliente_body("Maria Silva", "maria@example.com"),
    )
    .await;
    let cliente_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    for nome in ["Rex", "Mimi"] {
        let response = post_json(
            &app,
            "/api/v1/pets",
            Some(&token),
            json!({ "cliente_id": cliente_id, "nome": nome, "especie": "cachorro" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        &app,
        &format!("/api/v1/clientes/{cliente_id}/pets"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Nonexistent owner is a 404, not an empty list.
    let response = get(&app, "/api/v1/clientes/9999/pets", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: creating a pet with a nonexistent cliente_id returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_pet_with_nonexistent_cliente_returns_404(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/pets",
        Some(&token),
        json!({ "cliente_id": 9999, "nome": "Rex", "especie": "cachorro" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}
