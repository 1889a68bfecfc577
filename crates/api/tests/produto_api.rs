//! Integration tests for `/api/v1/produtos` (CRUD, stock rules, low-stock).

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json, seed_atendente_token};
use serde_json::json;
use sqlx::PgPool;

fn produto_body(nome: &str, estoque: i32, estoque_minimo: i32) -> serde_json::Value {
    json!({
        "nome": nome,
        "categoria": "racao",
        "preco": "49.90",
        "estoque": estoque,
        "estoque_minimo": estoque_minimo,
    })
}

async fn create_produto(
    app: &axum::Router,
    token: &str,
    nome: &str,
    estoque: i32,
    estoque_minimo: i32,
) -> i64 {
    let response = post_json(
        app,
        "/api/v1/produtos",
        Some(token),
        produto_body(nome, estoque, estoque_minimo),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: positive and negative deltas within bounds adjust stock
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stock_delta_within_bounds_is_applied(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);
    let id = create_produto(&app, &token, "Racao Premium", 10, 3).await;

    let response = patch_json(
        &app,
        &format!("/api/v1/produtos/{id}/estoque"),
        Some(&token),
        json!({ "delta": -4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["estoque"], 6);

    let response = patch_json(
        &app,
        &format!("/api/v1/produtos/{id}/estoque"),
        Some(&token),
        json!({ "delta": 14 }),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["estoque"], 20);
}

// ---------------------------------------------------------------------------
// Test: a delta that would drive stock negative returns 400 and changes nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stock_delta_below_zero_returns_400(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);
    let id = create_produto(&app, &token, "Racao Premium", 5, 3).await;

    let response = patch_json(
        &app,
        &format!("/api/v1/produtos/{id}/estoque"),
        Some(&token),
        json!({ "delta": -6 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    // Stock must be untouched.
    let response = get(&app, &format!("/api/v1/produtos/{id}"), Some(&token)).await;
    assert_eq!(body_json(response).await["data"]["estoque"], 5);
}

// ---------------------------------------------------------------------------
// Test: stock adjustment on a nonexistent produto stays a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stock_delta_on_nonexistent_produto_returns_404(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = patch_json(
        &app,
        "/api/v1/produtos/9999/estoque",
        Some(&token),
        json!({ "delta": -1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: /produtos/estoque-baixo lists products at or below minimum stock
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn estoque_baixo_lists_low_stock_products(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    create_produto(&app, &token, "Cheio", 50, 5).await;
    create_produto(&app, &token, "No Limite", 5, 5).await;
    create_produto(&app, &token, "Vazio", 0, 5).await;

    let response = get(&app, "/api/v1/produtos/estoque-baixo", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Lowest stock first.
    assert_eq!(items[0]["nome"], "Vazio");
    assert_eq!(items[1]["nome"], "No Limite");
}
