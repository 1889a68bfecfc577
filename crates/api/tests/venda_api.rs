//! Integration tests for `/api/v1/vendas` (transactional creation, stats).

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json, seed_admin_token};
use serde_json::json;
use sqlx::PgPool;

/// Seed a cliente + produto pair and return `(cliente_id, produto_id)`.
/// The admin funcionario behind `token` acts as the seller.
async fn seed_sale_fixtures(app: &Router, token: &str, estoque: i32) -> (i64, i64) {
    let response = post_json(
        app,
        "/api/v1/clientes",
        Some(token),
        json!({
            "nome": "Maria Silva",
            "email": "maria@example.com",
            "telefone": "11987654321",
        }),
    )
    .await;
    let cliente_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        app,
        "/api/v1/produtos",
        Some(token),
        json!({
            "nome": "Racao Premium",
            "categoria": "racao",
            "preco": "25.00",
            "estoque": estoque,
        }),
    )
    .await;
    let produto_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    (cliente_id, produto_id)
}

/// The id of the funcionario seeded by `seed_admin_token`.
async fn admin_id(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT id FROM funcionarios WHERE email = 'admin@petshop.test'")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: creating a sale computes the total and decrements stock
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_venda_computes_total_and_decrements_stock(pool: PgPool) {
    let token = seed_admin_token(&pool).await;
    let funcionario_id = admin_id(&pool).await;
    let app = common::build_test_app(pool);
    let (cliente_id, produto_id) = seed_sale_fixtures(&app, &token, 10).await;

    let response = post_json(
        &app,
        "/api/v1/vendas",
        Some(&token),
        json!({
            "cliente_id": cliente_id,
            "funcionario_id": funcionario_id,
            "forma_pagamento": "pix",
            "itens": [{ "produto_id": produto_id, "quantidade": 3 }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    // 3 x 25.00
    assert_eq!(json["data"]["total"], "75.00");
    assert_eq!(json["data"]["itens"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["itens"][0]["preco_unitario"], "25.00");

    // Stock went from 10 to 7.
    let response = get(&app, &format!("/api/v1/produtos/{produto_id}"), Some(&token)).await;
    assert_eq!(body_json(response).await["data"]["estoque"], 7);
}

// ---------------------------------------------------------------------------
// Test: insufficient stock aborts the whole sale
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_venda_with_insufficient_stock_returns_400_and_rolls_back(pool: PgPool) {
    let token = seed_admin_token(&pool).await;
    let funcionario_id = admin_id(&pool).await;
    let app = common::build_test_app(pool.clone());
    let (cliente_id, produto_id) = seed_sale_fixtures(&app, &token, 2).await;

    let response = post_json(
        &app,
        "/api/v1/vendas",
        Some(&token),
        json!({
            "cliente_id": cliente_id,
            "funcionario_id": funcionario_id,
            "forma_pagamento": "dinheiro",
            "itens": [{ "produto_id": produto_id, "quantidade": 5 }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written: no venda rows, stock untouched.
    let vendas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendas")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(vendas, 0);

    let response = get(&app, &format!("/api/v1/produtos/{produto_id}"), Some(&token)).await;
    assert_eq!(body_json(response).await["data"]["estoque"], 2);
}

// ---------------------------------------------------------------------------
// Test: nonexistent cliente on sale creation returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_venda_with_nonexistent_cliente_returns_404(pool: PgPool) {
    let token = seed_admin_token(&pool).await;
    let funcionario_id = admin_id(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/vendas",
        Some(&token),
        json!({
            "cliente_id": 9999,
            "funcionario_id": funcionario_id,
            "forma_pagamento": "pix",
            "itens": [{ "produto_id": 1, "quantidade": 1 }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: unknown payment method returns 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_venda_with_unknown_forma_pagamento_returns_400(pool: PgPool) {
    let token = seed_admin_token(&pool).await;
    let funcionario_id = admin_id(&pool).await;
    let app = common::build_test_app(pool);
    let (cliente_id, produto_id) = seed_sale_fixtures(&app, &token, 10).await;

    let response = post_json(
        &app,
        "/api/v1/vendas",
        Some(&token),
        json!({
            "cliente_id": cliente_id,
            "funcionario_id": funcionario_id,
            "forma_pagamento": "cheque",
            "itens": [{ "produto_id": produto_id, "quantidade": 1 }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: statistics aggregate count, revenue, and payment-method breakdown
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn estatisticas_aggregates_sales(pool: PgPool) {
    let token = seed_admin_token(&pool).await;
    let funcionario_id = admin_id(&pool).await;
    let app = common::build_test_app(pool);
    let (cliente_id, produto_id) = seed_sale_fixtures(&app, &token, 100).await;

    for (forma, quantidade) in [("pix", 1), ("pix", 2), ("dinheiro", 4)] {
        let response = post_json(
            &app,
            "/api/v1/vendas",
            Some(&token),
            json!({
                "cliente_id": cliente_id,
                "funcionario_id": funcionario_id,
                "forma_pagamento": forma,
                "itens": [{ "produto_id": produto_id, "quantidade": quantidade }],
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(&app, "/api/v1/vendas/estatisticas", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // 25 + 50 + 100 = 175 across 3 sales.
    assert_eq!(json["data"]["total_vendas"], 3);
    assert_eq!(json["data"]["receita_total"], "175.00");

    let por_forma = json["data"]["por_forma_pagamento"].as_array().unwrap();
    assert_eq!(por_forma.len(), 2);
    // Ordered by revenue descending: dinheiro (100) before pix (75).
    assert_eq!(por_forma[0]["forma_pagamento"], "dinheiro");
    assert_eq!(por_forma[0]["receita"], "100.00");
    assert_eq!(por_forma[1]["forma_pagamento"], "pix");
    assert_eq!(por_forma[1]["total_vendas"], 2);
}
