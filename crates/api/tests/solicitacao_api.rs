//! Integration tests for `/api/v1/solicitacoes` (status lifecycle).

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, patch_json, post_json, seed_atendente_token};
use serde_json::json;
use sqlx::PgPool;

/// Seed a cliente and one pendente solicitacao; returns the solicitacao id.
async fn seed_solicitacao(app: &Router, token: &str) -> i64 {
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
        "/api/v1/solicitacoes",
        Some(token),
        json!({
            "cliente_id": cliente_id,
            "assunto": "Banho agendado",
            "descricao": "Gostaria de remarcar o banho do Rex.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pendente");
    json["data"]["id"].as_i64().unwrap()
}

async fn change_status(app: &Router, token: &str, id: i64, status: &str) -> axum::response::Response {
    patch_json(
        app,
        &format!("/api/v1/solicitacoes/{id}/status"),
        Some(token),
        json!({ "status": status }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Test: the happy path pendente -> em_andamento -> concluida
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_happy_path(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);
    let id = seed_solicitacao(&app, &token).await;

    let response = change_status(&app, &token, id, "em_andamento").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "em_andamento");

    let response = change_status(&app, &token, id, "concluida").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "concluida");
}

// ---------------------------------------------------------------------------
// Test: skipping straight from pendente to concluida is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_cannot_skip_to_concluida(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);
    let id = seed_solicitacao(&app, &token).await;

    let response = change_status(&app, &token, id, "concluida").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Test: terminal states accept no further transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn terminal_status_is_final(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);
    let id = seed_solicitacao(&app, &token).await;

    let response = change_status(&app, &token, id, "cancelada").await;
    assert_eq!(response.status(), StatusCode::OK);

    for target in ["pendente", "em_andamento", "concluida"] {
        let response = change_status(&app, &token, id, target).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "cancelada must not transition to {target}"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: unknown status labels are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_status_label_returns_400(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);
    let id = seed_solicitacao(&app, &token).await;

    let response = change_status(&app, &token, id, "arquivada").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: status change on a nonexistent solicitacao returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_change_on_nonexistent_solicitacao_returns_404(pool: PgPool) {
    let token = seed_atendente_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = change_status(&app, &token, 9999, "em_andamento").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
