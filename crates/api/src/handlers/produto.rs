//! Handlers for the `/produtos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::produto::{CreateProduto, Produto, UpdateProduto};
use petshop_db::repositories::{produto_repo, ProdutoRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// Request body for `PATCH /produtos/{id}/estoque`.
#[derive(Debug, Deserialize)]
pub struct EstoqueDelta {
    /// Positive to restock, negative to consume.
    pub delta: i32,
}

/// POST /api/v1/produtos
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateProduto>,
) -> AppResult<(StatusCode, Json<ApiResponse<Produto>>)> {
    input.validate()?;
    let produto = ProdutoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(produto))))
}

/// GET /api/v1/produtos
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<Produto>>>> {
    let (order_by, descending) = params.ordering(produto_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let items = ProdutoRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = ProdutoRepo::count(&state.pool, search).await?;

    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/produtos/estoque-baixo
///
/// Products at or below their minimum stock, lowest stock first.
pub async fn estoque_baixo(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Produto>>>> {
    let produtos = ProdutoRepo::list_estoque_baixo(&state.pool).await?;
    Ok(Json(ApiResponse::ok(produtos)))
}

/// GET /api/v1/produtos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Produto>>> {
    let produto = ProdutoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Produto",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(produto)))
}

/// PUT /api/v1/produtos/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduto>,
) -> AppResult<Json<ApiResponse<Produto>>> {
    input.validate()?;
    let produto = ProdutoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Produto",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(produto)))
}

/// PATCH /api/v1/produtos/{id}/estoque
///
/// Apply a stock delta. A delta that would drive stock below zero is a 400
/// and leaves the row untouched.
pub async fn adjust_estoque(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<EstoqueDelta>,
) -> AppResult<Json<ApiResponse<Produto>>> {
    // Existence first, so "no such produto" stays a 404 and only a genuine
    // would-go-negative delta becomes a 400.
    ProdutoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Produto",
            id,
        }))?;

    let produto = ProdutoRepo::adjust_estoque(&state.pool, id, input.delta)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Delta {} would drive estoque below zero",
                input.delta
            ))
        })?;

    Ok(Json(ApiResponse::ok(produto)))
}

/// DELETE /api/v1/produtos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProdutoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Produto",
            id,
        }))
    }
}
