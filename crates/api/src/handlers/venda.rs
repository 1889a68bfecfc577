//! Handlers for the `/vendas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Days, NaiveDate, NaiveTime};
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::venda::{
    CreateVenda, Venda, VendaComItens, VendaEstatisticas, FORMAS_PAGAMENTO,
};
use petshop_db::repositories::{venda_repo, ClienteRepo, FuncionarioRepo, VendaRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// Query params for `GET /vendas/estatisticas`. Dates are inclusive.
#[derive(Debug, Deserialize)]
pub struct EstatisticasParams {
    pub inicio: Option<NaiveDate>,
    pub fim: Option<NaiveDate>,
}

/// POST /api/v1/vendas
///
/// Creates the sale and its item lines in one transaction; each line
/// decrements product stock. Nonexistent cliente/funcionario/produto are a
/// 404, insufficient stock a 400, and either aborts the whole sale.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateVenda>,
) -> AppResult<(StatusCode, Json<ApiResponse<VendaComItens>>)> {
    input.validate()?;

    if !FORMAS_PAGAMENTO.contains(&input.forma_pagamento.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid forma_pagamento '{}'; expected one of: {}",
            input.forma_pagamento,
            FORMAS_PAGAMENTO.join(", ")
        ))));
    }

    ClienteRepo::find_by_id(&state.pool, input.cliente_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id: input.cliente_id,
        }))?;

    FuncionarioRepo::find_by_id(&state.pool, input.funcionario_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Funcionario",
            id: input.funcionario_id,
        }))?;

    let venda = VendaRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(venda))))
}

/// GET /api/v1/vendas
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<Venda>>>> {
    let (order_by, descending) = params.ordering(venda_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let items = VendaRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = VendaRepo::count(&state.pool, search).await?;

    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/vendas/estatisticas?inicio=&fim=
pub async fn estatisticas(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<EstatisticasParams>,
) -> AppResult<Json<ApiResponse<VendaEstatisticas>>> {
    let inicio = params
        .inicio
        .map(|d| d.and_time(NaiveTime::MIN).and_utc());
    // `fim` is inclusive in the query string; the repository takes a
    // half-open range, so push the bound to the next midnight.
    let fim = params
        .fim
        .and_then(|d| d.checked_add_days(Days::new(1)))
        .map(|d| d.and_time(NaiveTime::MIN).and_utc());

    let stats = VendaRepo::estatisticas(&state.pool, inicio, fim).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/v1/vendas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<VendaComItens>>> {
    let venda = VendaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venda",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(venda)))
}

/// DELETE /api/v1/vendas/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = VendaRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Venda",
            id,
        }))
    }
}
