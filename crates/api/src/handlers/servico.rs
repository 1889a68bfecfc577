//! Handlers for the `/servicos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::servico::{CreateServico, Servico, UpdateServico};
use petshop_db::repositories::{servico_repo, ServicoRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// POST /api/v1/servicos
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateServico>,
) -> AppResult<(StatusCode, Json<ApiResponse<Servico>>)> {
    input.validate()?;
    let servico = ServicoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(servico))))
}

/// GET /api/v1/servicos
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<Servico>>>> {
    let (order_by, descending) = params.ordering(servico_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let items = ServicoRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = ServicoRepo::count(&state.pool, search).await?;

    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/servicos/ativos
pub async fn ativos(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Servico>>>> {
    let servicos = ServicoRepo::list_ativos(&state.pool).await?;
    Ok(Json(ApiResponse::ok(servicos)))
}

/// GET /api/v1/servicos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Servico>>> {
    let servico = ServicoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Servico",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(servico)))
}

/// PUT /api/v1/servicos/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServico>,
) -> AppResult<Json<ApiResponse<Servico>>> {
    input.validate()?;
    let servico = ServicoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Servico",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(servico)))
}

/// DELETE /api/v1/servicos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ServicoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Servico",
            id,
        }))
    }
}
