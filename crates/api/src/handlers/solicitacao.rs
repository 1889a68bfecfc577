//! Handlers for the `/solicitacoes` resource (customer support requests).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::solicitacao::{CreateSolicitacao, SolicitacaoResponse, UpdateSolicitacao};
use petshop_db::models::status::SolicitacaoStatus;
use petshop_db::repositories::{solicitacao_repo, ClienteRepo, SolicitacaoRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// Request body for `PATCH /solicitacoes/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    /// Target status label (`"em_andamento"`, `"concluida"`, ...).
    pub status: String,
}

/// POST /api/v1/solicitacoes
///
/// New requests always start Pendente. The cliente must exist.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateSolicitacao>,
) -> AppResult<(StatusCode, Json<ApiResponse<SolicitacaoResponse>>)> {
    input.validate()?;

    ClienteRepo::find_by_id(&state.pool, input.cliente_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id: input.cliente_id,
        }))?;

    let solicitacao = SolicitacaoRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(SolicitacaoResponse::from(&solicitacao))),
    ))
}

/// GET /api/v1/solicitacoes
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<SolicitacaoResponse>>>> {
    let (order_by, descending) = params.ordering(solicitacao_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let solicitacoes =
        SolicitacaoRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = SolicitacaoRepo::count(&state.pool, search).await?;

    let items = solicitacoes.iter().map(SolicitacaoResponse::from).collect();
    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/solicitacoes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<SolicitacaoResponse>>> {
    let solicitacao = SolicitacaoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Solicitacao",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(SolicitacaoResponse::from(&solicitacao))))
}

/// PUT /api/v1/solicitacoes/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSolicitacao>,
) -> AppResult<Json<ApiResponse<SolicitacaoResponse>>> {
    input.validate()?;
    let solicitacao = SolicitacaoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Solicitacao",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(SolicitacaoResponse::from(&solicitacao))))
}

/// PATCH /api/v1/solicitacoes/{id}/status
///
/// Validates the lifecycle before writing: Pendente -> EmAndamento |
/// Cancelada, EmAndamento -> Concluida | Cancelada.
pub async fn change_status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<StatusChange>,
) -> AppResult<Json<ApiResponse<SolicitacaoResponse>>> {
    let target = SolicitacaoStatus::from_label(&input.status).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown status '{}'", input.status))
    })?;

    let current = SolicitacaoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Solicitacao",
            id,
        }))?;

    let current_status = SolicitacaoStatus::from_id(current.status_id).ok_or_else(|| {
        AppError::InternalError(format!(
            "Solicitacao {id} has unknown status_id {}",
            current.status_id
        ))
    })?;

    if !current_status.can_transition_to(target) {
        return Err(AppError::BadRequest(format!(
            "Cannot transition solicitacao from '{}' to '{}'",
            current_status.label(),
            target.label()
        )));
    }

    let solicitacao = SolicitacaoRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Solicitacao",
            id,
        }))?;

    Ok(Json(ApiResponse::ok(SolicitacaoResponse::from(&solicitacao))))
}

/// DELETE /api/v1/solicitacoes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = SolicitacaoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Solicitacao",
            id,
        }))
    }
}
