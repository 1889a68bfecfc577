//! Handlers for the `/atendimentos` resource (service appointments).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::atendimento::{
    AtendimentoResponse, CreateAtendimento, UpdateAtendimento,
};
use petshop_db::models::status::AtendimentoStatus;
use petshop_db::repositories::{
    atendimento_repo, AtendimentoRepo, FuncionarioRepo, PetRepo, ServicoRepo,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// Request body for `PATCH /atendimentos/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    /// Target status label (`"em_andamento"`, `"concluido"`, ...).
    pub status: String,
}

/// POST /api/v1/atendimentos
///
/// The referenced pet, funcionario, and servico must all exist; each
/// missing reference is a 404 naming the entity.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateAtendimento>,
) -> AppResult<(StatusCode, Json<ApiResponse<AtendimentoResponse>>)> {
    input.validate()?;

    PetRepo::find_by_id(&state.pool, input.pet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: input.pet_id,
        }))?;

    FuncionarioRepo::find_by_id(&state.pool, input.funcionario_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Funcionario",
            id: input.funcionario_id,
        }))?;

    ServicoRepo::find_by_id(&state.pool, input.servico_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Servico",
            id: input.servico_id,
        }))?;

    let atendimento = AtendimentoRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AtendimentoResponse::from(&atendimento))),
    ))
}

/// GET /api/v1/atendimentos
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<AtendimentoResponse>>>> {
    let (order_by, descending) = params.ordering(atendimento_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let atendimentos =
        AtendimentoRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = AtendimentoRepo::count(&state.pool, search).await?;

    let items = atendimentos.iter().map(AtendimentoResponse::from).collect();
    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/atendimentos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<AtendimentoResponse>>> {
    let atendimento = AtendimentoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Atendimento",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(AtendimentoResponse::from(&atendimento))))
}

/// PUT /api/v1/atendimentos/{id}
///
/// Reschedule or annotate; status changes go through the status endpoint.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAtendimento>,
) -> AppResult<Json<ApiResponse<AtendimentoResponse>>> {
    input.validate()?;
    let atendimento = AtendimentoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Atendimento",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(AtendimentoResponse::from(&atendimento))))
}

/// PATCH /api/v1/atendimentos/{id}/status
///
/// Validates the lifecycle before writing: Agendado -> EmAndamento |
/// Cancelado, EmAndamento -> Concluido | Cancelado.
pub async fn change_status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<StatusChange>,
) -> AppResult<Json<ApiResponse<AtendimentoResponse>>> {
    let target = AtendimentoStatus::from_label(&input.status).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown status '{}'", input.status))
    })?;

    let current = AtendimentoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Atendimento",
            id,
        }))?;

    let current_status = AtendimentoStatus::from_id(current.status_id).ok_or_else(|| {
        AppError::InternalError(format!(
            "Atendimento {id} has unknown status_id {}",
            current.status_id
        ))
    })?;

    if !current_status.can_transition_to(target) {
        return Err(AppError::BadRequest(format!(
            "Cannot transition atendimento from '{}' to '{}'",
            current_status.label(),
            target.label()
        )));
    }

    let atendimento = AtendimentoRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Atendimento",
            id,
        }))?;

    Ok(Json(ApiResponse::ok(AtendimentoResponse::from(&atendimento))))
}

/// DELETE /api/v1/atendimentos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = AtendimentoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Atendimento",
            id,
        }))
    }
}
