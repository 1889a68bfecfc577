//! Handlers for the `/funcionarios` resource (staff management).
//!
//! All handlers require the `admin` cargo via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::roles::is_valid_cargo;
use petshop_core::types::DbId;
use petshop_db::models::funcionario::{CreateFuncionario, FuncionarioResponse, UpdateFuncionario};
use petshop_db::repositories::{funcionario_repo, FuncionarioRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// Minimum password length enforced on creation and password change.
const MIN_SENHA_LENGTH: usize = 8;

/// Request body for `POST /funcionarios`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuncionarioRequest {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub senha: String,
    pub cargo: String,
}

/// Request body for `PATCH /funcionarios/{id}/senha`.
#[derive(Debug, Deserialize)]
pub struct ChangeSenhaRequest {
    pub nova_senha: String,
}

/// POST /api/v1/funcionarios
///
/// Validates cargo and password strength, hashes the senha, and returns a
/// safe [`FuncionarioResponse`] with 201 Created. Duplicate emails surface
/// as 409 via the `uq_funcionarios_email` constraint.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFuncionarioRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<FuncionarioResponse>>)> {
    input.validate()?;

    if !is_valid_cargo(&input.cargo) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid cargo '{}'",
            input.cargo
        ))));
    }

    validate_password_strength(&input.senha, MIN_SENHA_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let senha_hash = hash_password(&input.senha)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateFuncionario {
        nome: input.nome,
        email: input.email,
        senha_hash,
        cargo: input.cargo,
    };

    let funcionario = FuncionarioRepo::create(&state.pool, &create_dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(FuncionarioResponse::from(&funcionario))),
    ))
}

/// GET /api/v1/funcionarios
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<FuncionarioResponse>>>> {
    let (order_by, descending) = params.ordering(funcionario_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let funcionarios =
        FuncionarioRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = FuncionarioRepo::count(&state.pool, search).await?;

    let items = funcionarios.iter().map(FuncionarioResponse::from).collect();
    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/funcionarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<FuncionarioResponse>>> {
    let funcionario = FuncionarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Funcionario",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(FuncionarioResponse::from(&funcionario))))
}

/// PUT /api/v1/funcionarios/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFuncionario>,
) -> AppResult<Json<ApiResponse<FuncionarioResponse>>> {
    input.validate()?;

    if let Some(cargo) = &input.cargo {
        if !is_valid_cargo(cargo) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid cargo '{cargo}'"
            ))));
        }
    }

    let funcionario = FuncionarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Funcionario",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(FuncionarioResponse::from(&funcionario))))
}

/// PATCH /api/v1/funcionarios/{id}/senha
///
/// Replace a funcionario's password.
pub async fn change_senha(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ChangeSenhaRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    validate_password_strength(&input.nova_senha, MIN_SENHA_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let senha_hash = hash_password(&input.nova_senha)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = FuncionarioRepo::update_senha(&state.pool, id, &senha_hash).await?;
    if updated {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Funcionario",
            id,
        }))
    }
}

/// DELETE /api/v1/funcionarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    // An admin deleting their own account would lock everyone out of staff
    // management; reject it.
    if admin.funcionario_id == id {
        return Err(AppError::BadRequest(
            "A funcionario cannot delete their own account".into(),
        ));
    }

    let deleted = FuncionarioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Funcionario",
            id,
        }))
    }
}
