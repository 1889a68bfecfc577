//! Handlers for the `/clientes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::cliente::{Cliente, CreateCliente, UpdateCliente};
use petshop_db::models::pet::Pet;
use petshop_db::repositories::{cliente_repo, ClienteRepo, PetRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// POST /api/v1/clientes
///
/// Duplicate emails surface as 409 via the `uq_clientes_email` constraint.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCliente>,
) -> AppResult<(StatusCode, Json<ApiResponse<Cliente>>)> {
    input.validate()?;
    let cliente = ClienteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(cliente))))
}

/// GET /api/v1/clientes
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<Cliente>>>> {
    let (order_by, descending) = params.ordering(cliente_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let items = ClienteRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = ClienteRepo::count(&state.pool, search).await?;

    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/clientes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Cliente>>> {
    let cliente = ClienteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(cliente)))
}

/// GET /api/v1/clientes/{id}/pets
pub async fn list_pets(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Pet>>>> {
    // 404 for a nonexistent cliente rather than an empty list.
    ClienteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id,
        }))?;

    let pets = PetRepo::list_by_cliente(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(pets)))
}

/// PUT /api/v1/clientes/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCliente>,
) -> AppResult<Json<ApiResponse<Cliente>>> {
    input.validate()?;
    let cliente = ClienteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(cliente)))
}

/// DELETE /api/v1/clientes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ClienteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id,
        }))
    }
}
