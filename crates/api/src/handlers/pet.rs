//! Handlers for the `/pets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_core::types::DbId;
use petshop_db::models::pet::{CreatePet, Pet, UpdatePet};
use petshop_db::repositories::{pet_repo, ClienteRepo, PetRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

/// POST /api/v1/pets
///
/// The owner must exist: a nonexistent `cliente_id` is a 404, not a bare
/// foreign-key error.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreatePet>,
) -> AppResult<(StatusCode, Json<ApiResponse<Pet>>)> {
    input.validate()?;

    ClienteRepo::find_by_id(&state.pool, input.cliente_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cliente",
            id: input.cliente_id,
        }))?;

    let pet = PetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pet))))
}

/// GET /api/v1/pets
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ApiResponse<Paginated<Pet>>>> {
    let (order_by, descending) = params.ordering(pet_repo::ORDER_COLUMNS, "id")?;
    let (page, limit, offset) = params.pagination();
    let search = params.search();

    let items = PetRepo::list(&state.pool, search, order_by, descending, limit, offset).await?;
    let total = PetRepo::count(&state.pool, search).await?;

    Ok(Json(ApiResponse::ok(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /api/v1/pets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Pet>>> {
    let pet = PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;
    Ok(Json(ApiResponse::ok(pet)))
}

/// PUT /api/v1/pets/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<Json<ApiResponse<Pet>>> {
    input.validate()?;
    let pet = PetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;
    Ok(Json(ApiResponse::ok(pet)))
}

/// DELETE /api/v1/pets/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = PetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::ok(())))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Pet", id }))
    }
}
