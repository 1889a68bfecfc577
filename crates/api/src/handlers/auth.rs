//! Handlers for the `/auth` resource (login, current user).

use axum::extract::State;
use axum::Json;
use petshop_core::error::CoreError;
use petshop_db::models::funcionario::FuncionarioResponse;
use petshop_db::repositories::FuncionarioRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub funcionario: FuncionarioResponse,
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + senha. Returns a bearer token whose claims
/// carry the funcionario's id, email, and cargo.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let funcionario = FuncionarioRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid email or senha".into())))?;

    if !funcionario.ativo {
        return Err(AppError::Core(CoreError::Forbidden(
            "Conta desativada".into(),
        )));
    }

    let senha_valid = verify_password(&input.senha, &funcionario.senha_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !senha_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or senha".into(),
        )));
    }

    let token = generate_token(
        funcionario.id,
        &funcionario.email,
        &funcionario.cargo,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_hours * 3600,
        funcionario: FuncionarioResponse::from(&funcionario),
    })))
}

/// GET /api/v1/auth/me
///
/// The funcionario behind the current bearer token.
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<FuncionarioResponse>>> {
    let funcionario = FuncionarioRepo::find_by_id(&state.pool, user.funcionario_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Funcionario no longer exists".into())))?;

    Ok(Json(ApiResponse::ok(FuncionarioResponse::from(&funcionario))))
}
