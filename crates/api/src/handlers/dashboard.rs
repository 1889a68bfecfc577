//! Handler for the landing dashboard aggregates.

use axum::extract::State;
use axum::Json;
use petshop_db::models::dashboard::DashboardSummary;
use petshop_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// One-shot counters for the landing page: entity totals, low-stock and
/// pending-request counts, today's appointments, current-month sales.
pub async fn summary(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<DashboardSummary>>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
