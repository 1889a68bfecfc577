//! Role-based access control extractor.
//!
//! Wraps [`AuthUser`] and rejects requests whose cargo does not meet the
//! minimum requirement, enforcing authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use petshop_core::error::CoreError;
use petshop_core::roles::CARGO_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` cargo. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.cargo != CARGO_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin cargo required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
