//! Route definitions for the `/funcionarios` resource (admin only).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::funcionario;
use crate::state::AppState;

/// Routes mounted at `/funcionarios`. Every handler requires the admin cargo.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// PATCH  /{id}/senha   -> change_senha
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(funcionario::list).post(funcionario::create))
        .route(
            "/{id}",
            get(funcionario::get_by_id)
                .put(funcionario::update)
                .delete(funcionario::delete),
        )
        .route("/{id}/senha", patch(funcionario::change_senha))
}
