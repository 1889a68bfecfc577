//! Route definitions for the `/atendimentos` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::atendimento;
use crate::state::AppState;

/// Routes mounted at `/atendimentos`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete (admin)
/// PATCH  /{id}/status    -> change_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(atendimento::list).post(atendimento::create))
        .route(
            "/{id}",
            get(atendimento::get_by_id)
                .put(atendimento::update)
                .delete(atendimento::delete),
        )
        .route("/{id}/status", patch(atendimento::change_status))
}
