//! Route definitions for the `/solicitacoes` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::solicitacao;
use crate::state::AppState;

/// Routes mounted at `/solicitacoes`.
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
        .route("/", get(solicitacao::list).post(solicitacao::create))
        .route(
            "/{id}",
            get(solicitacao::get_by_id)
                .put(solicitacao::update)
                .delete(solicitacao::delete),
        )
        .route("/{id}/status", patch(solicitacao::change_status))
}
