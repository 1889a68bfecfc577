//! Route definitions for the `/servicos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::servico;
use crate::state::AppState;

/// Routes mounted at `/servicos`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /ativos  -> ativos
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(servico::list).post(servico::create))
        // Static segment before the `{id}` matcher.
        .route("/ativos", get(servico::ativos))
        .route(
            "/{id}",
            get(servico::get_by_id)
                .put(servico::update)
                .delete(servico::delete),
        )
}
