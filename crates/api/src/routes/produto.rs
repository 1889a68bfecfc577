//! Route definitions for the `/produtos` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::produto;
use crate::state::AppState;

/// Routes mounted at `/produtos`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /estoque-baixo   -> estoque_baixo
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete (admin)
/// PATCH  /{id}/estoque    -> adjust_estoque
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(produto::list).post(produto::create))
        // Static segment before the `{id}` matcher.
        .route("/estoque-baixo", get(produto::estoque_baixo))
        .route(
            "/{id}",
            get(produto::get_by_id)
                .put(produto::update)
                .delete(produto::delete),
        )
        .route("/{id}/estoque", patch(produto::adjust_estoque))
}
