//! Route definitions for the `/clientes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cliente;
use crate::state::AppState;

/// Routes mounted at `/clientes`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete (admin)
/// GET    /{id}/pets  -> list_pets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cliente::list).post(cliente::create))
        .route(
            "/{id}",
            get(cliente::get_by_id)
                .put(cliente::update)
                .delete(cliente::delete),
        )
        .route("/{id}/pets", get(cliente::list_pets))
}
