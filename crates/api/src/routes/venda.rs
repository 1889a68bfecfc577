//! Route definitions for the `/vendas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::venda;
use crate::state::AppState;

/// Routes mounted at `/vendas`. Sales are immutable once created: there is
/// no PUT; corrections are a delete plus a new sale.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /estatisticas   -> estatisticas
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venda::list).post(venda::create))
        // Static segment before the `{id}` matcher.
        .route("/estatisticas", get(venda::estatisticas))
        .route("/{id}", get(venda::get_by_id).delete(venda::delete))
}
