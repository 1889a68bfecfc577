pub mod atendimento;
pub mod auth;
pub mod cliente;
pub mod dashboard;
pub mod funcionario;
pub mod health;
pub mod pet;
pub mod produto;
pub mod servico;
pub mod solicitacao;
pub mod venda;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/me                          current funcionario (requires auth)
///
/// /clientes                         list, create
/// /clientes/{id}                    get, update, delete (admin)
/// /clientes/{id}/pets               pets of one cliente
///
/// /pets                             list, create
/// /pets/{id}                        get, update, delete (admin)
///
/// /funcionarios                     list, create (admin only)
/// /funcionarios/{id}                get, update, delete (admin only)
/// /funcionarios/{id}/senha          change password (admin only)
///
/// /produtos                         list, create
/// /produtos/estoque-baixo           low-stock products
/// /produtos/{id}                    get, update, delete (admin)
/// /produtos/{id}/estoque            stock delta (PATCH)
///
/// /servicos                         list, create
/// /servicos/ativos                  active services
/// /servicos/{id}                    get, update, delete (admin)
///
/// /vendas                           list, create
/// /vendas/estatisticas              sales statistics (?inicio=&fim=)
/// /vendas/{id}                      get, delete (admin)
///
/// /solicitacoes                     list, create
/// /solicitacoes/{id}                get, update, delete (admin)
/// /solicitacoes/{id}/status         lifecycle transition (PATCH)
///
/// /atendimentos                     list, create
/// /atendimentos/{id}                get, update, delete (admin)
/// /atendimentos/{id}/status         lifecycle transition (PATCH)
///
/// /dashboard                        aggregate counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/clientes", cliente::router())
        .nest("/pets", pet::router())
        .nest("/funcionarios", funcionario::router())
        .nest("/produtos", produto::router())
        .nest("/servicos", servico::router())
        .nest("/vendas", venda::router())
        .nest("/solicitacoes", solicitacao::router())
        .nest("/atendimentos", atendimento::router())
        .nest("/dashboard", dashboard::router())
}
