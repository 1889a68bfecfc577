//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods take an
//! ORDER BY column that MUST come from the repo's `ORDER_COLUMNS`
//! whitelist (the API layer validates this before calling).

pub mod atendimento_repo;
pub mod cliente_repo;
pub mod dashboard_repo;
pub mod funcionario_repo;
pub mod pet_repo;
pub mod produto_repo;
pub mod servico_repo;
pub mod solicitacao_repo;
pub mod venda_repo;

pub use atendimento_repo::AtendimentoRepo;
pub use cliente_repo::ClienteRepo;
pub use dashboard_repo::DashboardRepo;
pub use funcionario_repo::FuncionarioRepo;
pub use pet_repo::PetRepo;
pub use produto_repo::ProdutoRepo;
pub use servico_repo::ServicoRepo;
pub use solicitacao_repo::SolicitacaoRepo;
pub use venda_repo::{VendaError, VendaRepo};
