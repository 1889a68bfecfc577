//! Entity models and DTOs.
//!
//! Each entity module contains the row struct (derives `sqlx::FromRow`) plus
//! `Create*` / `Update*` DTOs. Create DTOs carry `validator` constraints;
//! the API layer runs them before touching the database.

pub mod atendimento;
pub mod cliente;
pub mod dashboard;
pub mod funcionario;
pub mod pet;
pub mod produto;
pub mod servico;
pub mod solicitacao;
pub mod status;
pub mod venda;
