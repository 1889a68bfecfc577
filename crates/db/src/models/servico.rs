//! Servico entity model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A service row from the `servicos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Servico {
    pub id: DbId,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco: Decimal,
    pub duracao_minutos: i32,
    pub ativo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new servico.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServico {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    pub descricao: Option<String>,
    pub preco: Decimal,
    #[validate(range(min = 1, message = "duracao_minutos must be positive"))]
    pub duracao_minutos: i32,
}

/// DTO for updating an existing servico. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServico {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<Decimal>,
    #[validate(range(min = 1, message = "duracao_minutos must be positive"))]
    pub duracao_minutos: Option<i32>,
    pub ativo: Option<bool>,
}
