//! Funcionario (employee) entity model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full funcionario row from the `funcionarios` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`FuncionarioResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Funcionario {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub cargo: String,
    pub ativo: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe funcionario representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct FuncionarioResponse {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub ativo: bool,
    pub created_at: Timestamp,
}

impl From<&Funcionario> for FuncionarioResponse {
    fn from(f: &Funcionario) -> Self {
        Self {
            id: f.id,
            nome: f.nome.clone(),
            email: f.email.clone(),
            cargo: f.cargo.clone(),
            ativo: f.ativo,
            created_at: f.created_at,
        }
    }
}

/// DTO for inserting a new funcionario. The password arrives pre-hashed;
/// plaintext handling stays in the API layer.
#[derive(Debug, Clone)]
pub struct CreateFuncionario {
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub cargo: String,
}

/// DTO for updating an existing funcionario (not the password).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFuncionario {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub cargo: Option<String>,
    pub ativo: Option<bool>,
}
