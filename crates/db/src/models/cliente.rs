//! Cliente entity model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A customer row from the `clientes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cliente {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub endereco: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cliente.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCliente {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "telefone must have at least 8 digits"))]
    pub telefone: String,
    pub endereco: Option<String>,
}

/// DTO for updating an existing cliente. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCliente {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "telefone must have at least 8 digits"))]
    pub telefone: Option<String>,
    pub endereco: Option<String>,
}
