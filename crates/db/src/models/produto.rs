//! Produto entity model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A product row from the `produtos` table.
///
/// `estoque` is guarded by a `CHECK (estoque >= 0)` constraint; the stock
/// adjustment repo method additionally refuses deltas that would go below
/// zero so callers get a clean 400 instead of a constraint error.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Produto {
    pub id: DbId,
    pub nome: String,
    pub descricao: Option<String>,
    pub categoria: String,
    pub preco: Decimal,
    pub estoque: i32,
    pub estoque_minimo: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new produto.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduto {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    pub descricao: Option<String>,
    #[validate(length(min = 1, message = "categoria must not be empty"))]
    pub categoria: String,
    pub preco: Decimal,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0, message = "estoque must not be negative"))]
    pub estoque: Option<i32>,
    /// Defaults to 5 if omitted.
    #[validate(range(min = 0, message = "estoque_minimo must not be negative"))]
    pub estoque_minimo: Option<i32>,
}

/// DTO for updating an existing produto. All fields are optional; stock is
/// mutated only through the dedicated delta endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProduto {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    #[validate(length(min = 1, message = "categoria must not be empty"))]
    pub categoria: Option<String>,
    pub preco: Option<Decimal>,
    #[validate(range(min = 0, message = "estoque_minimo must not be negative"))]
    pub estoque_minimo: Option<i32>,
}
