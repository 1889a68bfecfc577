//! Venda (sale) entity models and DTOs.

use petshop_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A sale row from the `vendas` table. `total` is computed server-side
/// from the item lines at creation time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venda {
    pub id: DbId,
    pub cliente_id: DbId,
    pub funcionario_id: DbId,
    pub forma_pagamento: String,
    pub total: Decimal,
    pub created_at: Timestamp,
}

/// A sale line item from the `venda_itens` table. `preco_unitario` is the
/// product price captured at sale time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VendaItem {
    pub id: DbId,
    pub venda_id: DbId,
    pub produto_id: DbId,
    pub quantidade: i32,
    pub preco_unitario: Decimal,
}

/// A sale together with its item lines, as returned by create/get endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct VendaComItens {
    #[serde(flatten)]
    pub venda: Venda,
    pub itens: Vec<VendaItem>,
}

/// Accepted payment methods, mirroring the CHECK constraint on `vendas`.
pub const FORMAS_PAGAMENTO: &[&str] = &["dinheiro", "cartao", "pix"];

/// One requested item line in a sale creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVendaItem {
    pub produto_id: DbId,
    #[validate(range(min = 1, message = "quantidade must be positive"))]
    pub quantidade: i32,
}

/// DTO for creating a sale with its item lines.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenda {
    pub cliente_id: DbId,
    pub funcionario_id: DbId,
    pub forma_pagamento: String,
    #[validate(length(min = 1, message = "a venda must have at least one item"), nested)]
    pub itens: Vec<CreateVendaItem>,
}

/// Aggregated sales statistics over a date range.
#[derive(Debug, Clone, Serialize)]
pub struct VendaEstatisticas {
    pub total_vendas: i64,
    pub receita_total: Decimal,
    pub ticket_medio: Decimal,
    pub por_forma_pagamento: Vec<FormaPagamentoTotal>,
}

/// Revenue grouped by payment method.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormaPagamentoTotal {
    pub forma_pagamento: String,
    pub total_vendas: i64,
    pub receita: Decimal,
}
