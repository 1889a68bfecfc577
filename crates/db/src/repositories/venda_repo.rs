//! Repository for the `vendas` and `venda_itens` tables.

use petshop_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::venda::{
    CreateVenda, FormaPagamentoTotal, Venda, VendaComItens, VendaEstatisticas, VendaItem,
};

/// Column list for `vendas` queries.
const COLUMNS: &str = "id, cliente_id, funcionario_id, forma_pagamento, total, created_at";

/// Column list for `venda_itens` queries.
const ITEM_COLUMNS: &str = "id, venda_id, produto_id, quantidade, preco_unitario";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "total", "forma_pagamento", "created_at"];

/// Errors from sale creation beyond plain database failures.
#[derive(Debug, thiserror::Error)]
pub enum VendaError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),

    #[error("Produto {0} not found")]
    ProdutoNotFound(DbId),

    #[error("Estoque insuficiente para produto {0}")]
    EstoqueInsuficiente(DbId),
}

/// Provides sale operations. Creation is transactional: the venda row, its
/// item lines, and the stock decrements all commit or roll back together.
pub struct VendaRepo;

impl VendaRepo {
    /// Create a sale with its item lines.
    ///
    /// For each item the product row is locked, stock is decremented only if
    /// sufficient, and the current price is captured into the item line. The
    /// sale total is the sum of `preco * quantidade` over all lines.
    pub async fn create(pool: &PgPool, input: &CreateVenda) -> Result<VendaComItens, VendaError> {
        let mut tx = pool.begin().await?;

        let insert_venda = format!(
            "INSERT INTO vendas (cliente_id, funcionario_id, forma_pagamento)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let venda: Venda = sqlx::query_as(&insert_venda)
            .bind(input.cliente_id)
            .bind(input.funcionario_id)
            .bind(&input.forma_pagamento)
            .fetch_one(&mut *tx)
            .await?;

        let mut itens = Vec::with_capacity(input.itens.len());
        let mut total = Decimal::ZERO;

        for item in &input.itens {
            let preco: Option<Decimal> =
                sqlx::query_scalar("SELECT preco FROM produtos WHERE id = $1 FOR UPDATE")
                    .bind(item.produto_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            let preco = preco.ok_or(VendaError::ProdutoNotFound(item.produto_id))?;

            // Decrement stock only when enough is available; zero rows
            // affected means the guard failed and the whole sale rolls back.
            let decremented = sqlx::query(
                "UPDATE produtos SET estoque = estoque - $2, updated_at = NOW()
                 WHERE id = $1 AND estoque >= $2",
            )
            .bind(item.produto_id)
            .bind(item.quantidade)
            .execute(&mut *tx)
            .await?;
            if decremented.rows_affected() == 0 {
                return Err(VendaError::EstoqueInsuficiente(item.produto_id));
            }

            let insert_item = format!(
                "INSERT INTO venda_itens (venda_id, produto_id, quantidade, preco_unitario)
                 VALUES ($1, $2, $3, $4)
                 RETURNING {ITEM_COLUMNS}"
            );
            let venda_item: VendaItem = sqlx::query_as(&insert_item)
                .bind(venda.id)
                .bind(item.produto_id)
                .bind(item.quantidade)
                .bind(preco)
                .fetch_one(&mut *tx)
                .await?;

            total += preco * Decimal::from(item.quantidade);
            itens.push(venda_item);
        }

        let update_total =
            format!("UPDATE vendas SET total = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let venda: Venda = sqlx::query_as(&update_total)
            .bind(venda.id)
            .bind(total)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(VendaComItens { venda, itens })
    }

    /// Find a sale with its item lines. Returns `None` if no such sale.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VendaComItens>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendas WHERE id = $1");
        let Some(venda) = sqlx::query_as::<_, Venda>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let itens_query =
            format!("SELECT {ITEM_COLUMNS} FROM venda_itens WHERE venda_id = $1 ORDER BY id");
        let itens = sqlx::query_as::<_, VendaItem>(&itens_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(VendaComItens { venda, itens }))
    }

    /// List one page of sales (without item lines). `search` matches the
    /// payment method; `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Venda>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE forma_pagamento ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM vendas {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Venda>(&query).bind(limit).bind(offset);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_all(pool).await
    }

    /// Total row count under the same `search` filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE forma_pagamento ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM vendas {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// Delete a sale by ID. Item lines cascade. Returns `true` if a row was
    /// removed. Stock is NOT restored; cancelled sales are an accounting
    /// concern, not an inventory one.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vendas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate sales statistics over an optional half-open date range
    /// `[inicio, fim)`.
    pub async fn estatisticas(
        pool: &PgPool,
        inicio: Option<Timestamp>,
        fim: Option<Timestamp>,
    ) -> Result<VendaEstatisticas, sqlx::Error> {
        const RANGE: &str = "($1::timestamptz IS NULL OR created_at >= $1)
             AND ($2::timestamptz IS NULL OR created_at < $2)";

        let total_vendas: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM vendas WHERE {RANGE}"))
                .bind(inicio)
                .bind(fim)
                .fetch_one(pool)
                .await?;

        let receita_total: Decimal = sqlx::query_scalar(&format!(
            "SELECT COALESCE(SUM(total), 0) FROM vendas WHERE {RANGE}"
        ))
        .bind(inicio)
        .bind(fim)
        .fetch_one(pool)
        .await?;

        let ticket_medio = if total_vendas > 0 {
            receita_total / Decimal::from(total_vendas)
        } else {
            Decimal::ZERO
        };

        let por_forma_pagamento = sqlx::query_as::<_, FormaPagamentoTotal>(&format!(
            "SELECT forma_pagamento, COUNT(*) AS total_vendas, COALESCE(SUM(total), 0) AS receita
             FROM vendas WHERE {RANGE}
             GROUP BY forma_pagamento
             ORDER BY receita DESC"
        ))
        .bind(inicio)
        .bind(fim)
        .fetch_all(pool)
        .await?;

        Ok(VendaEstatisticas {
            total_vendas,
            receita_total,
            ticket_medio,
            por_forma_pagamento,
        })
    }
}
