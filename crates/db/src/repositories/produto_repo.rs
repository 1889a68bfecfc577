//! Repository for the `produtos` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::produto::{CreateProduto, Produto, UpdateProduto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, nome, descricao, categoria, preco, estoque, estoque_minimo, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "nome", "categoria", "preco", "estoque", "created_at"];

/// Provides CRUD operations for produtos plus stock helpers.
pub struct ProdutoRepo;

impl ProdutoRepo {
    /// Insert a new produto, returning the created row.
    ///
    /// If `estoque` is `None`, defaults to 0. If `estoque_minimo` is `None`,
    /// defaults to 5.
    pub async fn create(pool: &PgPool, input: &CreateProduto) -> Result<Produto, sqlx::Error> {
        let query = format!(
            "INSERT INTO produtos (nome, descricao, categoria, preco, estoque, estoque_minimo)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 5))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produto>(&query)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(&input.categoria)
            .bind(input.preco)
            .bind(input.estoque)
            .bind(input.estoque_minimo)
            .fetch_one(pool)
            .await
    }

    /// Find a produto by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Produto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM produtos WHERE id = $1");
        sqlx::query_as::<_, Produto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of produtos. `search` matches nome or categoria;
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Produto>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $3 OR categoria ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM produtos {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Produto>(&query).bind(limit).bind(offset);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_all(pool).await
    }

    /// Total row count under the same `search` filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $1 OR categoria ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM produtos {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// List products at or below their minimum stock, lowest stock first.
    pub async fn list_estoque_baixo(pool: &PgPool) -> Result<Vec<Produto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM produtos
             WHERE estoque <= estoque_minimo
             ORDER BY estoque ASC, nome ASC"
        );
        sqlx::query_as::<_, Produto>(&query).fetch_all(pool).await
    }

    /// Update a produto. Only non-`None` fields in `input` are applied.
    /// Stock is NOT touched here; use [`Self::adjust_estoque`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduto,
    ) -> Result<Option<Produto>, sqlx::Error> {
        let query = format!(
            "UPDATE produtos SET
                nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                categoria = COALESCE($4, categoria),
                preco = COALESCE($5, preco),
                estoque_minimo = COALESCE($6, estoque_minimo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produto>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(&input.categoria)
            .bind(input.preco)
            .bind(input.estoque_minimo)
            .fetch_optional(pool)
            .await
    }

    /// Apply a stock delta (positive or negative). The update only happens
    /// when the resulting stock stays non-negative; otherwise returns `None`
    /// and the row is untouched. The caller distinguishes "would go
    /// negative" from "no such produto" by checking existence first.
    pub async fn adjust_estoque(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Produto>, sqlx::Error> {
        let query = format!(
            "UPDATE produtos SET estoque = estoque + $2, updated_at = NOW()
             WHERE id = $1 AND estoque + $2 >= 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produto>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a produto by ID. Returns `true` if a row was removed.
    /// Venda itens referencing the produto restrict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
