//! Repository for the `servicos` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::servico::{CreateServico, Servico, UpdateServico};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, nome, descricao, preco, duracao_minutos, ativo, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "nome", "preco", "duracao_minutos", "created_at"];

/// Provides CRUD operations for servicos.
pub struct ServicoRepo;

impl ServicoRepo {
    /// Insert a new servico, returning the created row. New services start active.
    pub async fn create(pool: &PgPool, input: &CreateServico) -> Result<Servico, sqlx::Error> {
        let query = format!(
            "INSERT INTO servicos (nome, descricao, preco, duracao_minutos)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Servico>(&query)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.preco)
            .bind(input.duracao_minutos)
            .fetch_one(pool)
            .await
    }

    /// Find a servico by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Servico>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM servicos WHERE id = $1");
        sqlx::query_as::<_, Servico>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of servicos. `search` matches nome;
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Servico>, sqlx::Error> {
        let filter = if search.is_some() { "WHERE nome ILIKE $3" } else { "" };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM servicos {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Servico>(&query).bind(limit).bind(offset);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_all(pool).await
    }

    /// Total row count under the same `search` filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let filter = if search.is_some() { "WHERE nome ILIKE $1" } else { "" };
        let query = format!("SELECT COUNT(*) FROM servicos {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// List all active services, ordered by name.
    pub async fn list_ativos(pool: &PgPool) -> Result<Vec<Servico>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM servicos WHERE ativo = true ORDER BY nome ASC"
        );
        sqlx::query_as::<_, Servico>(&query).fetch_all(pool).await
    }

    /// Update a servico. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServico,
    ) -> Result<Option<Servico>, sqlx::Error> {
        let query = format!(
            "UPDATE servicos SET
                nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                preco = COALESCE($4, preco),
                duracao_minutos = COALESCE($5, duracao_minutos),
                ativo = COALESCE($6, ativo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Servico>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.preco)
            .bind(input.duracao_minutos)
            .bind(input.ativo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a servico by ID. Returns `true` if a row was removed.
    /// Atendimentos referencing the servico restrict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM servicos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
