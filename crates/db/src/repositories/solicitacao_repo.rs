//! Repository for the `solicitacoes` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::solicitacao::{CreateSolicitacao, Solicitacao, UpdateSolicitacao};
use crate::models::status::SolicitacaoStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cliente_id, assunto, descricao, status_id, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "assunto", "status_id", "created_at"];

/// Provides CRUD operations for solicitacoes.
pub struct SolicitacaoRepo;

impl SolicitacaoRepo {
    /// Insert a new solicitacao, returning the created row. Starts Pendente.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSolicitacao,
    ) -> Result<Solicitacao, sqlx::Error> {
        let query = format!(
            "INSERT INTO solicitacoes (cliente_id, assunto, descricao)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Solicitacao>(&query)
            .bind(input.cliente_id)
            .bind(&input.assunto)
            .bind(&input.descricao)
            .fetch_one(pool)
            .await
    }

    /// Find a solicitacao by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Solicitacao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM solicitacoes WHERE id = $1");
        sqlx::query_as::<_, Solicitacao>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of solicitacoes. `search` matches assunto;
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Solicitacao>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE assunto ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM solicitacoes {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Solicitacao>(&query)
            .bind(limit)
            .bind(offset);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_all(pool).await
    }

    /// Total row count under the same `search` filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE assunto ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM solicitacoes {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// Update assunto/descricao. Only non-`None` fields in `input` apply.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSolicitacao,
    ) -> Result<Option<Solicitacao>, sqlx::Error> {
        let query = format!(
            "UPDATE solicitacoes SET
                assunto = COALESCE($2, assunto),
                descricao = COALESCE($3, descricao),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Solicitacao>(&query)
            .bind(id)
            .bind(&input.assunto)
            .bind(&input.descricao)
            .fetch_optional(pool)
            .await
    }

    /// Set the status. Lifecycle validation happens in the API layer; this
    /// just writes the new id.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: SolicitacaoStatus,
    ) -> Result<Option<Solicitacao>, sqlx::Error> {
        let query = format!(
            "UPDATE solicitacoes SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Solicitacao>(&query)
            .bind(id)
            .bind(status as i16)
            .fetch_optional(pool)
            .await
    }

    /// Delete a solicitacao by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM solicitacoes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
