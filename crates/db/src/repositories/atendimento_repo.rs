//! Repository for the `atendimentos` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::atendimento::{Atendimento, CreateAtendimento, UpdateAtendimento};
use crate::models::status::AtendimentoStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, pet_id, funcionario_id, servico_id, data_agendada, status_id, \
                       observacoes, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "data_agendada", "status_id", "created_at"];

/// Provides CRUD operations for atendimentos.
pub struct AtendimentoRepo;

impl AtendimentoRepo {
    /// Insert a new atendimento, returning the created row. Starts Agendado.
    /// The caller is expected to have verified the referenced pet,
    /// funcionario, and servico exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAtendimento,
    ) -> Result<Atendimento, sqlx::Error> {
        let query = format!(
            "INSERT INTO atendimentos (pet_id, funcionario_id, servico_id, data_agendada, observacoes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Atendimento>(&query)
            .bind(input.pet_id)
            .bind(input.funcionario_id)
            .bind(input.servico_id)
            .bind(input.data_agendada)
            .bind(&input.observacoes)
            .fetch_one(pool)
            .await
    }

    /// Find an atendimento by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Atendimento>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM atendimentos WHERE id = $1");
        sqlx::query_as::<_, Atendimento>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of atendimentos. `search` matches observacoes;
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Atendimento>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE observacoes ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM atendimentos {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Atendimento>(&query)
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
            "WHERE observacoes ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM atendimentos {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// Reschedule or annotate. Only non-`None` fields in `input` apply.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAtendimento,
    ) -> Result<Option<Atendimento>, sqlx::Error> {
        let query = format!(
            "UPDATE atendimentos SET
                data_agendada = COALESCE($2, data_agendada),
                observacoes = COALESCE($3, observacoes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Atendimento>(&query)
            .bind(id)
            .bind(input.data_agendada)
            .bind(&input.observacoes)
            .fetch_optional(pool)
            .await
    }

    /// Set the status. Lifecycle validation happens in the API layer; this
    /// just writes the new id.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: AtendimentoStatus,
    ) -> Result<Option<Atendimento>, sqlx::Error> {
        let query = format!(
            "UPDATE atendimentos SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Atendimento>(&query)
            .bind(id)
            .bind(status as i16)
            .fetch_optional(pool)
            .await
    }

    /// Delete an atendimento by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM atendimentos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
