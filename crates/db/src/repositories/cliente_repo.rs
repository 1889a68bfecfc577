//! Repository for the `clientes` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::cliente::{Cliente, CreateCliente, UpdateCliente};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, email, telefone, endereco, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "nome", "email", "created_at"];

/// Provides CRUD operations for clientes.
pub struct ClienteRepo;

impl ClienteRepo {
    /// Insert a new cliente, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCliente) -> Result<Cliente, sqlx::Error> {
        let query = format!(
            "INSERT INTO clientes (nome, email, telefone, endereco)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.telefone)
            .bind(&input.endereco)
            .fetch_one(pool)
            .await
    }

    /// Find a cliente by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clientes WHERE id = $1");
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of clientes. `search` matches nome or email (ILIKE);
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Cliente>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $3 OR email ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM clientes {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Cliente>(&query).bind(limit).bind(offset);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_all(pool).await
    }

    /// Total row count under the same `search` filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $1 OR email ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM clientes {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// Update a cliente. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCliente,
    ) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!(
            "UPDATE clientes SET
                nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                telefone = COALESCE($4, telefone),
                endereco = COALESCE($5, endereco),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.telefone)
            .bind(&input.endereco)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cliente by ID. Returns `true` if a row was removed.
    /// Pets and solicitacoes cascade; vendas restrict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
