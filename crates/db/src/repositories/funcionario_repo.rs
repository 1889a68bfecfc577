//! Repository for the `funcionarios` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::funcionario::{CreateFuncionario, Funcionario, UpdateFuncionario};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, email, senha_hash, cargo, ativo, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "nome", "email", "cargo", "created_at"];

/// Provides CRUD operations for funcionarios.
pub struct FuncionarioRepo;

impl FuncionarioRepo {
    /// Insert a new funcionario, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFuncionario,
    ) -> Result<Funcionario, sqlx::Error> {
        let query = format!(
            "INSERT INTO funcionarios (nome, email, senha_hash, cargo)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Funcionario>(&query)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.senha_hash)
            .bind(&input.cargo)
            .fetch_one(pool)
            .await
    }

    /// Find a funcionario by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Funcionario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM funcionarios WHERE id = $1");
        sqlx::query_as::<_, Funcionario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a funcionario by email (case-sensitive). Used by login.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Funcionario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM funcionarios WHERE email = $1");
        sqlx::query_as::<_, Funcionario>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List one page of funcionarios. `search` matches nome or email;
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Funcionario>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $3 OR email ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM funcionarios {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Funcionario>(&query)
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
            "WHERE nome ILIKE $1 OR email ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM funcionarios {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// Update a funcionario's profile fields. Only non-`None` fields apply.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFuncionario,
    ) -> Result<Option<Funcionario>, sqlx::Error> {
        let query = format!(
            "UPDATE funcionarios SET
                nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                cargo = COALESCE($4, cargo),
                ativo = COALESCE($5, ativo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Funcionario>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.cargo)
            .bind(input.ativo)
            .fetch_optional(pool)
            .await
    }

    /// Replace a funcionario's password hash. Returns `true` on success.
    pub async fn update_senha(
        pool: &PgPool,
        id: DbId,
        senha_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE funcionarios SET senha_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(senha_hash)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a funcionario by ID. Returns `true` if a row was removed.
    /// Vendas and atendimentos referencing the funcionario restrict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM funcionarios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
