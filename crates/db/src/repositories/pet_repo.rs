//! Repository for the `pets` table.

use petshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{CreatePet, Pet, UpdatePet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, cliente_id, nome, especie, raca, data_nascimento, peso_kg, created_at, updated_at";

/// Columns a list request may order by.
pub const ORDER_COLUMNS: &[&str] = &["id", "nome", "especie", "created_at"];

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet, returning the created row. The caller is expected
    /// to have verified that `cliente_id` exists.
    pub async fn create(pool: &PgPool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (cliente_id, nome, especie, raca, data_nascimento, peso_kg)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(input.cliente_id)
            .bind(&input.nome)
            .bind(&input.especie)
            .bind(&input.raca)
            .bind(input.data_nascimento)
            .bind(input.peso_kg)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of pets. `search` matches nome, especie, or raca;
    /// `order_by` must come from [`ORDER_COLUMNS`].
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        order_by: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Pet>, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $3 OR especie ILIKE $3 OR raca ILIKE $3"
        } else {
            ""
        };
        let dir = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM pets {filter}
             ORDER BY {order_by} {dir}
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Pet>(&query).bind(limit).bind(offset);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_all(pool).await
    }

    /// Total row count under the same `search` filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let filter = if search.is_some() {
            "WHERE nome ILIKE $1 OR especie ILIKE $1 OR raca ILIKE $1"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) FROM pets {filter}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = search {
            q = q.bind(format!("%{s}%"));
        }
        q.fetch_one(pool).await
    }

    /// List all pets belonging to one cliente, ordered by name.
    pub async fn list_by_cliente(pool: &PgPool, cliente_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pets WHERE cliente_id = $1 ORDER BY nome ASC"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(cliente_id)
            .fetch_all(pool)
            .await
    }

    /// Update a pet. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                nome = COALESCE($2, nome),
                especie = COALESCE($3, especie),
                raca = COALESCE($4, raca),
                data_nascimento = COALESCE($5, data_nascimento),
                peso_kg = COALESCE($6, peso_kg),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.especie)
            .bind(&input.raca)
            .bind(input.data_nascimento)
            .bind(input.peso_kg)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
