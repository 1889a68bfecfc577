//! Pet entity model and DTOs.

use chrono::NaiveDate;
use petshop_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A pet row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub cliente_id: DbId,
    pub nome: String,
    pub especie: String,
    pub raca: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub peso_kg: Option<Decimal>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pet.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePet {
    pub cliente_id: DbId,
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    #[validate(length(min = 1, message = "especie must not be empty"))]
    pub especie: String,
    pub raca: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub peso_kg: Option<Decimal>,
}

/// DTO for updating an existing pet. All fields are optional; `cliente_id`
/// is intentionally absent -- pets do not change owner through this endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePet {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: Option<String>,
    #[validate(length(min = 1, message = "especie must not be empty"))]
    pub especie: Option<String>,
    pub raca: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub peso_kg: Option<Decimal>,
}
