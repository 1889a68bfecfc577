//! Solicitacao (support request) entity model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::SolicitacaoStatus;

/// A support request row from the `solicitacoes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Solicitacao {
    pub id: DbId,
    pub cliente_id: DbId,
    pub assunto: String,
    pub descricao: String,
    pub status_id: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API-facing representation: `status_id` resolved to its wire label.
#[derive(Debug, Clone, Serialize)]
pub struct SolicitacaoResponse {
    pub id: DbId,
    pub cliente_id: DbId,
    pub assunto: String,
    pub descricao: String,
    pub status: &'static str,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Solicitacao> for SolicitacaoResponse {
    fn from(s: &Solicitacao) -> Self {
        let status = SolicitacaoStatus::from_id(s.status_id)
            .map(SolicitacaoStatus::label)
            .unwrap_or("desconhecido");
        Self {
            id: s.id,
            cliente_id: s.cliente_id,
            assunto: s.assunto.clone(),
            descricao: s.descricao.clone(),
            status,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// DTO for creating a new solicitacao. New requests always start Pendente.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSolicitacao {
    pub cliente_id: DbId,
    #[validate(length(min = 1, message = "assunto must not be empty"))]
    pub assunto: String,
    #[validate(length(min = 1, message = "descricao must not be empty"))]
    pub descricao: String,
}

/// DTO for updating assunto/descricao (status changes go through the
/// dedicated transition endpoint).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSolicitacao {
    #[validate(length(min = 1, message = "assunto must not be empty"))]
    pub assunto: Option<String>,
    #[validate(length(min = 1, message = "descricao must not be empty"))]
    pub descricao: Option<String>,
}
