//! Atendimento (service appointment) entity model and DTOs.

use petshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::AtendimentoStatus;

/// An appointment row from the `atendimentos` table, linking a pet, a
/// funcionario, and a servico.
#[derive(Debug, Clone, FromRow)]
pub struct Atendimento {
    pub id: DbId,
    pub pet_id: DbId,
    pub funcionario_id: DbId,
    pub servico_id: DbId,
    pub data_agendada: Timestamp,
    pub status_id: i16,
    pub observacoes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API-facing representation: `status_id` resolved to its wire label.
#[derive(Debug, Clone, Serialize)]
pub struct AtendimentoResponse {
    pub id: DbId,
    pub pet_id: DbId,
    pub funcionario_id: DbId,
    pub servico_id: DbId,
    pub data_agendada: Timestamp,
    pub status: &'static str,
    pub observacoes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Atendimento> for AtendimentoResponse {
    fn from(a: &Atendimento) -> Self {
        let status = AtendimentoStatus::from_id(a.status_id)
            .map(AtendimentoStatus::label)
            .unwrap_or("desconhecido");
        Self {
            id: a.id,
            pet_id: a.pet_id,
            funcionario_id: a.funcionario_id,
            servico_id: a.servico_id,
            data_agendada: a.data_agendada,
            status,
            observacoes: a.observacoes.clone(),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// DTO for creating a new atendimento. New appointments start Agendado.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAtendimento {
    pub pet_id: DbId,
    pub funcionario_id: DbId,
    pub servico_id: DbId,
    pub data_agendada: Timestamp,
    pub observacoes: Option<String>,
}

/// DTO for rescheduling or annotating an appointment (status changes go
/// through the dedicated transition endpoint).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAtendimento {
    pub data_agendada: Option<Timestamp>,
    pub observacoes: Option<String>,
}
