//! SMALLINT-backed status enums and their lifecycle rules.
//!
//! The database stores `status_id` as SMALLINT; these enums are the source
//! of truth for what each id means and which transitions are legal.

/// Lifecycle of a customer support request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum SolicitacaoStatus {
    Pendente = 1,
    EmAndamento = 2,
    Concluida = 3,
    Cancelada = 4,
}

impl SolicitacaoStatus {
    /// Map a raw `status_id` to the enum. Returns `None` for unknown ids.
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Pendente),
            2 => Some(Self::EmAndamento),
            3 => Some(Self::Concluida),
            4 => Some(Self::Cancelada),
            _ => None,
        }
    }

    /// Parse the canonical wire label (`"pendente"`, `"em_andamento"`, ...).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "pendente" => Some(Self::Pendente),
            "em_andamento" => Some(Self::EmAndamento),
            "concluida" => Some(Self::Concluida),
            "cancelada" => Some(Self::Cancelada),
            _ => None,
        }
    }

    /// Canonical wire label for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::EmAndamento => "em_andamento",
            Self::Concluida => "concluida",
            Self::Cancelada => "cancelada",
        }
    }

    /// Lifecycle: Pendente -> EmAndamento | Cancelada;
    /// EmAndamento -> Concluida | Cancelada; terminal states accept nothing.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pendente, Self::EmAndamento)
                | (Self::Pendente, Self::Cancelada)
                | (Self::EmAndamento, Self::Concluida)
                | (Self::EmAndamento, Self::Cancelada)
        )
    }
}

/// Lifecycle of a service appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum AtendimentoStatus {
    Agendado = 1,
    EmAndamento = 2,
    Concluido = 3,
    Cancelado = 4,
}

impl AtendimentoStatus {
    /// Map a raw `status_id` to the enum. Returns `None` for unknown ids.
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Agendado),
            2 => Some(Self::EmAndamento),
            3 => Some(Self::Concluido),
            4 => Some(Self::Cancelado),
            _ => None,
        }
    }

    /// Parse the canonical wire label (`"agendado"`, `"em_andamento"`, ...).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "agendado" => Some(Self::Agendado),
            "em_andamento" => Some(Self::EmAndamento),
            "concluido" => Some(Self::Concluido),
            "cancelado" => Some(Self::Cancelado),
            _ => None,
        }
    }

    /// Canonical wire label for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Agendado => "agendado",
            Self::EmAndamento => "em_andamento",
            Self::Concluido => "concluido",
            Self::Cancelado => "cancelado",
        }
    }

    /// Lifecycle: Agendado -> EmAndamento | Cancelado;
    /// EmAndamento -> Concluido | Cancelado; terminal states accept nothing.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Agendado, Self::EmAndamento)
                | (Self::Agendado, Self::Cancelado)
                | (Self::EmAndamento, Self::Concluido)
                | (Self::EmAndamento, Self::Cancelado)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solicitacao_labels_round_trip() {
        for status in [
            SolicitacaoStatus::Pendente,
            SolicitacaoStatus::EmAndamento,
            SolicitacaoStatus::Concluida,
            SolicitacaoStatus::Cancelada,
        ] {
            assert_eq!(SolicitacaoStatus::from_label(status.label()), Some(status));
            assert_eq!(SolicitacaoStatus::from_id(status as i16), Some(status));
        }
        assert_eq!(SolicitacaoStatus::from_label("aberta"), None);
        assert_eq!(SolicitacaoStatus::from_id(0), None);
    }

    #[test]
    fn solicitacao_lifecycle_allows_forward_transitions() {
        use SolicitacaoStatus::*;
        assert!(Pendente.can_transition_to(EmAndamento));
        assert!(Pendente.can_transition_to(Cancelada));
        assert!(EmAndamento.can_transition_to(Concluida));
        assert!(EmAndamento.can_transition_to(Cancelada));
    }

    #[test]
    fn solicitacao_lifecycle_rejects_backwards_and_terminal() {
        use SolicitacaoStatus::*;
        // Skipping straight to done is not allowed.
        assert!(!Pendente.can_transition_to(Concluida));
        assert!(!EmAndamento.can_transition_to(Pendente));
        // Terminal states are final.
        assert!(!Concluida.can_transition_to(EmAndamento));
        assert!(!Cancelada.can_transition_to(Pendente));
        // Self-transition is not a transition.
        assert!(!Pendente.can_transition_to(Pendente));
    }

    #[test]
    fn atendimento_lifecycle_mirrors_solicitacao() {
        use AtendimentoStatus::*;
        assert!(Agendado.can_transition_to(EmAndamento));
        assert!(EmAndamento.can_transition_to(Concluido));
        assert!(!Agendado.can_transition_to(Concluido));
        assert!(!Concluido.can_transition_to(Agendado));
        assert!(!Cancelado.can_transition_to(EmAndamento));
    }
}
