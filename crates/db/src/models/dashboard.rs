//! Dashboard aggregate counters.

use rust_decimal::Decimal;
use serde::Serialize;

/// One-shot summary for the landing dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_clientes: i64,
    pub total_pets: i64,
    pub servicos_ativos: i64,
    pub produtos_estoque_baixo: i64,
    pub solicitacoes_pendentes: i64,
    pub atendimentos_hoje: i64,
    pub vendas_mes: i64,
    pub receita_mes: Decimal,
}
