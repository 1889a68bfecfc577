//! Aggregate queries for the landing dashboard.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Provides the one-shot dashboard summary.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Gather all dashboard counters. Each counter is one scalar query;
    /// the pool interleaves them on its own connections.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let total_clientes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(pool)
            .await?;

        let total_pets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
            .fetch_one(pool)
            .await?;

        let servicos_ativos: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM servicos WHERE ativo = true")
                .fetch_one(pool)
                .await?;

        let produtos_estoque_baixo: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM produtos WHERE estoque <= estoque_minimo")
                .fetch_one(pool)
                .await?;

        let solicitacoes_pendentes: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM solicitacoes WHERE status_id = 1")
                .fetch_one(pool)
                .await?;

        let atendimentos_hoje: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM atendimentos
             WHERE data_agendada >= date_trunc('day', NOW())
               AND data_agendada < date_trunc('day', NOW()) + interval '1 day'",
        )
        .fetch_one(pool)
        .await?;

        let vendas_mes: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM vendas WHERE created_at >= date_trunc('month', NOW())",
        )
        .fetch_one(pool)
        .await?;

        let receita_mes: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total), 0) FROM vendas
             WHERE created_at >= date_trunc('month', NOW())",
        )
        .fetch_one(pool)
        .await?;

        Ok(DashboardSummary {
            total_clientes,
            total_pets,
            servicos_ativos,
            produtos_estoque_baixo,
            solicitacoes_pendentes,
            atendimentos_hoje,
            vendas_mes,
            receita_mes,
        })
    }
}
