use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::dashboard_dto::DashboardStats;
use crate::error::Result;

#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn users_count(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) FROM users").await
    }

    pub async fn clients_count(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) FROM clients").await
    }

    pub async fn deals_count(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) FROM deals").await
    }

    /// Sum of every deal amount, zero when there are no deals.
    pub async fn total_deals_amount(&self) -> Result<Decimal> {
        let total: Decimal = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM deals")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let (users_count, clients_count, deals_count, total_amount) = tokio::try_join!(
            self.users_count(),
            self.clients_count(),
            self.deals_count(),
            self.total_deals_amount(),
        )?;

        Ok(DashboardStats {
            users_count,
            clients_count,
            deals_count,
            total_amount,
        })
    }

    async fn count(&self, sql: &'static str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
