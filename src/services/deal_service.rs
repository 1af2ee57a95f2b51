use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::deal::{Deal, DealDraft};
use crate::services::store::write_failure;
use crate::utils::time;

#[derive(Clone)]
pub struct DealService {
    pool: PgPool,
}

impl DealService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Deal>> {
        let deals = sqlx::query_as::<_, Deal>(
            r#"
            SELECT id, deal_name, client_id, amount, stage, responsible_user_id, created_date, deadline_date
            FROM deals
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(deals)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Deal>> {
        let deal = sqlx::query_as::<_, Deal>(
            r#"
            SELECT id, deal_name, client_id, amount, stage, responsible_user_id, created_date, deadline_date
            FROM deals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deal)
    }

    pub async fn insert(&self, draft: DealDraft) -> Result<Deal> {
        let deal = sqlx::query_as::<_, Deal>(
            r#"
            INSERT INTO deals (deal_name, client_id, amount, stage, responsible_user_id, created_date, deadline_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, deal_name, client_id, amount, stage, responsible_user_id, created_date, deadline_date
            "#,
        )
        .bind(&draft.deal_name)
        .bind(draft.client_id)
        .bind(draft.amount)
        .bind(&draft.stage)
        .bind(draft.responsible_user_id)
        .bind(time::now())
        .bind(draft.deadline_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_failure("save deal", e))?;

        tracing::info!(deal_id = deal.id, client_id = deal.client_id, "Deal created");
        Ok(deal)
    }

    pub async fn update(&self, id: i64, draft: DealDraft) -> Result<Deal> {
        let deal = sqlx::query_as::<_, Deal>(
            r#"
            UPDATE deals
            SET deal_name = $2,
                client_id = $3,
                amount = $4,
                stage = $5,
                responsible_user_id = $6,
                deadline_date = $7
            WHERE id = $1
            RETURNING id, deal_name, client_id, amount, stage, responsible_user_id, created_date, deadline_date
            "#,
        )
        .bind(id)
        .bind(&draft.deal_name)
        .bind(draft.client_id)
        .bind(draft.amount)
        .bind(&draft.stage)
        .bind(draft.responsible_user_id)
        .bind(draft.deadline_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_failure("update deal", e))?
        .ok_or_else(|| Error::not_found("Deal", id))?;

        tracing::info!(deal_id = deal.id, "Deal updated");
        Ok(deal)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM deals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failure("delete deal", e))?;

        Ok(result.rows_affected() > 0)
    }
}
