use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_STAGE: &str = "Negotiation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Deal {
    pub id: i64,
    pub deal_name: String,
    pub client_id: i64,
    pub amount: Decimal,
    pub stage: String,
    pub responsible_user_id: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub deadline_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealDraft {
    pub deal_name: String,
    pub client_id: i64,
    pub amount: Decimal,
    pub stage: String,
    pub responsible_user_id: Option<i64>,
    pub deadline_date: Option<NaiveDate>,
}
