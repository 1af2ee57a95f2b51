use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_STATUS: &str = "Lead";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub company_name: String,
    pub inn: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub responsible_user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub company_name: String,
    pub inn: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: String,
    pub responsible_user_id: Option<i64>,
}
