use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users_count: i64,
    pub clients_count: i64,
    pub deals_count: i64,
    pub total_amount: Decimal,
}
