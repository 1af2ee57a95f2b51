use sqlx::PgPool;

use crate::error::Result;
use crate::models::lookup::{ClientOption, UserOption};

/// Narrow projections used to fill selection controls.
#[derive(Clone)]
pub struct LookupService {
    pool: PgPool,
}

impl LookupService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn users_for_dropdown(&self) -> Result<Vec<UserOption>> {
        let users = sqlx::query_as::<_, UserOption>(
            "SELECT id, last_name, first_name FROM users ORDER BY last_name, first_name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(UserOption::with_label).collect())
    }

    pub async fn clients_for_dropdown(&self) -> Result<Vec<ClientOption>> {
        let clients = sqlx::query_as::<_, ClientOption>(
            "SELECT id, company_name FROM clients ORDER BY company_name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }
}
