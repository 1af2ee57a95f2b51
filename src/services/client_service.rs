use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::client::{Client, ClientDraft};
use crate::services::store::write_failure;
use crate::utils::time;

#[derive(Clone)]
pub struct ClientService {
    pool: PgPool,
}

impl ClientService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, company_name, inn, phone, email, address, status, created_date, responsible_user_id
            FROM clients
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, company_name, inn, phone, email, address, status, created_date, responsible_user_id
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn insert(&self, draft: ClientDraft) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (company_name, inn, phone, email, address, status, created_date, responsible_user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, company_name, inn, phone, email, address, status, created_date, responsible_user_id
            "#,
        )
        .bind(&draft.company_name)
        .bind(&draft.inn)
        .bind(&draft.phone)
        .bind(&draft.email)
        .bind(&draft.address)
        .bind(&draft.status)
        .bind(time::now())
        .bind(draft.responsible_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_failure("save client", e))?;

        tracing::info!(client_id = client.id, "Client created");
        Ok(client)
    }

    pub async fn update(&self, id: i64, draft: ClientDraft) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET company_name = $2,
                inn = $3,
                phone = $4,
                email = $5,
                address = $6,
                status = $7,
                responsible_user_id = $8
            WHERE id = $1
            RETURNING id, company_name, inn, phone, email, address, status, created_date, responsible_user_id
            "#,
        )
        .bind(id)
        .bind(&draft.company_name)
        .bind(&draft.inn)
        .bind(&draft.phone)
        .bind(&draft.email)
        .bind(&draft.address)
        .bind(&draft.status)
        .bind(draft.responsible_user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_failure("update client", e))?
        .ok_or_else(|| Error::not_found("Client", id))?;

        tracing::info!(client_id = client.id, "Client updated");
        Ok(client)
    }

    /// Fails with a write error while deals still reference the client.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failure("delete client", e))?;

        Ok(result.rows_affected() > 0)
    }
}
