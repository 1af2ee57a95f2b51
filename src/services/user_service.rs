use sqlx::{PgConnection, PgPool};

use crate::error::{Error, Result};
use crate::models::user::{User, UserDraft};
use crate::services::store::{duplicate_email, user_write_failure};
use crate::utils::time;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, last_name, first_name, patronymic, email, phone, role, created_date
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, last_name, first_name, patronymic, email, phone, role, created_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Whether another user already owns `email`, ignoring `exclude_id`.
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        Ok(email_taken(&mut conn, email, exclude_id).await?)
    }

    pub async fn insert(&self, draft: UserDraft) -> Result<User> {
        let action = "save user";
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| user_write_failure(action, e))?;

        if email_taken(&mut tx, &draft.email, None)
            .await
            .map_err(|e| user_write_failure(action, e))?
        {
            return Err(duplicate_email());
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (last_name, first_name, patronymic, email, phone, role, created_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, last_name, first_name, patronymic, email, phone, role, created_date
            "#,
        )
        .bind(&draft.last_name)
        .bind(&draft.first_name)
        .bind(&draft.patronymic)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.role)
        .bind(time::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| user_write_failure(action, e))?;

        tx.commit().await.map_err(|e| user_write_failure(action, e))?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Rewrites every mutable field of user `id`; `created_date` is left untouched.
    pub async fn update(&self, id: i64, draft: UserDraft) -> Result<User> {
        let action = "update user";
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| user_write_failure(action, e))?;

        if email_taken(&mut tx, &draft.email, Some(id))
            .await
            .map_err(|e| user_write_failure(action, e))?
        {
            return Err(duplicate_email());
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET last_name = $2,
                first_name = $3,
                patronymic = $4,
                email = $5,
                phone = $6,
                role = $7
            WHERE id = $1
            RETURNING id, last_name, first_name, patronymic, email, phone, role, created_date
            "#,
        )
        .bind(id)
        .bind(&draft.last_name)
        .bind(&draft.first_name)
        .bind(&draft.patronymic)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.role)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| user_write_failure(action, e))?
        .ok_or_else(|| Error::not_found("User", id))?;

        tx.commit().await.map_err(|e| user_write_failure(action, e))?;

        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Returns whether a row was removed; a missing id is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| user_write_failure("delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}

async fn email_taken(
    conn: &mut PgConnection,
    email: &str,
    exclude_id: Option<i64>,
) -> std::result::Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM users
            WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)
        )
        "#,
    )
    .bind(email)
    .bind(exclude_id)
    .fetch_one(conn)
    .await
}
