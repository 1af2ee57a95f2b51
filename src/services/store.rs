//! Conversion of store failures into typed write outcomes.

use crate::error::Error;

pub const DUPLICATE_EMAIL: &str = "A user with this email already exists";

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Wraps any store error raised while writing. `action` reads like "save client".
pub fn write_failure(action: &str, err: sqlx::Error) -> Error {
    tracing::error!(error = ?err, action, "Store write failed");
    Error::Write(format!("Failed to {}: {}", action, err))
}

/// Like [`write_failure`], but reports a unique-key clash as a duplicate email.
pub fn user_write_failure(action: &str, err: sqlx::Error) -> Error {
    if is_unique_violation(&err) {
        tracing::warn!(action, "Duplicate user email rejected by store");
        return duplicate_email();
    }
    write_failure(action, err)
}

pub fn duplicate_email() -> Error {
    Error::Duplicate {
        field: "email",
        message: DUPLICATE_EMAIL.to_string(),
    }
}
