use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_ROLE: &str = "manager";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_date: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.first_name, self.patronymic.as_deref())
    }
}

/// Mutable fields of a user; id and creation time are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

pub fn full_name(last_name: &str, first_name: &str, patronymic: Option<&str>) -> String {
    let mut name = format!("{} {}", last_name, first_name);
    if let Some(patronymic) = patronymic.filter(|p| !p.trim().is_empty()) {
        name.push(' ');
        name.push_str(patronymic);
    }
    name.trim().to_string()
}
