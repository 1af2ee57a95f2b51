use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::full_name;

/// Dropdown projection of a user. `label` is filled after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserOption {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub label: String,
}

impl UserOption {
    pub fn with_label(mut self) -> Self {
        self.label = full_name(&self.last_name, &self.first_name, None);
        self
    }
}

/// Dropdown projection of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ClientOption {
    pub id: i64,
    pub company_name: String,
}
