use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserDraft, DEFAULT_ROLE};
use crate::utils::validation::{non_blank, validate, FieldRule, FieldViolation, Rule, Validatable};

/// User form as submitted; values are kept verbatim so they can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            last_name: String::new(),
            first_name: String::new(),
            patronymic: String::new(),
            email: String::new(),
            phone: String::new(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

const USER_RULES: &[FieldRule] = &[
    FieldRule::new("last_name", Rule::Required, "Last name is required"),
    FieldRule::new("last_name", Rule::MaxLength(100), "Last name must not exceed 100 characters"),
    FieldRule::new("first_name", Rule::Required, "First name is required"),
    FieldRule::new("first_name", Rule::MaxLength(100), "First name must not exceed 100 characters"),
    FieldRule::new("patronymic", Rule::MaxLength(100), "Patronymic must not exceed 100 characters"),
    FieldRule::new("email", Rule::Required, "Email is required"),
    FieldRule::new("email", Rule::Email, "Enter a valid email address"),
    FieldRule::new("email", Rule::MaxLength(255), "Email must not exceed 255 characters"),
    FieldRule::new("phone", Rule::Phone, "Enter a valid phone number"),
    FieldRule::new("phone", Rule::MaxLength(20), "Phone must not exceed 20 characters"),
    FieldRule::new("role", Rule::MaxLength(50), "Role must not exceed 50 characters"),
];

impl Validatable for UserForm {
    fn rules() -> &'static [FieldRule] {
        USER_RULES
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "last_name" => Some(self.last_name.as_str()),
            "first_name" => Some(self.first_name.as_str()),
            "patronymic" => Some(self.patronymic.as_str()),
            "email" => Some(self.email.as_str()),
            "phone" => Some(self.phone.as_str()),
            "role" => Some(self.role.as_str()),
            _ => None,
        }
    }
}

impl UserForm {
    /// Validates the form and converts it into a write draft.
    pub fn to_draft(&self) -> Result<UserDraft, Vec<FieldViolation>> {
        let violations = validate(self);
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(UserDraft {
            last_name: self.last_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            patronymic: non_blank(&self.patronymic),
            email: self.email.trim().to_string(),
            phone: non_blank(&self.phone),
            role: non_blank(&self.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            last_name: user.last_name.clone(),
            first_name: user.first_name.clone(),
            patronymic: user.patronymic.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            role: user.role.clone(),
        }
    }
}
