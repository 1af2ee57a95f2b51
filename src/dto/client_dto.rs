use serde::{Deserialize, Serialize};

use crate::models::client::{Client, ClientDraft, DEFAULT_STATUS};
use crate::utils::validation::{non_blank, validate, FieldRule, FieldViolation, Rule, Validatable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientForm {
    pub id: String,
    pub company_name: String,
    pub inn: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: String,
    pub responsible_user_id: String,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            company_name: String::new(),
            inn: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            status: DEFAULT_STATUS.to_string(),
            responsible_user_id: String::new(),
        }
    }
}

const CLIENT_RULES: &[FieldRule] = &[
    FieldRule::new("company_name", Rule::Required, "Company name is required"),
    FieldRule::new("company_name", Rule::MaxLength(255), "Company name is too long"),
    FieldRule::new("inn", Rule::Required, "INN is required"),
    FieldRule::new("inn", Rule::LengthIn(&[10, 12]), "INN must contain 10 or 12 digits"),
    FieldRule::new("inn", Rule::Digits, "INN must contain digits only"),
    FieldRule::new("phone", Rule::Required, "Phone is required"),
    FieldRule::new("phone", Rule::Phone, "Enter a valid phone number"),
    FieldRule::new("phone", Rule::MaxLength(20), "Phone is too long"),
    FieldRule::new("email", Rule::Required, "Email is required"),
    FieldRule::new("email", Rule::Email, "Enter a valid email address"),
    FieldRule::new("email", Rule::MaxLength(255), "Email is too long"),
    FieldRule::new("address", Rule::Required, "Address is required"),
    FieldRule::new("address", Rule::MaxLength(500), "Address is too long"),
    FieldRule::new("status", Rule::Required, "Select a status"),
    FieldRule::new("responsible_user_id", Rule::Integer, "Select a valid manager"),
];

impl Validatable for ClientForm {
    fn rules() -> &'static [FieldRule] {
        CLIENT_RULES
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "company_name" => Some(self.company_name.as_str()),
            "inn" => Some(self.inn.as_str()),
            "phone" => Some(self.phone.as_str()),
            "email" => Some(self.email.as_str()),
            "address" => Some(self.address.as_str()),
            "status" => Some(self.status.as_str()),
            "responsible_user_id" => Some(self.responsible_user_id.as_str()),
            _ => None,
        }
    }
}

impl ClientForm {
    pub fn to_draft(&self) -> Result<ClientDraft, Vec<FieldViolation>> {
        let violations = validate(self);
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(ClientDraft {
            company_name: self.company_name.trim().to_string(),
            inn: self.inn.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            status: self.status.trim().to_string(),
            responsible_user_id: parse_optional_id("responsible_user_id", &self.responsible_user_id)?,
        })
    }
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.to_string(),
            company_name: client.company_name.clone(),
            inn: client.inn.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
            address: client.address.clone(),
            status: client.status.clone(),
            responsible_user_id: client
                .responsible_user_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Blank means "no reference".
pub(crate) fn parse_optional_id(
    field: &'static str,
    raw: &str,
) -> Result<Option<i64>, Vec<FieldViolation>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| vec![FieldViolation::new(field, "Must be a whole number")]),
    }
}
