use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::client_dto::parse_optional_id;
use crate::models::deal::{Deal, DealDraft, DEFAULT_STAGE};
use crate::utils::time;
use crate::utils::validation::{non_blank, validate, FieldRule, FieldViolation, Rule, Validatable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealForm {
    pub id: String,
    pub deal_name: String,
    pub client_id: String,
    pub amount: String,
    pub stage: String,
    pub responsible_user_id: String,
    pub deadline_date: String,
}

impl Default for DealForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            deal_name: String::new(),
            client_id: String::new(),
            amount: "0".to_string(),
            stage: DEFAULT_STAGE.to_string(),
            responsible_user_id: String::new(),
            deadline_date: String::new(),
        }
    }
}

/// Matches the `NUMERIC(18, 2)` amount column.
const AMOUNT: Rule = Rule::Money {
    scale: 2,
    max_integer_digits: 16,
};
const AMOUNT_MESSAGE: &str = "Amount must be a number below 10^16 with at most 2 decimal places";

const DEAL_RULES: &[FieldRule] = &[
    FieldRule::new("deal_name", Rule::Required, "Deal name is required"),
    FieldRule::new("deal_name", Rule::MaxLength(255), "Deal name must not exceed 255 characters"),
    FieldRule::new("client_id", Rule::Required, "Select a client"),
    FieldRule::new("client_id", Rule::Integer, "Select a valid client"),
    FieldRule::new("amount", AMOUNT, AMOUNT_MESSAGE),
    FieldRule::new("responsible_user_id", Rule::Integer, "Select a valid manager"),
    FieldRule::new("deadline_date", Rule::Date, "Deadline must be a date in YYYY-MM-DD format"),
];

impl Validatable for DealForm {
    fn rules() -> &'static [FieldRule] {
        DEAL_RULES
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "deal_name" => Some(self.deal_name.as_str()),
            "client_id" => Some(self.client_id.as_str()),
            "amount" => Some(self.amount.as_str()),
            "stage" => Some(self.stage.as_str()),
            "responsible_user_id" => Some(self.responsible_user_id.as_str()),
            "deadline_date" => Some(self.deadline_date.as_str()),
            _ => None,
        }
    }
}

impl DealForm {
    pub fn to_draft(&self) -> Result<DealDraft, Vec<FieldViolation>> {
        let violations = validate(self);
        if !violations.is_empty() {
            return Err(violations);
        }

        let client_id = parse_optional_id("client_id", &self.client_id)?
            .ok_or_else(|| vec![FieldViolation::new("client_id", "Select a client")])?;
        let amount = match non_blank(&self.amount) {
            None => Decimal::ZERO,
            Some(raw) => raw
                .parse()
                .map_err(|_| vec![FieldViolation::new("amount", AMOUNT_MESSAGE)])?,
        };

        Ok(DealDraft {
            deal_name: self.deal_name.trim().to_string(),
            client_id,
            amount,
            stage: non_blank(&self.stage).unwrap_or_else(|| DEFAULT_STAGE.to_string()),
            responsible_user_id: parse_optional_id("responsible_user_id", &self.responsible_user_id)?,
            deadline_date: non_blank(&self.deadline_date).and_then(|raw| time::parse_date(&raw)),
        })
    }
}

impl From<&Deal> for DealForm {
    fn from(deal: &Deal) -> Self {
        Self {
            id: deal.id.to_string(),
            deal_name: deal.deal_name.clone(),
            client_id: deal.client_id.to_string(),
            amount: deal.amount.to_string(),
            stage: deal.stage.clone(),
            responsible_user_id: deal
                .responsible_user_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            deadline_date: deal.deadline_date.map(time::format_date).unwrap_or_default(),
        }
    }
}
