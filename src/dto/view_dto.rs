//! Values handed from handlers to presentation.

use serde::{Deserialize, Serialize};

use crate::models::lookup::{ClientOption, UserOption};
use crate::utils::validation::FieldViolation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView<T> {
    pub items: Vec<T>,
}

/// Dropdown data a form needs; absent lists are not offered by that form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookups {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<ClientOption>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormView<F> {
    pub form: F,
    pub errors: Vec<FieldViolation>,
    #[serde(flatten)]
    pub lookups: Lookups,
}

impl<F> FormView<F> {
    pub fn new(form: F, lookups: Lookups) -> Self {
        Self {
            form,
            errors: Vec::new(),
            lookups,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldViolation>) -> Self {
        self.errors = errors;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteView<T> {
    pub item: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
