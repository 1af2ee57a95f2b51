//! Declarative field validation shared by every entity form.
//!
//! A form exposes a static table of [`FieldRule`]s and a way to read a field's
//! raw submitted value by name. [`validate`] walks the table in order and
//! collects every violated rule, so the resulting list follows the table order.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::utils::time;

/// A single constraint on a raw form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present and not blank.
    Required,
    /// At most this many characters.
    MaxLength(usize),
    /// Character count must be one of the listed lengths.
    LengthIn(&'static [usize]),
    /// ASCII digits only.
    Digits,
    Email,
    Phone,
    /// Parses as a signed 64-bit integer.
    Integer,
    /// Decimal number that fits a fixed-point column without rounding.
    Money {
        scale: u32,
        max_integer_digits: u32,
    },
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self {
            field,
            rule,
            message,
        }
    }
}

/// One failed rule, attached to a field. An empty field name marks a form-level error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self::new("", message)
    }
}

/// Implemented by submitted forms.
pub trait Validatable {
    fn rules() -> &'static [FieldRule];

    /// Raw value of a field as submitted, `None` when the field is unknown.
    fn field(&self, name: &str) -> Option<&str>;
}

pub fn validate<T: Validatable>(val: &T) -> Vec<FieldViolation> {
    check(T::rules(), |name| val.field(name))
}

pub fn check<'a, F>(rules: &[FieldRule], value_of: F) -> Vec<FieldViolation>
where
    F: Fn(&str) -> Option<&'a str>,
{
    rules
        .iter()
        .filter(|rule| {
            let value = value_of(rule.field).map(str::trim).unwrap_or_default();
            !passes(rule.rule, value)
        })
        .map(|rule| FieldViolation::new(rule.field, rule.message))
        .collect()
}

/// Every rule except `Required` accepts a blank value.
fn passes(rule: Rule, value: &str) -> bool {
    if value.is_empty() {
        return rule != Rule::Required;
    }

    match rule {
        Rule::Required => true,
        Rule::MaxLength(max) => value.chars().count() <= max,
        Rule::LengthIn(lengths) => lengths.contains(&value.chars().count()),
        Rule::Digits => value.chars().all(|c| c.is_ascii_digit()),
        Rule::Email => value.validate_email(),
        Rule::Phone => is_phone(value),
        Rule::Integer => value.parse::<i64>().is_ok(),
        Rule::Money {
            scale,
            max_integer_digits,
        } => is_money(value, scale, max_integer_digits),
        Rule::Date => time::parse_date(value).is_some(),
    }
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"^\+?[0-9(][0-9\s\-().]*[0-9](\s?(x|ext\.?)\s?[0-9]+)?$")
            .unwrap_or_else(|e| panic!("phone pattern must compile: {e}"))
    })
}

pub fn is_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits >= 5 && phone_regex().is_match(value)
}

/// Trailing zeros do not count towards the scale.
fn is_money(value: &str, scale: u32, max_integer_digits: u32) -> bool {
    let Ok(amount) = value.parse::<Decimal>() else {
        return false;
    };
    if amount.normalize().scale() > scale {
        return false;
    }
    match 10_i64.checked_pow(max_integer_digits) {
        Some(limit) => amount.abs() < Decimal::from(limit),
        None => true,
    }
}

/// Trims a submitted value, mapping blanks to `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
