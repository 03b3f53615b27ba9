//! Store-agnostic types shared by the gateway, prompt flows, and tables.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Reserved choice-list value meaning "no manager".
pub const NO_MANAGER: &str = "None";

/// Placeholder rendered for unset optional relations.
pub const EMPTY_FIELD: &str = "-";

/// A compound "first last" name split at the first whitespace boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub first: String,
    pub last: String,
}

impl FullName {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let Some((first, last)) = trimmed.split_once(char::is_whitespace) else {
            return Err(Error::InvalidName(input.to_string()));
        };
        let last = last.trim_start();
        if first.is_empty() || last.is_empty() {
            return Err(Error::InvalidName(input.to_string()));
        }
        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleOverview {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
}

/// One row of the wide employee listing. Optional fields are unset when
/// the employee has no role or manager assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeOverview {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<Decimal>,
    pub manager: Option<String>,
}

impl EmployeeOverview {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub department: String,
    pub utilized_budget: Decimal,
}

/// Convert a stored REAL salary into display money, rounded to cents.
/// Non-finite values (never written by this tool) collapse to zero.
pub fn money(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(2)
}

/// Convert display money back into the stored REAL representation.
pub fn stored_money(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Parse a salary prompt answer.
pub fn parse_salary(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    trimmed
        .parse::<Decimal>()
        .ok()
        .filter(|d| !d.is_sign_negative())
        .ok_or_else(|| Error::InvalidSalary(raw.to_string()))
}
