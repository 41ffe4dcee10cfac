//! Expense record model
//!
//! An expense is one (date, category, amount, description) tuple. Two expenses
//! are the same record when all four fields match exactly, which is how the
//! ledger detects duplicates and finds records to edit or delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::{Amount, AmountParseError};
use super::category::Category;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for input, storage and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Amount,
    #[serde(default)]
    pub description: String,
}

/// Raw, unvalidated form fields for an expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseInput {
    /// Build an input from the four form fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

impl From<&Expense> for ExpenseInput {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date_string(),
            category: expense.category.as_str().to_string(),
            amount: expense.amount.as_str().to_string(),
            description: expense.description.clone(),
        }
    }
}

impl Expense {
    /// Validate raw fields and build an expense
    ///
    /// Fails with a validation error naming the first bad field.
    pub fn parse(input: &ExpenseInput) -> LedgerResult<Self> {
        let date = parse_date(&input.date).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD",
                input.date
            ))
        })?;

        let category = input
            .category
            .parse::<Category>()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let amount = Amount::parse(&input.amount).map_err(|e| match e {
            AmountParseError::OutOfRange(_) => LedgerError::Validation(e.to_string()),
            _ => LedgerError::Validation(format!("{}. Please enter a positive number", e)),
        })?;

        Ok(Self {
            date,
            category,
            amount,
            description: input.description.clone(),
        })
    }

    /// The date as stored (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Month key (`YYYY-MM`): the first seven characters of the stored date
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// The four fields in ledger column order
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.date_string(),
            self.category.as_str().to_string(),
            self.amount.as_str().to_string(),
            self.description.clone(),
        ]
    }

    /// True if `term` equals one of the four fields, ignoring case
    ///
    /// `term` is expected to be lowercased already. This is an exact field
    /// match, not a substring search.
    pub fn matches_term(&self, term: &str) -> bool {
        self.to_fields()
            .iter()
            .any(|field| field.to_lowercase() == term)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date_string(), self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " \"{}\"", self.description)?;
        }
        Ok(())
    }
}

/// Parse a strictly formatted `YYYY-MM-DD` date
///
/// Rejects non-padded forms such as `2024-1-5` so stored text and parsed date
/// always agree.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// True iff `text` is a real calendar date written as `YYYY-MM-DD`
pub fn validate_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// True iff `text` is a finite number strictly greater than zero
///
/// The number must also fit the amount range (see [`Amount::parse`]).
pub fn validate_amount(text: &str) -> bool {
    Amount::parse(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(date: &str, amount: &str, description: &str) -> ExpenseInput {
        ExpenseInput::new(date, "Food", amount, description)
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-05"));
        assert!(validate_date("2024-02-29"));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("2023-13-01"));
        assert!(!validate_date("2024-1-5"));
        assert!(!validate_date("05/01/2024"));
        assert!(!validate_date(""));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("100"));
        assert!(validate_amount("0.01"));
        assert!(!validate_amount("0"));
        assert!(!validate_amount("-5"));
        assert!(!validate_amount("five"));
        assert!(validate_amount("79228162514264337593543950335"));
        assert!(!validate_amount("1e29"));
    }

    #[test]
    fn test_out_of_range_amount_message() {
        let err = Expense::parse(&food("2024-01-05", "1e29", "")).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Amount out of range"));
    }

    #[test]
    fn test_parse_valid_expense() {
        let expense = Expense::parse(&ExpenseInput::new("2024-01-05", "food", "12.50", "Lunch"))
            .unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount.as_str(), "12.50");
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        assert!(Expense::parse(&food("2023-13-01", "10", "")).unwrap_err().is_validation());
        assert!(Expense::parse(&food("2024-01-05", "-5", "")).unwrap_err().is_validation());
        assert!(Expense::parse(&food("2024-01-05", "0", "")).unwrap_err().is_validation());

        let err = Expense::parse(&ExpenseInput::new("2024-01-05", "Travel", "10", ""))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_fields_and_month_key() {
        let expense = Expense::parse(&food("2024-03-09", "7", "Coffee")).unwrap();
        assert_eq!(
            expense.to_fields(),
            [
                "2024-03-09".to_string(),
                "Food".to_string(),
                "7".to_string(),
                "Coffee".to_string()
            ]
        );
        assert_eq!(expense.month_key(), "2024-03");
    }

    #[test]
    fn test_matches_term_is_exact() {
        let expense = Expense::parse(&food("2024-03-09", "7", "Morning Coffee")).unwrap();
        assert!(expense.matches_term("food"));
        assert!(expense.matches_term("morning coffee"));
        assert!(expense.matches_term("2024-03-09"));
        assert!(expense.matches_term("7"));
        assert!(!expense.matches_term("coffee"));
        assert!(!expense.matches_term("2024-03"));
    }

    #[test]
    fn test_input_round_trip() {
        let expense = Expense::parse(&food("2024-03-09", "7.0", "")).unwrap();
        let input = ExpenseInput::from(&expense);
        assert_eq!(Expense::parse(&input).unwrap(), expense);
    }

    #[test]
    fn test_serde_keeps_written_amount() {
        let expense = Expense::parse(&food("2024-03-09", "7.0", "x")).unwrap();
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"amount\":\"7.0\""));
        assert!(json.contains("\"date\":\"2024-03-09\""));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }
}
