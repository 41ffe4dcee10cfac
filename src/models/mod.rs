//! Core data models
//!
//! An expense record, its fixed category set, and the amount type that keeps
//! written text alongside a decimal value.

pub mod amount;
pub mod category;
pub mod expense;

pub use amount::{format_money, Amount, AmountParseError};
pub use category::{Category, UnknownCategory};
pub use expense::{validate_amount, validate_date, Expense, ExpenseInput, DATE_FORMAT};
