//! Expense Ledger - personal expense tracking on a CSV file
//!
//! This library provides the core functionality for the `expenses` command-line
//! tool. Expenses are (date, category, amount, description) records kept in a
//! single CSV table that is rewritten atomically on every change.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, categories and amounts
//! - `storage`: CSV ledger repository with atomic writes
//! - `audit`: Append-only log of every change
//! - `services`: Add/edit/delete/search and aggregation
//! - `reports`: Category and monthly reports
//! - `export`: Plain-text dump of the ledger
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::models::ExpenseInput;
//! use expense_ledger::services::{ExpenseService, SummaryService};
//! use expense_ledger::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! ExpenseService::new(&storage).add(&ExpenseInput::new("2024-01-05", "Food", "12.50", "Lunch"))?;
//! let total = SummaryService::new(&storage).total()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
