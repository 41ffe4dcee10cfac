//! Expense service
//!
//! Business logic for the ledger: validated inserts with duplicate rejection,
//! edits, deletes, listing and search. Each mutation is a full
//! load-modify-rewrite of the ledger file followed by an audit entry.
//!
//! A change is committed once the ledger is saved. A failed audit write after
//! that does not fail the operation; it is kept for the caller to report via
//! [`ExpenseService::take_audit_failures`].

use std::cell::RefCell;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseInput};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    audit_failures: RefCell<Vec<LedgerError>>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            audit_failures: RefCell::new(Vec::new()),
        }
    }

    /// Audit writes that failed after their change was saved
    pub fn take_audit_failures(&self) -> Vec<LedgerError> {
        self.audit_failures.take()
    }

    fn record_audit(&self, result: LedgerResult<()>) {
        if let Err(e) = result {
            self.audit_failures.borrow_mut().push(e);
        }
    }

    /// Validate and append a new expense
    ///
    /// Creates the ledger (with header) if it does not exist yet.
    pub fn add(&self, input: &ExpenseInput) -> LedgerResult<Expense> {
        let expense = Expense::parse(input)?;

        let mut expenses = self.storage.ledger.load_or_empty()?;
        if expenses.contains(&expense) {
            return Err(LedgerError::duplicate_expense(expense.to_string()));
        }

        expenses.push(expense.clone());
        self.storage.ledger.save(&expenses)?;

        self.record_audit(self.storage.log_create(&expense));

        Ok(expense)
    }

    /// All expenses sorted ascending by date
    ///
    /// Records sharing a date keep their file order. Fails with NotFound when
    /// no ledger exists yet.
    pub fn list_all(&self) -> LedgerResult<Vec<Expense>> {
        let mut expenses = self.storage.ledger.load()?;
        expenses.sort_by_key(|e| e.date);
        Ok(expenses)
    }

    /// Replace `existing` with a record built from `replacement`
    pub fn update(&self, existing: &Expense, replacement: &ExpenseInput) -> LedgerResult<Expense> {
        let updated = Expense::parse(replacement)?;

        let mut expenses = self.storage.ledger.load()?;
        let index = expenses
            .iter()
            .position(|e| e == existing)
            .ok_or_else(|| LedgerError::expense_not_found(existing.to_string()))?;

        if updated == *existing {
            return Ok(updated);
        }

        if expenses.contains(&updated) {
            return Err(LedgerError::duplicate_expense(updated.to_string()));
        }

        expenses[index] = updated.clone();
        self.storage.ledger.save(&expenses)?;

        self.record_audit(self.storage.log_update(existing, &updated));

        Ok(updated)
    }

    /// Remove the record equal to `expense` in all four fields
    pub fn delete(&self, expense: &Expense) -> LedgerResult<()> {
        let mut expenses = self.storage.ledger.load()?;
        let index = expenses
            .iter()
            .position(|e| e == expense)
            .ok_or_else(|| LedgerError::expense_not_found(expense.to_string()))?;

        let removed = expenses.remove(index);
        self.storage.ledger.save(&expenses)?;

        self.record_audit(self.storage.log_delete(&removed));

        Ok(())
    }

    /// Records where some field equals `term`, ignoring case
    ///
    /// This is an exact field match: "coffee" does not find "Morning coffee".
    /// Results keep file order; a missing ledger yields no results.
    pub fn search(&self, term: &str) -> LedgerResult<Vec<Expense>> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Err(LedgerError::Validation("Enter a search term".into()));
        }

        let expenses = self.storage.ledger.load_or_empty()?;
        Ok(expenses
            .into_iter()
            .filter(|e| e.matches_term(&term))
            .collect())
    }

    /// Number of stored records (0 when no ledger exists)
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.storage.ledger.load_or_empty()?.len())
    }
}
