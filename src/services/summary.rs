//! Summary service
//!
//! Aggregates over the whole ledger: grand total, per-category sums and
//! per-month sums. A missing ledger aggregates like an empty one. Sums that
//! leave the decimal range are reported as errors.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense};
use crate::storage::Storage;

/// Service for ledger aggregates
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Sum of all amounts
    pub fn total(&self) -> LedgerResult<Decimal> {
        total(&self.storage.ledger.load_or_empty()?)
    }

    /// Sum per category, only categories with records
    pub fn by_category(&self) -> LedgerResult<BTreeMap<Category, Decimal>> {
        by_category(&self.storage.ledger.load_or_empty()?)
    }

    /// Sum per `YYYY-MM` month, ascending
    pub fn by_month(&self) -> LedgerResult<BTreeMap<String, Decimal>> {
        by_month(&self.storage.ledger.load_or_empty()?)
    }
}

/// Sum of all amounts
pub fn total(expenses: &[Expense]) -> LedgerResult<Decimal> {
    checked_sum(expenses.iter().map(|e| e.amount.value()))
}

/// Sum per category
pub fn by_category(expenses: &[Expense]) -> LedgerResult<BTreeMap<Category, Decimal>> {
    let mut sums = BTreeMap::new();
    for expense in expenses {
        accumulate(&mut sums, expense.category, expense.amount.value())?;
    }
    Ok(sums)
}

/// Sum per month key
///
/// Keys are zero-padded `YYYY-MM`, so lexical order is calendar order.
pub fn by_month(expenses: &[Expense]) -> LedgerResult<BTreeMap<String, Decimal>> {
    let mut sums = BTreeMap::new();
    for expense in expenses {
        accumulate(&mut sums, expense.month_key(), expense.amount.value())?;
    }
    Ok(sums)
}

/// Add up decimal values, failing instead of overflowing
pub fn checked_sum<I>(values: I) -> LedgerResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| {
            acc.checked_add(value).ok_or_else(sum_overflow)
        })
}

fn accumulate<K: Ord>(sums: &mut BTreeMap<K, Decimal>, key: K, value: Decimal) -> LedgerResult<()> {
    let sum = sums.entry(key).or_insert(Decimal::ZERO);
    *sum = sum.checked_add(value).ok_or_else(sum_overflow)?;
    Ok(())
}

fn sum_overflow() -> LedgerError {
    LedgerError::Validation("Sum of amounts exceeds the supported range".into())
}
