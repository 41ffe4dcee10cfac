//! Monthly Report
//!
//! Spending totals per calendar month, oldest month first.

use rust_decimal::Decimal;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{format_money, Expense};
use crate::services::summary::{by_month, checked_sum};
use crate::storage::Storage;

/// Spending for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRow {
    /// Month key (`YYYY-MM`)
    pub month: String,
    /// Sum of amounts
    pub total: Decimal,
    /// Number of records
    pub count: usize,
}

/// Monthly totals of the whole ledger
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// One row per month with records, ascending
    pub rows: Vec<MonthRow>,
    /// Grand total
    pub total: Decimal,
}

impl MonthlyReport {
    /// Generate the report from the stored ledger
    pub fn generate(storage: &Storage) -> LedgerResult<Self> {
        Self::from_expenses(&storage.ledger.load_or_empty()?)
    }

    /// Build the report from a set of records
    pub fn from_expenses(expenses: &[Expense]) -> LedgerResult<Self> {
        let rows: Vec<MonthRow> = by_month(expenses)?
            .into_iter()
            .map(|(month, total)| MonthRow {
                count: expenses.iter().filter(|e| e.month_key() == month).count(),
                month,
                total,
            })
            .collect();

        let total = checked_sum(rows.iter().map(|r| r.total))?;

        Ok(Self { rows, total })
    }

    /// Whether the report has no data
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Average spending per month with records
    pub fn average(&self) -> Decimal {
        if self.rows.is_empty() {
            Decimal::ZERO
        } else {
            self.total / Decimal::from(self.rows.len())
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Expenses\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!("{:<10} {:>18} {:>8}\n", "Month", "Amount", "Count"));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:>18} {:>8}\n",
                row.month,
                format_money(currency_symbol, row.total),
                row.count
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>18}\n",
            "TOTAL",
            format_money(currency_symbol, self.total)
        ));
        output.push_str(&format!(
            "{:<10} {:>18}\n",
            "AVERAGE",
            format_money(currency_symbol, self.average())
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Month", "Amount", "Count"])?;
        for row in &self.rows {
            csv_writer.write_record([
                row.month.clone(),
                row.total.to_string(),
                row.count.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
