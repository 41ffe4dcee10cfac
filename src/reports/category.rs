//! Category Report
//!
//! Spending per category with each category's share of the grand total.

use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{format_money, Category, Expense};
use crate::services::summary::{by_category, checked_sum};
use crate::storage::Storage;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// The category
    pub category: Category,
    /// Sum of amounts
    pub total: Decimal,
    /// Number of records
    pub count: usize,
    /// Share of the grand total, in percent
    pub percentage: Decimal,
}

/// Category breakdown of the whole ledger
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// One row per category with records, in category order
    pub rows: Vec<CategoryRow>,
    /// Grand total
    pub total: Decimal,
    /// Total record count
    pub count: usize,
}

impl CategoryReport {
    /// Generate the report from the stored ledger
    pub fn generate(storage: &Storage) -> LedgerResult<Self> {
        Self::from_expenses(&storage.ledger.load_or_empty()?)
    }

    /// Build the report from a set of records
    pub fn from_expenses(expenses: &[Expense]) -> LedgerResult<Self> {
        let sums = by_category(expenses)?;
        let total = checked_sum(sums.values().copied())?;

        let rows = sums
            .into_iter()
            .map(|(category, sum)| CategoryRow {
                category,
                total: sum,
                count: expenses.iter().filter(|e| e.category == category).count(),
                percentage: percentage_of(sum, total),
            })
            .collect();

        Ok(Self {
            rows,
            total,
            count: expenses.len(),
        })
    }

    /// Whether the report has no data
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Category-wise Spending\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<15} {:>14} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<15} {:>14} {:>8} {:>7.1}%\n",
                row.category.as_str(),
                format_money(currency_symbol, row.total),
                row.count,
                round_to(row.percentage, 1)
            ));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>14} {:>8}\n",
            "TOTAL",
            format_money(currency_symbol, self.total),
            self.count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Category", "Amount", "Count", "Percentage"])?;
        for row in &self.rows {
            csv_writer.write_record([
                row.category.as_str().to_string(),
                row.total.to_string(),
                row.count.to_string(),
                round_to(row.percentage, 2).to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}

fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseInput;

    fn expense(category: &str, amount: &str) -> Expense {
        Expense::parse(&ExpenseInput::new("2024-01-05", category, amount, "")).unwrap()
    }

    #[test]
    fn test_rows_and_percentages() {
        let report = CategoryReport::from_expenses(&[
            expense("Rent", "200"),
            expense("Food", "60"),
            expense("Food", "40"),
        ])
        .unwrap();

        assert_eq!(report.total, Decimal::from(300));
        assert_eq!(report.count, 3);
        assert_eq!(report.rows.len(), 2);

        let food = &report.rows[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.total, Decimal::from(100));
        assert_eq!(food.count, 2);
        assert_eq!(round_to(food.percentage, 1), Decimal::new(333, 1));

        let rent = &report.rows[1];
        assert_eq!(rent.category, Category::Rent);
        assert_eq!(round_to(rent.percentage, 1), Decimal::new(667, 1));
    }

    #[test]
    fn test_empty_report() {
        let report = CategoryReport::from_expenses(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.total, Decimal::ZERO);
        assert!(report.format_terminal("₹").contains("No expenses recorded."));
    }

    #[test]
    fn test_format_terminal() {
        let report =
            CategoryReport::from_expenses(&[expense("Food", "100"), expense("Rent", "300")])
                .unwrap();
        let text = report.format_terminal("$");

        assert!(text.contains("Food"));
        assert!(text.contains("$100.00"));
        assert!(text.contains("25.0%"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("$400.00"));
    }

    #[test]
    fn test_export_csv() {
        let report =
            CategoryReport::from_expenses(&[expense("Food", "100"), expense("Rent", "300")])
                .unwrap();
        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "Category,Amount,Count,Percentage\nFood,100,1,25.00\nRent,300,1,75.00\n"
        );
    }

    #[test]
    fn test_grand_total_overflow() {
        let max = "79228162514264337593543950335";
        let result = CategoryReport::from_expenses(&[expense("Food", max), expense("Rent", max)]);
        assert!(result.unwrap_err().is_validation());
    }
}
