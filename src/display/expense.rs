//! Expense display formatting
//!
//! Formats expenses as a register table for terminal output.

use crate::models::Expense;

const DESCRIPTION_WIDTH: usize = 40;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{:10}  {:<13}  {:>12}  {}",
        expense.date_string(),
        expense.category.as_str(),
        format!("{}{}", currency_symbol, expense.amount),
        truncate(&expense.description, DESCRIPTION_WIDTH)
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:<13}  {:>12}  {}\n",
        "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(format_expense_row(expense, currency_symbol).trim_end());
        output.push('\n');
    }

    output.push_str(&format!("\n{} expense(s)\n", expenses.len()));
    output
}

/// Truncate a string to a maximum number of characters, with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
