//! Expense CLI commands
//!
//! Implements add, list, edit, delete and search on the ledger.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::expense::format_expense_register;
use crate::error::LedgerResult;
use crate::models::{Category, Expense, ExpenseInput};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// The four fields identifying an expense
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Date (YYYY-MM-DD)
    pub date: String,

    /// Category (Food, Rent, Transport, Shopping, Utilities, Health, Entertainment, Other)
    pub category: String,

    /// Amount (a positive number)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

impl RecordArgs {
    /// Convert to raw form input
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.date.clone(),
            self.category.clone(),
            self.amount.clone(),
            self.description.clone(),
        )
    }
}

/// Replacement values for `edit`; unset fields keep their current value
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// New date (YYYY-MM-DD)
    #[arg(id = "set_date", long = "set-date")]
    pub date: Option<String>,

    /// New category
    #[arg(id = "set_category", long = "set-category")]
    pub category: Option<String>,

    /// New amount
    #[arg(id = "set_amount", long = "set-amount", allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// New description
    #[arg(id = "set_description", long = "set-description")]
    pub description: Option<String>,
}

impl EditArgs {
    /// Whether any replacement value was given
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }

    /// Apply the replacement values on top of an existing record
    pub fn apply_to(&self, existing: &Expense) -> ExpenseInput {
        let mut input = ExpenseInput::from(existing);
        if let Some(date) = &self.date {
            input.date = date.clone();
        }
        if let Some(category) = &self.category {
            input.category = category.clone();
        }
        if let Some(amount) = &self.amount {
            input.amount = amount.clone();
        }
        if let Some(description) = &self.description {
            input.description = description.clone();
        }
        input
    }
}

/// Handle `add`
pub fn handle_add(storage: &Storage, record: RecordArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);
    let expense = service.add(&record.to_input())?;

    println!("Expense added successfully!");
    println!("  {}", expense);
    warn_audit_failures(&service);
    Ok(())
}

/// Handle `list`
pub fn handle_list(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);

    match service.list_all() {
        Ok(expenses) => {
            print!("{}", format_expense_register(&expenses, &settings.currency_symbol));
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("No expenses found.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Handle `edit`
pub fn handle_edit(storage: &Storage, record: RecordArgs, changes: EditArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);
    let existing = Expense::parse(&record.to_input())?;

    if changes.is_empty() {
        println!("Nothing to change. Use --set-date, --set-category, --set-amount or --set-description.");
        return Ok(());
    }

    let updated = service.update(&existing, &changes.apply_to(&existing))?;

    println!("Expense updated successfully!");
    println!("  {}", updated);
    warn_audit_failures(&service);
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(storage: &Storage, record: RecordArgs) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);
    let expense = Expense::parse(&record.to_input())?;

    service.delete(&expense)?;

    println!("Expense deleted successfully!");
    warn_audit_failures(&service);
    Ok(())
}

/// Handle `search`
pub fn handle_search(storage: &Storage, settings: &Settings, term: &str) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);
    let results = service.search(term)?;

    if results.is_empty() {
        println!("No matching records found.");
    } else {
        print!("{}", format_expense_register(&results, &settings.currency_symbol));
    }
    Ok(())
}

fn warn_audit_failures(service: &ExpenseService) {
    for e in service.take_audit_failures() {
        eprintln!("Warning: change saved, but the audit log was not updated: {}", e);
    }
}

/// Handle `categories`
pub fn handle_categories() -> LedgerResult<()> {
    println!("Categories:");
    for category in Category::ALL {
        println!("  {}", category);
    }
    Ok(())
}
