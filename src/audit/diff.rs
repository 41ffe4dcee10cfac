//! Diff generation for audit logging
//!
//! Describes which fields of an expense changed in an edit.

use crate::models::Expense;

/// Generate a human-readable diff between two versions of an expense
///
/// Returns `None` when nothing changed. Descriptions are quoted (and long ones
/// truncated) since they are free text.
pub fn generate_diff(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.date != after.date {
        changes.push(format!(
            "date: {} -> {}",
            before.date_string(),
            after.date_string()
        ));
    }

    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }

    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }

    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            quote(&before.description),
            quote(&after.description)
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn quote(s: &str) -> String {
    if s.chars().count() > 50 {
        let truncated: String = s.chars().take(47).collect();
        format!("\"{}...\"", truncated)
    } else {
        format!("\"{}\"", s)
    }
}
