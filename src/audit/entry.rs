//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was edited
    Update,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one ledger mutation with the record as it was before and after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// The record before the operation (for updates/deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    /// The record after the operation (for creates/updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,

    /// Human-readable diff summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for an added expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            before: None,
            after: Some(expense.clone()),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an edited expense
    pub fn update(before: &Expense, after: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: generate_diff(before, after),
        }
    }

    /// Create a new audit entry for a deleted expense
    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            before: Some(expense.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// The record this entry is about (the new state when there is one)
    pub fn subject(&self) -> Option<&Expense> {
        self.after.as_ref().or(self.before.as_ref())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(expense) = self.subject() {
            output.push_str(&format!(" {}", expense));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
