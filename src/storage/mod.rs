//! Storage layer
//!
//! Provides the CSV ledger repository, atomic file writes, and the audit log
//! hookup used by the service layer.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use ledger::{parse_ledger, write_ledger, LedgerRepository, HEADER};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::models::Expense;

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    pub ledger: LedgerRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Create a Storage instance honoring the user's settings
    pub fn with_settings(paths: LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        let mut storage = Self::new(paths)?;
        if !settings.audit_enabled {
            storage.audit = None;
        }
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an added expense in the audit log
    pub fn log_create(&self, expense: &Expense) -> Result<(), LedgerError> {
        self.log(AuditEntry::create(expense))
    }

    /// Record an edited expense in the audit log
    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), LedgerError> {
        self.log(AuditEntry::update(before, after))
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete(&self, expense: &Expense) -> Result<(), LedgerError> {
        self.log(AuditEntry::delete(expense))
    }

    fn log(&self, entry: AuditEntry) -> Result<(), LedgerError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
