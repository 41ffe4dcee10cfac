//! CLI command for the audit history

use crate::display::audit::format_audit_history;
use crate::error::LedgerResult;
use crate::storage::Storage;

/// Handle `history`
pub fn handle_history(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled (audit_enabled = false).");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    print!("{}", format_audit_history(&entries));
    Ok(())
}
