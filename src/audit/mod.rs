//! Audit logging
//!
//! Every add, edit and delete on the ledger is recorded in an append-only
//! line-delimited JSON log (`audit.log`) with the record before and after.
//!
//! - `AuditEntry`: one mutation with timestamp, operation and snapshots.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: field-level summary of an edit.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
