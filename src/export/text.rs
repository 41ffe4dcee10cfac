//! Plain-text export
//!
//! Dumps the persisted ledger table verbatim. The output is the ledger file
//! byte for byte, so it can be read back as a ledger.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::{write_atomic, Storage};

/// The full ledger table (header + rows) as stored
///
/// Fails with NotFound when no ledger exists.
pub fn export_text(storage: &Storage) -> LedgerResult<Vec<u8>> {
    storage.ledger.read_raw()
}

/// Write the ledger table to a writer, returning the bytes written
pub fn export_to_writer<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<usize> {
    let bytes = export_text(storage)?;
    writer
        .write_all(&bytes)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(bytes.len())
}

/// Write the ledger table to a file atomically, returning the bytes written
pub fn export_to_file(storage: &Storage, path: &Path) -> LedgerResult<usize> {
    let bytes = export_text(storage)?;

    if is_same_file(path, storage.ledger.path()) {
        return Err(LedgerError::Export(format!(
            "Refusing to export onto the ledger itself: {}",
            path.display()
        )));
    }

    write_atomic(path, &bytes).map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(bytes.len())
}

/// Whether two paths name the same file, seen through `.`/`..` and symlinks
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
