//! Ledger repository for CSV storage
//!
//! The ledger is a single CSV table with a fixed header row. The repository
//! holds no cached state: every read parses the file and every write replaces
//! it atomically.

use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseInput};

use super::file_io::write_atomic;

/// Header row of the ledger table
pub const HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Repository for the persisted expense table
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a repository bound to a ledger file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ledger file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load all records in file order
    ///
    /// Fails with NotFound if the ledger file does not exist.
    pub fn load(&self) -> LedgerResult<Vec<Expense>> {
        if !self.exists() {
            return Err(LedgerError::ledger_not_found(self.path.display().to_string()));
        }

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        parse_ledger(BufReader::new(file))
    }

    /// Load all records, treating a missing file as an empty ledger
    pub fn load_or_empty(&self) -> LedgerResult<Vec<Expense>> {
        match self.load() {
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    /// Replace the ledger file with the given records (header included)
    pub fn save(&self, expenses: &[Expense]) -> LedgerResult<()> {
        let mut bytes = Vec::new();
        write_ledger(&mut bytes, expenses)?;
        write_atomic(&self.path, &bytes)
    }

    /// The persisted table, byte for byte
    pub fn read_raw(&self) -> LedgerResult<Vec<u8>> {
        if !self.exists() {
            return Err(LedgerError::ledger_not_found(self.path.display().to_string()));
        }

        fs::read(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }
}

/// Parse a ledger table (header + rows)
///
/// A zero-byte input is an empty ledger. Rows failing validation are reported
/// with their line number.
pub fn parse_ledger<R: Read>(reader: R) -> LedgerResult<Vec<Expense>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    if !headers.iter().map(str::trim).eq(HEADER.iter().copied()) {
        return Err(LedgerError::Storage(format!(
            "Unexpected ledger header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut expenses = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let input = ExpenseInput::new(&record[0], &record[1], &record[2], &record[3]);
        let expense = Expense::parse(&input).map_err(|e| {
            LedgerError::Storage(format!("Invalid ledger row at line {}: {}", line, e))
        })?;

        expenses.push(expense);
    }

    Ok(expenses)
}

/// Write a ledger table (header + rows)
pub fn write_ledger<W: Write>(writer: W, expenses: &[Expense]) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for expense in expenses {
        csv_writer.write_record(expense.to_fields())?;
    }

    csv_writer.flush()?;
    Ok(())
}
