//! CLI command for exporting the ledger as plain text

use clap::Args;
use std::io;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::export::{export_to_file, export_to_writer};
use crate::storage::Storage;

/// Export options
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured export file)
    pub output: Option<PathBuf>,

    /// Write to standard output instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Handle `export`
pub fn handle_export(storage: &Storage, settings: &Settings, args: ExportArgs) -> LedgerResult<()> {
    if args.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        export_to_writer(storage, &mut handle)?;
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.export_file));
    let written = export_to_file(storage, &output)?;

    println!(
        "Expenses exported to {} ({} bytes)",
        output.display(),
        written
    );
    Ok(())
}
