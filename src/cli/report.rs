//! CLI commands for totals and reports

use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::format_money;
use crate::reports::{CategoryReport, MonthlyReport};
use crate::services::SummaryService;
use crate::storage::{write_atomic, Storage};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending per category with percentage shares
    #[command(alias = "categories")]
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per month
    #[command(alias = "monthly")]
    Month {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Category { output } => {
            let report = CategoryReport::generate(storage)?;
            match output {
                Some(path) => {
                    let mut buffer = Vec::new();
                    report.export_csv(&mut buffer)?;
                    write_output(&path, &buffer)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(&settings.currency_symbol)),
            }
        }
        ReportCommands::Month { output } => {
            let report = MonthlyReport::generate(storage)?;
            match output {
                Some(path) => {
                    let mut buffer = Vec::new();
                    report.export_csv(&mut buffer)?;
                    write_output(&path, &buffer)?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(&settings.currency_symbol)),
            }
        }
    }

    Ok(())
}

/// Handle `total`
pub fn handle_total(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let total = SummaryService::new(storage).total()?;
    println!(
        "Total Expenses: {}",
        format_money(&settings.currency_symbol, total)
    );
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> LedgerResult<()> {
    write_atomic(path, bytes).map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}
