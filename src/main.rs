use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_categories, handle_delete, handle_edit, handle_export, handle_history,
    handle_list, handle_report_command, handle_search, handle_total, EditArgs, ExportArgs,
    RecordArgs, ReportCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense ledger backed by a CSV file",
    long_about = "Record expenses by date, category, amount and description, \
                  then review them as a register, category breakdown or monthly totals. \
                  Data lives in a single CSV table that is rewritten atomically."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(RecordArgs),

    /// List all expenses, oldest first
    #[command(alias = "ls")]
    List,

    /// Edit an existing expense (identified by all four fields)
    Edit {
        #[command(flatten)]
        record: RecordArgs,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Delete an expense (identified by all four fields)
    #[command(alias = "rm")]
    Delete(RecordArgs),

    /// Find expenses where a field equals the term (case-insensitive)
    Search {
        /// Search term
        term: String,
    },

    /// Show the total of all expenses
    Total,

    /// Category and monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the ledger as plain text
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// List the available categories
    Categories,

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::with_settings(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Add(record)) => handle_add(&storage, record)?,
        Some(Commands::List) => handle_list(&storage, &settings)?,
        Some(Commands::Edit { record, changes }) => handle_edit(&storage, record, changes)?,
        Some(Commands::Delete(record)) => handle_delete(&storage, record)?,
        Some(Commands::Search { term }) => handle_search(&storage, &settings, &term)?,
        Some(Commands::Total) => handle_total(&storage, &settings)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export(&storage, &settings, args)?,
        Some(Commands::History { limit }) => handle_history(&storage, limit)?,
        Some(Commands::Categories) => handle_categories()?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized expense ledger at: {}", paths.base_dir().display());
            println!("Ledger file: {}", paths.ledger_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Export file:     {}", settings.export_file);
            if !paths.is_initialized() {
                println!();
                println!("(defaults; run 'expenses init' to save them)");
            }
        }
        None => {
            println!("Expense Ledger - personal expense tracking");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add 2024-01-05 Food 12.50 -d Lunch' to record an expense.");
        }
    }

    Ok(())
}
