//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use expense::{
    handle_add, handle_categories, handle_delete, handle_edit, handle_list, handle_search,
    EditArgs, RecordArgs,
};
pub use export::{handle_export, ExportArgs};
pub use history::handle_history;
pub use report::{handle_report_command, handle_total, ReportCommands};
