//! Export module
//!
//! Plain-text dump of the ledger table.

pub mod text;

pub use text::{export_text, export_to_file, export_to_writer};
