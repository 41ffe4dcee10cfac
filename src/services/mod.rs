//! Service layer
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, duplicate detection, search and aggregation.

pub mod expense;
pub mod summary;

pub use expense::ExpenseService;
pub use summary::SummaryService;
