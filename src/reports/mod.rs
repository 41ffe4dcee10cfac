//! Reports module
//!
//! Presentation-ready aggregates: the category breakdown and monthly totals.
//! Each report renders as a terminal table or exports to CSV.

pub mod category;
pub mod monthly;

pub use category::{CategoryReport, CategoryRow};
pub use monthly::{MonthRow, MonthlyReport};
