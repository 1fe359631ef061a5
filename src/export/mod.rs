//! Export module for the expense tracker
//!
//! CSV export of the current month's expenses for spreadsheets.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_filename};
