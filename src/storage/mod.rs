//! Storage layer for the expense tracker
//!
//! Every collection is loaded and saved whole. Loads never fail: a missing
//! file yields the empty default, a malformed one is logged and replaced by
//! the default. Saves never fail either: errors are logged and swallowed so a
//! request still returns a snapshot.

pub mod file_io;
pub mod json_store;
pub mod memory;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use json_store::JsonRecordStore;
pub use memory::MemoryRecordStore;

use crate::models::{Budget, Expense, Money};

/// Whole-collection persistence for expenses, budget and income
pub trait RecordStore: Send + Sync {
    /// Load every stored expense
    fn load_expenses(&self) -> Vec<Expense>;

    /// Replace the stored expenses
    fn save_expenses(&self, expenses: &[Expense]);

    /// Load the budget (all zero when absent)
    fn load_budget(&self) -> Budget;

    /// Replace the stored budget
    fn save_budget(&self, budget: &Budget);

    /// Load the monthly income (zero when absent)
    fn load_income(&self) -> Money;

    /// Replace the stored monthly income
    fn save_income(&self, income: Money);

    /// Reserve the id for a new expense
    ///
    /// Ids are never reused within a store, even after deletes.
    fn next_expense_id(&self, existing: &[Expense]) -> u64;
}

/// Next id above both the recorded high-water mark and every existing id
pub fn next_id(high_water: u64, existing: &[Expense]) -> u64 {
    existing
        .iter()
        .map(|e| e.id)
        .max()
        .unwrap_or(0)
        .max(high_water)
        + 1
}
