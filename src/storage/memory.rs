//! In-memory record store
//!
//! Same semantics as the JSON store without touching the filesystem. Used by
//! router and service tests.

use std::sync::{Mutex, MutexGuard};

use super::{next_id, RecordStore};
use crate::models::{Budget, Expense, Money};

#[derive(Debug, Default)]
struct MemoryState {
    expenses: Vec<Expense>,
    budget: Budget,
    income: Money,
    last_id: u64,
}

/// Record store holding everything in memory
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    state: Mutex<MemoryState>,
}

impl MemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with expenses
    pub fn with_expenses(self, expenses: Vec<Expense>) -> Self {
        self.lock().expenses = expenses;
        self
    }

    /// Seed the store with a budget
    pub fn with_budget(self, budget: Budget) -> Self {
        self.lock().budget = budget;
        self
    }

    /// Seed the store with a monthly income
    pub fn with_income(self, income: Money) -> Self {
        self.lock().income = income;
        self
    }

    // A panicked writer cannot leave the state half-updated: every write is a
    // single assignment.
    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_expenses(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    fn save_expenses(&self, expenses: &[Expense]) {
        self.lock().expenses = expenses.to_vec();
    }

    fn load_budget(&self) -> Budget {
        self.lock().budget
    }

    fn save_budget(&self, budget: &Budget) {
        self.lock().budget = *budget;
    }

    fn load_income(&self) -> Money {
        self.lock().income
    }

    fn save_income(&self, income: Money) {
        self.lock().income = income;
    }

    fn next_expense_id(&self, existing: &[Expense]) -> u64 {
        let mut state = self.lock();
        let id = next_id(state.last_id, existing);
        state.last_id = id;
        id
    }
}
