//! JSON file-backed record store
//!
//! One pretty-printed document per collection inside the data directory.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::file_io::{read_json, write_json_atomic};
use super::{next_id, RecordStore};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::{Budget, Expense, Income, Money};

/// Highest expense id ever issued
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ExpenseSequence {
    #[serde(default)]
    last_id: u64,
}

/// Record store backed by JSON files
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    expenses_path: PathBuf,
    budget_path: PathBuf,
    income_path: PathBuf,
    sequence_path: PathBuf,
}

impl JsonRecordStore {
    /// Create a store over the data directory of `paths`, creating it if needed
    pub fn new(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses_path: paths.expenses_file(),
            budget_path: paths.budget_file(),
            income_path: paths.income_file(),
            sequence_path: paths.expense_seq_file(),
        })
    }

    fn load_or_default<T>(&self, collection: &'static str, path: &Path) -> T
    where
        T: DeserializeOwned + Default,
    {
        match read_json(path) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    collection,
                    path = %path.display(),
                    error = %e,
                    fallback = true,
                    "Malformed data file, using defaults"
                );
                T::default()
            }
        }
    }

    fn save_or_log<T>(&self, collection: &'static str, path: &Path, data: &T)
    where
        T: Serialize + ?Sized,
    {
        match write_json_atomic(path, data) {
            Ok(()) => debug!(collection, path = %path.display(), "Saved collection"),
            Err(e) => error!(
                collection,
                path = %path.display(),
                error = %e,
                "Failed to save collection"
            ),
        }
    }
}

impl RecordStore for JsonRecordStore {
    fn load_expenses(&self) -> Vec<Expense> {
        self.load_or_default("expenses", &self.expenses_path)
    }

    fn save_expenses(&self, expenses: &[Expense]) {
        self.save_or_log("expenses", &self.expenses_path, expenses);
    }

    fn load_budget(&self) -> Budget {
        self.load_or_default("budget", &self.budget_path)
    }

    fn save_budget(&self, budget: &Budget) {
        self.save_or_log("budget", &self.budget_path, budget);
    }

    fn load_income(&self) -> Money {
        let income: Income = self.load_or_default("income", &self.income_path);
        income.monthly_income
    }

    fn save_income(&self, income: Money) {
        self.save_or_log("income", &self.income_path, &Income::new(income));
    }

    fn next_expense_id(&self, existing: &[Expense]) -> u64 {
        let sequence: ExpenseSequence = self.load_or_default("expense_seq", &self.sequence_path);
        let id = next_id(sequence.last_id, existing);
        self.save_or_log(
            "expense_seq",
            &self.sequence_path,
            &ExpenseSequence { last_id: id },
        );
        id
    }
}
