//! Monthly income model
//!
//! A single gross monthly income figure, persisted as
//! `{"monthly_income": <number>}`.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Declared monthly income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub monthly_income: Money,
}

impl Income {
    /// Create an income record
    pub fn new(monthly_income: Money) -> Self {
        Self { monthly_income }
    }

    /// Validate the income figure
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.monthly_income.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Monthly income cannot be negative: {}",
                self.monthly_income
            )));
        }
        if self.monthly_income.exceeds_input_limit() {
            return Err(ExpenseError::Validation(format!(
                "Monthly income is too large (maximum {})",
                Money::MAX_INPUT
            )));
        }
        Ok(())
    }
}
