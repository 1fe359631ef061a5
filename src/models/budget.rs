//! Monthly budget model
//!
//! One spending ceiling per category. Budgets are always replaced wholesale.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryMap};
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Per-category monthly spending ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(CategoryMap<Money>);

impl Budget {
    /// A budget with every ceiling at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Ceiling for one category
    pub fn limit(&self, category: Category) -> Money {
        self.0[category]
    }

    /// Set the ceiling for one category
    pub fn set_limit(&mut self, category: Category, amount: Money) {
        self.0.set(category, amount);
    }

    /// Builder-style variant of [`Budget::set_limit`]
    pub fn with_limit(mut self, category: Category, amount: Money) -> Self {
        self.set_limit(category, amount);
        self
    }

    /// Sum of all ceilings
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    /// Iterate over (category, ceiling) in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().map(|(c, m)| (c, *m))
    }

    /// Reject negative or oversized ceilings
    pub fn validate(&self) -> ExpenseResult<()> {
        for (category, amount) in self.iter() {
            if amount.is_negative() {
                return Err(ExpenseError::Validation(format!(
                    "Budget for {} cannot be negative: {}",
                    category, amount
                )));
            }
            if amount.exceeds_input_limit() {
                return Err(ExpenseError::Validation(format!(
                    "Budget for {} is too large (maximum {})",
                    category,
                    Money::MAX_INPUT
                )));
            }
        }
        Ok(())
    }
}
