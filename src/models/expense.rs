//! Expense model
//!
//! A single dated spending entry. The date is kept as its stored
//! `YYYY-MM-DD` text so that a hand-edited record with a bad date is reported
//! when analysed instead of wiping the whole collection on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used for stored and submitted expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the record store
    pub id: u64,

    /// Expense date (YYYY-MM-DD)
    pub date: String,

    /// Spending category
    pub category: Category,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: u64,
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.format(DATE_FORMAT).to_string(),
            category,
            amount,
            description: description.into(),
        }
    }

    /// Parse the stored date
    pub fn parsed_date(&self) -> ExpenseResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| ExpenseError::InvalidDate {
            id: self.id,
            value: self.date.clone(),
        })
    }
}

/// Validated input for creating an expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
    pub description: String,
}

impl NewExpense {
    /// Validate raw field values, defaulting a missing or blank date to `today`
    pub fn parse(
        date: Option<&str>,
        category: Option<&str>,
        amount: Option<Money>,
        description: Option<String>,
        today: NaiveDate,
    ) -> ExpenseResult<Self> {
        let category = category
            .ok_or_else(|| ExpenseError::Validation("Missing required field: category".into()))?
            .parse::<Category>()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let amount = amount
            .ok_or_else(|| ExpenseError::Validation("Missing required field: amount".into()))?;
        if amount.is_negative() {
            return Err(ExpenseError::Validation(format!("Amount cannot be negative: {}", amount)));
        }
        if amount.exceeds_input_limit() {
            return Err(ExpenseError::Validation(format!(
                "Amount is too large (maximum {})",
                Money::MAX_INPUT
            )));
        }

        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
            })?,
            None => today,
        };

        Ok(Self {
            date,
            category,
            amount,
            description: description.unwrap_or_default(),
        })
    }

    /// Attach the store-assigned id
    pub fn into_expense(self, id: u64) -> Expense {
        Expense::new(id, self.date, self.category, self.amount, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
    }

    #[test]
    fn test_new_expense_formats_date() {
        let expense = Expense::new(1, today(), Category::Food, Money::from_whole(12), "Lunch");
        assert_eq!(expense.date, "2025-06-14");
        assert_eq!(expense.parsed_date().unwrap(), today());
    }

    #[test]
    fn test_parsed_date_rejects_garbage() {
        let mut expense = Expense::new(3, today(), Category::Food, Money::zero(), "");
        expense.date = "14/06/2025".into();
        assert!(matches!(
            expense.parsed_date(),
            Err(ExpenseError::InvalidDate { id: 3, .. })
        ));
    }

    #[test]
    fn test_serialization_shape() {
        let bus_fare = Money::from_cents(250);
        let expense = Expense::new(1, today(), Category::Transport, bus_fare, "Bus");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["date"], "2025-06-14");
        assert_eq!(json["category"], "Transport");
        assert_eq!(json["amount"], 2.5);
        assert_eq!(json["description"], "Bus");
    }

    #[test]
    fn test_new_expense_defaults_date() {
        let new = NewExpense::parse(None, Some("Food"), Some(Money::from_whole(5)), None, today())
            .unwrap();
        assert_eq!(new.date, today());
        assert_eq!(new.description, "");

        let blank = NewExpense::parse(Some("  "), Some("Food"), Some(Money::zero()), None, today())
            .unwrap();
        assert_eq!(blank.date, today());
    }

    #[test]
    fn test_new_expense_validation() {
        let missing_category = NewExpense::parse(None, None, Some(Money::zero()), None, today());
        assert!(missing_category.unwrap_err().is_validation());

        let missing_amount = NewExpense::parse(None, Some("Food"), None, None, today());
        assert!(missing_amount.unwrap_err().is_validation());

        let bad_category =
            NewExpense::parse(None, Some("Pets"), Some(Money::zero()), None, today());
        assert!(bad_category.unwrap_err().is_validation());

        let negative =
            NewExpense::parse(None, Some("Food"), Some(Money::from_whole(-1)), None, today());
        assert!(negative.unwrap_err().is_validation());

        let bad_date = NewExpense::parse(
            Some("yesterday"),
            Some("Food"),
            Some(Money::zero()),
            None,
            today(),
        );
        assert!(bad_date.unwrap_err().is_validation());
    }

    #[test]
    fn test_new_expense_rejects_oversized_amount() {
        let huge = Money::parse("1000000000000000000000000000").unwrap();
        let result = NewExpense::parse(None, Some("Food"), Some(huge), None, today());
        assert!(result.unwrap_err().is_validation());

        let at_limit = NewExpense::parse(None, Some("Food"), Some(Money::MAX_INPUT), None, today());
        assert!(at_limit.is_ok());
    }
}
