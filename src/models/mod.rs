//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain: money,
//! categories, expenses, budgets, income and calendar months.

pub mod budget;
pub mod category;
pub mod expense;
pub mod income;
pub mod money;
pub mod period;

pub use budget::Budget;
pub use category::{Category, CategoryMap, UnknownCategory};
pub use expense::{Expense, NewExpense, DATE_FORMAT};
pub use income::Income;
pub use money::{Money, MoneyParseError};
pub use period::{Clock, FixedClock, MonthPeriod, SystemClock};
