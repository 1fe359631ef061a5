//! Monthly analysis
//!
//! Builds the snapshot returned alongside every API response: totals for the
//! current month, remaining budget and income, per-category spending and tips.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month::current_month_expenses;
use super::tips::{generate_tips, TipContext, EMPTY_MONTH_TIP};
use crate::error::ExpenseResult;
use crate::models::{Budget, CategoryMap, Expense, Money, MonthPeriod};

/// Analysis of the current month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_spent: Money,
    pub total_budget: Money,
    pub remaining: Money,
    pub monthly_income: Money,
    pub money_left: Money,
    pub category_totals: CategoryMap<Money>,
    pub tips: Vec<String>,
    pub month_name: String,
    pub year: i32,
    pub savings: Money,
}

/// Sum of current-month spending per category
pub fn category_totals(month_expenses: &[Expense]) -> CategoryMap<Money> {
    let mut totals: CategoryMap<Money> = CategoryMap::new();
    for expense in month_expenses {
        totals[expense.category] += expense.amount;
    }
    totals
}

/// Analyse all stored expenses against the budget and income for the month
/// containing `today`
pub fn analyze(
    expenses: &[Expense],
    budget: &Budget,
    monthly_income: Money,
    today: NaiveDate,
) -> ExpenseResult<AnalysisResult> {
    let month_expenses = current_month_expenses(expenses, today)?;
    let month = MonthPeriod::containing(today);
    let total_budget = budget.total();

    let savings = if monthly_income.is_positive() {
        monthly_income - total_budget
    } else {
        Money::zero()
    };

    if month_expenses.is_empty() {
        return Ok(AnalysisResult {
            total_spent: Money::zero(),
            total_budget,
            remaining: total_budget,
            monthly_income,
            money_left: monthly_income,
            category_totals: CategoryMap::new(),
            tips: vec![EMPTY_MONTH_TIP.to_string()],
            month_name: month.month_name().to_string(),
            year: month.year,
            savings: savings.round_cents(),
        });
    }

    let totals = category_totals(&month_expenses);
    let total_spent: Money = month_expenses.iter().map(|e| e.amount).sum();
    let remaining = total_budget - total_spent;
    let money_left = monthly_income - total_spent;

    let tips = generate_tips(&TipContext {
        category_totals: totals,
        budget: *budget,
        total_spent,
        total_budget,
        monthly_income,
        money_left,
    });

    Ok(AnalysisResult {
        total_spent: total_spent.round_cents(),
        total_budget,
        remaining: remaining.round_cents(),
        monthly_income,
        money_left: money_left.round_cents(),
        category_totals: totals,
        tips,
        month_name: month.month_name().to_string(),
        year: month.year,
        savings: savings.round_cents(),
    })
}
