//! Current-month selection
//!
//! Every analytic is scoped to the calendar month containing "today".

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, MonthPeriod};

/// Select the expenses dated in the same calendar month as `today`
///
/// Order is preserved. A stored date that does not parse is an error rather
/// than a silently dropped record.
pub fn current_month_expenses(all: &[Expense], today: NaiveDate) -> ExpenseResult<Vec<Expense>> {
    let month = MonthPeriod::containing(today);
    let mut selected = Vec::new();

    for expense in all {
        if month.contains(expense.parsed_date()?) {
            selected.push(expense.clone());
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::models::{Category, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: u64, on: NaiveDate) -> Expense {
        Expense::new(id, on, Category::Other, Money::from_whole(10), "")
    }

    #[test]
    fn test_empty_input() {
        let found = current_month_expenses(&[], date(2025, 5, 1)).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_selects_exact_month() {
        let all = vec![
            expense(1, date(2025, 5, 1)),
            expense(2, date(2025, 4, 30)),
            expense(3, date(2025, 5, 31)),
            expense(4, date(2024, 5, 15)),
            expense(5, date(2025, 6, 1)),
        ];

        let selected = current_month_expenses(&all, date(2025, 5, 20)).unwrap();
        let ids: Vec<u64> = selected.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let mut bad = expense(9, date(2025, 5, 1));
        bad.date = "2025-13-01".into();
        let all = vec![expense(1, date(2025, 5, 2)), bad];

        let err = current_month_expenses(&all, date(2025, 5, 20)).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidDate { id: 9, .. }));
    }
}
