//! CSV export of expenses
//!
//! Columns: `id,date,category,amount,description`. Amounts are written with
//! two decimal places.

use std::io::Write;

use serde::Serialize;

use crate::error::ExpenseResult;
use crate::models::{Expense, MonthPeriod};

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: u64,
    date: &'a str,
    category: &'a str,
    amount: String,
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id,
            date: &expense.date,
            category: expense.category.name(),
            amount: format!("{:.2}", expense.amount.round_cents().amount()),
            description: &expense.description,
        }
    }
}

/// Write expenses as CSV with a header row
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if expenses.is_empty() {
        csv_writer.write_record(["id", "date", "category", "amount", "description"])?;
    }

    for expense in expenses {
        csv_writer.serialize(ExpenseRow::from(expense))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Attachment name for a month's export, e.g. `expenses_March_2025.csv`
pub fn export_filename(month: MonthPeriod) -> String {
    format!("expenses_{}.csv", month.file_label())
}
