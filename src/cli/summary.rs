//! `summary` command
//!
//! Offline view of the current month: the same analysis the API returns,
//! rendered as tables.

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::{Budget, Clock, Money};
use crate::reports::AnalysisResult;
use crate::services::TrackerService;
use crate::storage::RecordStore;

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Render the analysis (and the budget it was computed against) as text
///
/// `currency` applies to the tables only; tips keep their dollar wording.
pub fn render_summary(analysis: &AnalysisResult, budget: &Budget, currency: &str) -> String {
    let fmt = |m: Money| m.format_with_symbol(currency);

    let totals = vec![
        TotalRow {
            metric: "Monthly income",
            amount: fmt(analysis.monthly_income),
        },
        TotalRow {
            metric: "Total budget",
            amount: fmt(analysis.total_budget),
        },
        TotalRow {
            metric: "Total spent",
            amount: fmt(analysis.total_spent),
        },
        TotalRow {
            metric: "Budget remaining",
            amount: fmt(analysis.remaining),
        },
        TotalRow {
            metric: "Income left",
            amount: fmt(analysis.money_left),
        },
        TotalRow {
            metric: "Planned savings",
            amount: fmt(analysis.savings),
        },
    ];

    let categories: Vec<CategoryRow> = analysis
        .category_totals
        .iter()
        .map(|(category, &spent)| CategoryRow {
            category: category.to_string(),
            budget: fmt(budget.limit(category)),
            spent: fmt(spent),
        })
        .collect();

    let mut out = format!("{} {}\n\n", analysis.month_name, analysis.year);
    out.push_str(&Table::new(totals).with(Style::rounded()).to_string());
    out.push_str("\n\n");
    out.push_str(&Table::new(categories).with(Style::rounded()).to_string());
    out.push_str("\n\nTips:\n");
    for tip in &analysis.tips {
        out.push_str("  ");
        out.push_str(tip);
        out.push('\n');
    }
    out
}

/// Handle the summary command
pub fn handle_summary_command(
    store: &dyn RecordStore,
    clock: &dyn Clock,
    settings: &Settings,
) -> ExpenseResult<()> {
    let tracker = TrackerService::new(store, clock);
    let snapshot = tracker.snapshot()?;
    let budget = tracker.budget();

    print!(
        "{}",
        render_summary(&snapshot.analysis, &budget, &settings.currency_symbol)
    );
    println!();
    println!(
        "{} expense(s) recorded this month.",
        snapshot.expenses.len()
    );
    Ok(())
}
