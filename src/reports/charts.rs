//! Chart data for the front-end
//!
//! Figures are emitted in Plotly's JSON figure format (`data` + `layout`) so
//! the browser can hand them straight to `Plotly.newPlot`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::analysis::category_totals;
use super::month::current_month_expenses;
use crate::error::ExpenseResult;
use crate::models::{Budget, Category, CategoryMap, Expense, Money, DATE_FORMAT};

/// One plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<Money>,
        hole: f64,
    },
    Bar {
        name: String,
        x: Vec<String>,
        y: Vec<Money>,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<Money>,
        mode: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    fn titled(title: &str) -> Self {
        Self {
            title: Title::new(title),
            barmode: None,
            xaxis: None,
            yaxis: None,
        }
    }

    fn with_axes(mut self, x: &str, y: &str) -> Self {
        self.xaxis = Some(Axis {
            title: Title::new(x),
        });
        self.yaxis = Some(Axis {
            title: Title::new(y),
        });
        self
    }
}

/// A complete figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// The three dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
    pub pie: Figure,
    pub bar: Figure,
    pub line: Figure,
}

/// Build the dashboard charts for the month containing `today`
///
/// Returns `None` when the month has no expenses.
pub fn build_charts(
    expenses: &[Expense],
    budget: &Budget,
    today: NaiveDate,
) -> ExpenseResult<Option<Charts>> {
    let month_expenses = current_month_expenses(expenses, today)?;
    if month_expenses.is_empty() {
        return Ok(None);
    }

    let totals = category_totals(&month_expenses);
    let mut used: CategoryMap<bool> = CategoryMap::new();
    for expense in &month_expenses {
        used[expense.category] = true;
    }

    let mut daily: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in &month_expenses {
        *daily.entry(expense.parsed_date()?).or_default() += expense.amount;
    }

    Ok(Some(Charts {
        pie: pie_chart(&totals, &used),
        bar: bar_chart(&totals, budget),
        line: line_chart(&daily),
    }))
}

fn pie_chart(totals: &CategoryMap<Money>, used: &CategoryMap<bool>) -> Figure {
    let (labels, values): (Vec<String>, Vec<Money>) = totals
        .iter_by_name()
        .filter(|(category, _)| used[*category])
        .map(|(category, amount)| (category.name().to_string(), amount.round_cents()))
        .unzip();

    Figure {
        data: vec![Trace::Pie {
            labels,
            values,
            hole: 0.3,
        }],
        layout: Layout::titled("Spending by Category (This Month)"),
    }
}

fn bar_chart(totals: &CategoryMap<Money>, budget: &Budget) -> Figure {
    let categories: Vec<String> = Category::ALL.iter().map(|c| c.name().to_string()).collect();

    let mut layout = Layout::titled("Monthly Budget vs Actual Spending")
        .with_axes("Category", "Amount ($)");
    layout.barmode = Some("group".to_string());

    Figure {
        data: vec![
            Trace::Bar {
                name: "Budget".to_string(),
                x: categories.clone(),
                y: budget.iter().map(|(_, limit)| limit).collect(),
            },
            Trace::Bar {
                name: "Actual".to_string(),
                x: categories,
                y: totals.values().map(|m| m.round_cents()).collect(),
            },
        ],
        layout,
    }
}

fn line_chart(daily: &BTreeMap<NaiveDate, Money>) -> Figure {
    Figure {
        data: vec![Trace::Scatter {
            x: daily
                .keys()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect(),
            y: daily.values().map(|m| m.round_cents()).collect(),
            mode: "lines+markers".to_string(),
        }],
        layout: Layout::titled("Daily Spending Trend (This Month)").with_axes("Date", "Amount ($)"),
    }
}
