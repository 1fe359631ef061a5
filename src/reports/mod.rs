//! Reports module for the expense tracker
//!
//! Pure computations over loaded records: current-month selection, the
//! monthly analysis, saving tips and dashboard chart data.

pub mod analysis;
pub mod charts;
pub mod month;
pub mod tips;

pub use analysis::{analyze, category_totals, AnalysisResult};
pub use charts::{build_charts, Charts, Figure, Trace};
pub use month::current_month_expenses;
pub use tips::{default_rules, generate_tips, generate_tips_with, TipContext, TipRule, MAX_TIPS};
