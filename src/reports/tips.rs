//! Saving tips
//!
//! An ordered list of rules, each contributing zero or more advisory strings.
//! Rules run in a fixed order and every matching rule appends; the result is
//! padded with general advice when sparse and capped at [`MAX_TIPS`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::models::{Budget, Category, CategoryMap, Money};

/// Upper bound on the number of tips returned
pub const MAX_TIPS: usize = 6;

/// Below this many tips the general advice is appended
const MIN_TIPS_BEFORE_BACKFILL: usize = 3;

/// Tip shown when the current month has no expenses
pub const EMPTY_MONTH_TIP: &str = "Start logging your expenses to get personalized tips!";

const GENERAL_TIPS: [&str; 3] = [
    "💰 Track every expense - small purchases add up quickly!",
    "📅 Review your spending weekly to stay on track.",
    "🎯 Set specific savings goals to stay motivated.",
];

/// Monthly figures the rules look at
#[derive(Debug, Clone, Copy)]
pub struct TipContext {
    pub category_totals: CategoryMap<Money>,
    pub budget: Budget,
    pub total_spent: Money,
    pub total_budget: Money,
    pub monthly_income: Money,
    pub money_left: Money,
}

/// A single advisory rule
pub trait TipRule: Send + Sync {
    /// Short identifier for logging
    fn name(&self) -> &'static str;

    /// Tips this rule contributes for the given month
    fn evaluate(&self, ctx: &TipContext) -> Vec<String>;
}

// Saturates to Decimal::MAX when the ratio does not fit.
fn percent_of(part: Money, whole: Money) -> Decimal {
    part.amount()
        .checked_div(whole.amount())
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::MAX)
}

fn format_percent(value: Decimal) -> String {
    format!("{:.1}", value.round_dp(1))
}

/// Compares spending against declared income
pub struct IncomeRule;

impl TipRule for IncomeRule {
    fn name(&self) -> &'static str {
        "income"
    }

    fn evaluate(&self, ctx: &TipContext) -> Vec<String> {
        let income = ctx.monthly_income;
        if !income.is_positive() {
            return Vec::new();
        }

        let tip = if ctx.total_spent > income {
            format!(
                "🚨 ALERT: You've spent {} more than your monthly income! Urgent action needed.",
                ctx.total_spent - income
            )
        } else if ctx.money_left.amount() < income.amount().saturating_mul(dec!(0.1)) {
            format!(
                "⚠️ Warning: Only {} left from your monthly income. Be careful with spending!",
                ctx.money_left
            )
        } else if ctx.money_left.amount() > income.amount().saturating_mul(dec!(0.2)) {
            format!(
                "💰 Excellent! You still have {} ({}%) remaining this month.",
                ctx.money_left,
                format_percent(percent_of(ctx.money_left, income))
            )
        } else {
            return Vec::new();
        };

        vec![tip]
    }
}

/// Flags total spending above the total budget
pub struct BudgetOverageRule;

impl TipRule for BudgetOverageRule {
    fn name(&self) -> &'static str {
        "budget_overage"
    }

    fn evaluate(&self, ctx: &TipContext) -> Vec<String> {
        if ctx.total_spent > ctx.total_budget {
            vec![format!(
                "⚠️ You're over your monthly budget by {}. Review your spending!",
                ctx.total_spent - ctx.total_budget
            )]
        } else {
            Vec::new()
        }
    }
}

/// Per-category overage plus fixed advice for high-spend categories
pub struct CategoryRule;

impl CategoryRule {
    fn advice(category: Category, spent: Money) -> Option<String> {
        let threshold = match category {
            Category::Food => Money::from_whole(300),
            Category::Transport => Money::from_whole(200),
            Category::Entertainment => Money::from_whole(150),
            Category::Shopping => Money::from_whole(250),
            _ => return None,
        };
        if spent <= threshold {
            return None;
        }

        let text = match category {
            Category::Food => format!(
                "🍽️ Food expenses are {} this month. Meal planning could save you 20-30%.",
                spent
            ),
            Category::Transport => format!(
                "🚗 Transport costs {}. Consider carpooling or public transit to save.",
                spent
            ),
            Category::Entertainment => format!(
                "🎬 Entertainment: {}. Look for free activities or share subscriptions.",
                spent
            ),
            _ => format!(
                "🛍️ Shopping: {}. Try the 30-day rule before buying non-essentials.",
                spent
            ),
        };
        Some(text)
    }
}

impl TipRule for CategoryRule {
    fn name(&self) -> &'static str {
        "category"
    }

    fn evaluate(&self, ctx: &TipContext) -> Vec<String> {
        let mut tips = Vec::new();

        for (category, &spent) in ctx.category_totals.iter_by_name() {
            if spent.is_zero() {
                continue;
            }

            let limit = ctx.budget.limit(category);
            if limit.is_positive() && spent > limit {
                let over = spent - limit;
                tips.push(format!(
                    "💡 {}: {} ({}%) over budget. Try to cut back here.",
                    category,
                    over,
                    format_percent(percent_of(over, limit))
                ));
            }

            tips.extend(Self::advice(category, spent));
        }

        tips
    }
}

/// Savings rate tiers, only when both a budget and an income are set
pub struct SavingsRateRule;

impl TipRule for SavingsRateRule {
    fn name(&self) -> &'static str {
        "savings_rate"
    }

    fn evaluate(&self, ctx: &TipContext) -> Vec<String> {
        let income = ctx.monthly_income;
        if !ctx.total_budget.is_positive() || !income.is_positive() {
            return Vec::new();
        }

        let rate = if ctx.total_spent < income {
            percent_of(income - ctx.total_spent, income)
        } else {
            Decimal::ZERO
        };
        let shown = format_percent(rate);

        let tip = if rate > dec!(20) {
            format!(
                "✅ Outstanding! You're saving {}% of your income this month.",
                shown
            )
        } else if rate > dec!(10) {
            format!(
                "👍 Good job! Saving {}%. Try to reach 20% for financial security.",
                shown
            )
        } else if rate > Decimal::ZERO {
            format!(
                "📊 Currently saving {}%. Aim for at least 10-20% monthly savings.",
                shown
            )
        } else {
            return Vec::new();
        };

        vec![tip]
    }
}

/// The rules in evaluation order
pub fn default_rules() -> Vec<Box<dyn TipRule>> {
    vec![
        Box::new(IncomeRule),
        Box::new(BudgetOverageRule),
        Box::new(CategoryRule),
        Box::new(SavingsRateRule),
    ]
}

/// Run `rules` in order, backfill general advice and cap the list
pub fn generate_tips_with(rules: &[Box<dyn TipRule>], ctx: &TipContext) -> Vec<String> {
    let mut tips = Vec::new();

    for rule in rules {
        let produced = rule.evaluate(ctx);
        if !produced.is_empty() {
            debug!(
                rule = rule.name(),
                count = produced.len(),
                "Tip rule matched"
            );
        }
        tips.extend(produced);
    }

    if tips.len() < MIN_TIPS_BEFORE_BACKFILL {
        tips.extend(GENERAL_TIPS.iter().map(|t| t.to_string()));
    }

    tips.truncate(MAX_TIPS);
    tips
}

/// Generate tips with the default rule set
pub fn generate_tips(ctx: &TipContext) -> Vec<String> {
    generate_tips_with(&default_rules(), ctx)
}
