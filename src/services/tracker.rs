//! Tracker service
//!
//! Every operation reloads the collections it needs from the record store,
//! applies its change, saves, and recomputes the monthly analysis from
//! scratch.

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_filename};
use crate::models::{Budget, Clock, Expense, Income, Money, NewExpense};
use crate::reports::{analyze, build_charts, current_month_expenses, AnalysisResult, Charts};
use crate::storage::RecordStore;

/// Current-month expenses with their analysis
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub expenses: Vec<Expense>,
    pub analysis: AnalysisResult,
}

/// A rendered CSV export
#[derive(Debug, Clone)]
pub struct MonthExport {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Service for recording expenses and analysing the current month
pub struct TrackerService<'a> {
    store: &'a dyn RecordStore,
    clock: &'a dyn Clock,
}

impl<'a> TrackerService<'a> {
    /// Create a new tracker service
    pub fn new(store: &'a dyn RecordStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    fn analyze_with(
        &self,
        expenses: &[Expense],
        budget: &Budget,
        income: Money,
    ) -> ExpenseResult<AnalysisResult> {
        analyze(expenses, budget, income, self.clock.today())
    }

    /// Current-month expenses plus analysis
    pub fn snapshot(&self) -> ExpenseResult<Snapshot> {
        let expenses = self.store.load_expenses();
        let budget = self.store.load_budget();
        let income = self.store.load_income();

        let analysis = self.analyze_with(&expenses, &budget, income)?;
        let month_expenses = current_month_expenses(&expenses, self.clock.today())?;

        Ok(Snapshot {
            expenses: month_expenses,
            analysis,
        })
    }

    /// Record a new expense
    pub fn add_expense(&self, new: NewExpense) -> ExpenseResult<(Expense, AnalysisResult)> {
        let mut expenses = self.store.load_expenses();
        let id = self.store.next_expense_id(&expenses);
        let expense = new.into_expense(id);

        expenses.push(expense.clone());
        self.store.save_expenses(&expenses);

        info!(
            id = expense.id,
            category = %expense.category,
            amount = %expense.amount,
            date = %expense.date,
            "Expense added"
        );

        let analysis = self.analyze_with(
            &expenses,
            &self.store.load_budget(),
            self.store.load_income(),
        )?;
        Ok((expense, analysis))
    }

    /// Remove every expense with the given id; unknown ids are a no-op
    pub fn delete_expense(&self, id: u64) -> ExpenseResult<AnalysisResult> {
        let mut expenses = self.store.load_expenses();
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        self.store.save_expenses(&expenses);

        info!(id, removed = before - expenses.len(), "Expense delete");

        self.analyze_with(
            &expenses,
            &self.store.load_budget(),
            self.store.load_income(),
        )
    }

    /// Stored budget
    pub fn budget(&self) -> Budget {
        self.store.load_budget()
    }

    /// Replace the budget
    pub fn set_budget(&self, budget: Budget) -> ExpenseResult<AnalysisResult> {
        budget.validate()?;
        self.store.save_budget(&budget);

        info!(total = %budget.total(), "Budget updated");

        self.analyze_with(
            &self.store.load_expenses(),
            &budget,
            self.store.load_income(),
        )
    }

    /// Stored monthly income
    pub fn income(&self) -> Money {
        self.store.load_income()
    }

    /// Replace the monthly income
    pub fn set_income(&self, income: Money) -> ExpenseResult<AnalysisResult> {
        Income::new(income).validate()?;
        self.store.save_income(income);

        info!(monthly_income = %income, "Income updated");

        self.analyze_with(
            &self.store.load_expenses(),
            &self.store.load_budget(),
            income,
        )
    }

    /// Dashboard charts, `None` when the month has no expenses
    pub fn visualizations(&self) -> ExpenseResult<Option<Charts>> {
        build_charts(
            &self.store.load_expenses(),
            &self.store.load_budget(),
            self.clock.today(),
        )
    }

    /// The current month's expenses as CSV
    ///
    /// Fails with an export error when the month has nothing to export.
    pub fn export_csv(&self) -> ExpenseResult<MonthExport> {
        let today = self.clock.today();
        let month_expenses = current_month_expenses(&self.store.load_expenses(), today)?;

        if month_expenses.is_empty() {
            return Err(ExpenseError::Export("No expenses to export for this month".into()));
        }

        let mut content = Vec::new();
        export_expenses_csv(&month_expenses, &mut content)?;

        Ok(MonthExport {
            filename: export_filename(self.clock.current_month()),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FixedClock};
    use crate::storage::MemoryRecordStore;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 4, 12).unwrap())
    }

    fn new_expense(category: Category, amount: i64, date: Option<&str>) -> NewExpense {
        NewExpense::parse(
            date,
            Some(category.name()),
            Some(Money::from_whole(amount)),
            Some("test".into()),
            clock().today(),
        )
        .unwrap()
    }

    fn record(service: &TrackerService<'_>, category: Category, amount: i64) -> Expense {
        let new = new_expense(category, amount, None);
        service.add_expense(new).unwrap().0
    }

    #[test]
    fn test_add_assigns_ids_and_persists() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        let first = record(&service, Category::Food, 10);
        let (second, analysis) = service
            .add_expense(new_expense(Category::Bills, 20, Some("2025-04-01")))
            .unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.date, "2025-04-12");
        assert_eq!(store.load_expenses().len(), 2);
        assert_eq!(analysis.total_spent, Money::from_whole(30));
    }

    #[test]
    fn test_snapshot_only_lists_current_month() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        record(&service, Category::Food, 10);
        service
            .add_expense(new_expense(Category::Food, 99, Some("2025-03-31")))
            .unwrap();

        let snapshot = service.snapshot().unwrap();
        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.analysis.total_spent, Money::from_whole(10));
    }

    #[test]
    fn test_repeated_snapshots_are_identical() {
        let store = MemoryRecordStore::new().with_income(Money::from_whole(1000));
        let clock = clock();
        let service = TrackerService::new(&store, &clock);
        record(&service, Category::Shopping, 300);

        let a = service.snapshot().unwrap();
        let b = service.snapshot().unwrap();
        assert_eq!(a.analysis, b.analysis);
        assert_eq!(a.expenses, b.expenses);
    }

    #[test]
    fn test_snapshot_survives_stored_extreme_amounts() {
        let huge = Money::parse("1000000000000000000000000000").unwrap();
        let stored = vec![
            Expense::new(1, clock().today(), Category::Food, huge, ""),
            Expense::new(2, clock().today(), Category::Food, huge, ""),
        ];
        let cent = Money::from_cents(1);
        let budget = Budget::zero().with_limit(Category::Food, cent);
        let store = MemoryRecordStore::new()
            .with_expenses(stored)
            .with_budget(budget)
            .with_income(cent);
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        let snapshot = service.snapshot().unwrap();
        assert!(snapshot.analysis.total_spent > huge);
        assert!(!snapshot.analysis.tips.is_empty());
        assert!(service.visualizations().unwrap().is_some());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);
        record(&service, Category::Food, 10);

        let before = service.snapshot().unwrap();
        let analysis = service.delete_expense(42).unwrap();

        assert_eq!(analysis, before.analysis);
        assert_eq!(store.load_expenses().len(), 1);
    }

    #[test]
    fn test_delete_then_add_does_not_reuse_id() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        record(&service, Category::Food, 10);
        record(&service, Category::Food, 20);
        let analysis = service.delete_expense(2).unwrap();
        assert_eq!(analysis.total_spent, Money::from_whole(10));

        let third = record(&service, Category::Food, 5);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_set_budget_and_income() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        let budget = Budget::zero().with_limit(Category::Food, Money::from_whole(300));
        let analysis = service.set_budget(budget).unwrap();
        assert_eq!(analysis.total_budget, Money::from_whole(300));
        assert_eq!(service.budget(), budget);

        let analysis = service.set_income(Money::from_whole(3000)).unwrap();
        assert_eq!(analysis.monthly_income, Money::from_whole(3000));
        assert_eq!(analysis.savings, Money::from_whole(2700));
        assert_eq!(service.income(), Money::from_whole(3000));
    }

    #[test]
    fn test_negative_values_rejected() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        let budget = Budget::zero().with_limit(Category::Food, Money::from_whole(-1));
        assert!(service.set_budget(budget).unwrap_err().is_validation());
        let err = service.set_income(Money::from_whole(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.load_budget(), Budget::zero());
    }

    #[test]
    fn test_export_csv() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        assert!(matches!(service.export_csv(), Err(ExpenseError::Export(_))));

        record(&service, Category::Food, 10);
        let export = service.export_csv().unwrap();
        assert_eq!(export.filename, "expenses_April_2025.csv");
        let text = String::from_utf8(export.content).unwrap();
        assert!(text.starts_with("id,date,category,amount,description"));
        assert!(text.contains("1,2025-04-12,Food,10.00,test"));
    }

    #[test]
    fn test_visualizations() {
        let store = MemoryRecordStore::new();
        let clock = clock();
        let service = TrackerService::new(&store, &clock);

        assert!(service.visualizations().unwrap().is_none());
        record(&service, Category::Food, 10);
        assert!(service.visualizations().unwrap().is_some());
    }
}
