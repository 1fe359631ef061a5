//! `/api/expenses` endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{with_tracker, AppState};
use crate::api::error::ApiResult;
use crate::error::ExpenseError;
use crate::models::{Expense, Money, NewExpense};
use crate::reports::AnalysisResult;

#[derive(Debug, Deserialize)]
struct CreateExpenseRequest {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    amount: Option<Money>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Serialize)]
struct ExpensesResponse {
    expenses: Vec<Expense>,
    analysis: AnalysisResult,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    expense: Expense,
    analysis: AnalysisResult,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    analysis: AnalysisResult,
}

async fn list_expenses(State(state): State<Arc<AppState>>) -> ApiResult<Json<ExpensesResponse>> {
    let snapshot = with_tracker(&state, |tracker| tracker.snapshot()).await?;
    Ok(Json(ExpensesResponse {
        expenses: snapshot.expenses,
        analysis: snapshot.analysis,
    }))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    // An unreadable body is a failed add like any other validation problem
    let Json(request) = body.map_err(|e| ExpenseError::Validation(e.body_text()))?;
    let today = state.clock.today();

    let new = NewExpense::parse(
        request.date.as_deref(),
        request.category.as_deref(),
        request.amount,
        request.description,
        today,
    )?;

    let (expense, analysis) = with_tracker(&state, move |tracker| tracker.add_expense(new)).await?;
    Ok(Json(CreatedResponse {
        success: true,
        expense,
        analysis,
    }))
}

async fn delete_expense(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeletedResponse>> {
    let analysis = with_tracker(&state, move |tracker| tracker.delete_expense(id)).await?;
    Ok(Json(DeletedResponse {
        success: true,
        analysis,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}
