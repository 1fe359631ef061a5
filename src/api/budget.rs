//! `/api/budget` endpoints
//!
//! The budget is read and replaced as a whole map of category ceilings.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{with_tracker, AppState};
use crate::api::error::ApiResult;
use crate::models::Budget;
use crate::reports::AnalysisResult;

#[derive(Serialize)]
struct BudgetUpdatedResponse {
    success: bool,
    analysis: AnalysisResult,
}

async fn get_budget(State(state): State<Arc<AppState>>) -> ApiResult<Json<Budget>> {
    let budget = with_tracker(&state, |tracker| Ok(tracker.budget())).await?;
    Ok(Json(budget))
}

async fn set_budget(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Budget>, JsonRejection>,
) -> ApiResult<Json<BudgetUpdatedResponse>> {
    let Json(budget) = body?;
    let analysis = with_tracker(&state, move |tracker| tracker.set_budget(budget)).await?;
    Ok(Json(BudgetUpdatedResponse {
        success: true,
        analysis,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budget", get(get_budget).post(set_budget))
}
