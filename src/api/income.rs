//! `/api/income` endpoints
//!
//! A missing `monthly_income` in the request body means zero.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{with_tracker, AppState};
use crate::api::error::ApiResult;
use crate::models::Money;
use crate::reports::AnalysisResult;

#[derive(Debug, Deserialize)]
struct SetIncomeRequest {
    #[serde(default)]
    monthly_income: Money,
}

#[derive(Serialize)]
struct IncomeResponse {
    monthly_income: Money,
}

#[derive(Serialize)]
struct IncomeUpdatedResponse {
    success: bool,
    monthly_income: Money,
    analysis: AnalysisResult,
}

async fn get_income(State(state): State<Arc<AppState>>) -> ApiResult<Json<IncomeResponse>> {
    let monthly_income = with_tracker(&state, |tracker| Ok(tracker.income())).await?;
    Ok(Json(IncomeResponse { monthly_income }))
}

async fn set_income(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SetIncomeRequest>, JsonRejection>,
) -> ApiResult<Json<IncomeUpdatedResponse>> {
    let Json(request) = body?;
    let monthly_income = request.monthly_income;
    let analysis = with_tracker(&state, move |tracker| tracker.set_income(monthly_income)).await?;
    Ok(Json(IncomeUpdatedResponse {
        success: true,
        monthly_income,
        analysis,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/income", get(get_income).post(set_income))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::*;
    use crate::models::Money;
    use crate::storage::{MemoryRecordStore, RecordStore};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_income_default() {
        let (app, _) = test_app(MemoryRecordStore::new());
        let (status, body) = send_json(&app, Method::GET, "/api/income", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"monthly_income": 0.0}));
    }

    #[tokio::test]
    async fn test_set_income_from_string() {
        let (app, store) = test_app(MemoryRecordStore::new());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/income",
            Some(json!({"monthly_income": "3000"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["monthly_income"], 3000.0);
        assert_eq!(body["analysis"]["money_left"], 3000.0);
        assert_eq!(store.load_income(), Money::from_whole(3000));
    }

    #[tokio::test]
    async fn test_missing_income_is_zero() {
        let (app, store) = test_app(MemoryRecordStore::new().with_income(Money::from_whole(500)));
        let (status, body) = send_json(&app, Method::POST, "/api/income", Some(json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthly_income"], 0.0);
        assert!(store.load_income().is_zero());
    }

    #[tokio::test]
    async fn test_negative_income_rejected() {
        let (app, _) = test_app(MemoryRecordStore::new());
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/api/income",
            Some(json!({"monthly_income": -10})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
