//! `/api/export` CSV download

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::{with_tracker, AppState};
use crate::api::error::ApiResult;

async fn export_csv(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let export = with_tracker(&state, |tracker| tracker.export_csv()).await?;

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/export", get(export_csv))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::*;
    use crate::models::{Category, Expense, Money};
    use crate::storage::MemoryRecordStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_nothing_to_export() {
        let (app, _) = test_app(MemoryRecordStore::new());
        let (status, body) = send_json(&app, axum::http::Method::GET, "/api/export", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": "No expenses to export for this month"})
        );
    }

    #[tokio::test]
    async fn test_csv_attachment() {
        let expense = Expense::new(
            1,
            today(),
            Category::Education,
            Money::from_whole(60),
            "Books",
        );
        let (app, _) = test_app(MemoryRecordStore::new().with_expenses(vec![expense]));

        let request = Request::builder()
            .uri("/api/export")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"expenses_June_2025.csv\""
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(
            text,
            "id,date,category,amount,description\n1,2025-06-15,Education,60.00,Books\n"
        );
    }
}
