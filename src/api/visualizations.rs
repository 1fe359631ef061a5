//! `/api/visualizations` chart data

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use super::{with_tracker, AppState};
use crate::api::error::ApiResult;

async fn get_visualizations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let charts = with_tracker(&state, |tracker| tracker.visualizations()).await?;

    let body = match charts {
        Some(charts) => json!({ "charts": charts }),
        None => json!({ "charts": {} }),
    };
    Ok(Json(body))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/visualizations", get(get_visualizations))
}
