//! HTTP JSON API
//!
//! Handlers are thin: each hands its work to a [`TrackerService`] on the
//! blocking pool, since every request reads and usually rewrites the JSON
//! files.

pub mod budget;
pub mod error;
pub mod expenses;
pub mod export;
pub mod income;
pub mod visualizations;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::Clock;
use crate::services::TrackerService;
use crate::storage::RecordStore;

pub use error::{ApiError, ApiResult};

/// Shared handler state
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self { store, clock })
    }
}

/// Run `f` against a tracker on the blocking pool
pub(crate) async fn with_tracker<T, F>(state: &Arc<AppState>, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&TrackerService<'_>) -> ExpenseResult<T> + Send + 'static,
{
    let state = Arc::clone(state);
    let result = tokio::task::spawn_blocking(move || {
        let tracker = TrackerService::new(state.store.as_ref(), state.clock.as_ref());
        f(&tracker)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Worker task failed: {}", e)))?;

    result.map_err(ApiError::from)
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(settings: &Settings) -> CorsLayer {
    if settings.cors_allows_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the application router
pub fn app_router(state: Arc<AppState>, settings: &Settings) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(expenses::router())
        .merge(budget::router())
        .merge(income::router())
        .merge(visualizations::router())
        .merge(export::router());

    let mut router = Router::new().nest("/api", api).with_state(state);

    if let Some(dir) = &settings.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors_layer(settings))
        .layer(TimeoutLayer::new(Duration::from_secs(settings.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
}

/// Bind `settings.listen_addr` and serve until the process exits
pub async fn serve(state: Arc<AppState>, settings: &Settings) -> anyhow::Result<()> {
    let router = app_router(state, settings);
    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    info!(addr = %listener.local_addr()?, "Expense tracker listening");
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::models::FixedClock;
    use crate::storage::MemoryRecordStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use chrono::NaiveDate;
    use tower::ServiceExt;

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    pub fn test_app(store: MemoryRecordStore) -> (Router, Arc<MemoryRecordStore>) {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), Arc::new(FixedClock(today())));
        (app_router(state, &Settings::default()), store)
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
