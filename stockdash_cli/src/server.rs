//! HTTP surface: the dashboard page plus a small JSON API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use stockdash_lib::validation::{normalize_symbol, parse_date};
use stockdash_lib::{
    CompanyInfo, Dashboard, DashboardError, DashboardForm, MarketData, PriceSeries, YahooProvider,
};
use tower_http::trace::TraceLayer;

/// Shared across handlers. One provider (and its connection pool) per process.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard<YahooProvider>>,
}

impl AppState {
    pub fn new(dashboard: Dashboard<YahooProvider>) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/company/:symbol", get(company))
        .route("/api/history/:symbol", get(history))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug)]
pub enum AppError {
    Dashboard(DashboardError),
    NotFound(String),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Dashboard(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Dashboard(err) => {
                let status = match &err {
                    DashboardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    DashboardError::Api(_) => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    tracing::error!(error = %err, "request failed");
                }
                (status, err.to_string())
            }
        };
        (status, message).into_response()
    }
}

async fn index(
    State(state): State<AppState>,
    Query(form): Query<DashboardForm>,
) -> Result<Html<String>, AppError> {
    let html = state.dashboard.render_page(&form).await?;
    Ok(Html(html))
}

async fn company(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<CompanyInfo>, AppError> {
    let symbol = normalize_symbol(&symbol)?;
    match state.dashboard.provider().company_info(&symbol).await? {
        Some(info) => Ok(Json(info)),
        None => Err(AppError::NotFound(format!("No company data for {}", symbol))),
    }
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    start: Option<String>,
    end: Option<String>,
}

async fn history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<PriceSeries>, AppError> {
    let symbol = normalize_symbol(&symbol)?;
    let defaults = &state.dashboard.options().defaults;
    let start = parse_date("start", params.start.as_deref())?.unwrap_or(defaults.start_date);
    let end = parse_date("end", params.end.as_deref())?.unwrap_or_else(|| Local::now().date_naive());

    let series = state
        .dashboard
        .provider()
        .price_history(&symbol, start, end)
        .await?;
    Ok(Json(series))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use stockdash_lib::{DashboardOptions, MetadataPolicy};
    use stockdash_lib::stockdash_api::Client;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn load_fixture(name: &str) -> String {
        std::fs::read_to_string(format!("../stockdash_api/tests/fixtures/{}", name)).unwrap()
    }

    async fn app(server: &MockServer) -> Router {
        let client = Client::with_base_url(&server.uri()).unwrap();
        let dashboard = Dashboard::new(
            YahooProvider::new(client),
            DashboardOptions {
                policy: MetadataPolicy::Lenient,
                ..DashboardOptions::default()
            },
        )
        .unwrap();
        router(AppState::new(dashboard))
    }

    async fn mount_apple(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(load_fixture("chart_aapl.json")),
            )
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v10/finance/quoteSummary/AAPL"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(load_fixture("summary_aapl.json")),
            )
            .mount(server)
            .await;
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = MockServer::start().await;
        let (status, body) = get(app(&server).await, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn index_renders_dashboard() {
        let server = MockServer::start().await;
        mount_apple(&server).await;
        let (status, body) = get(
            app(&server).await,
            "/?symbol=aapl&start=2023-01-01&end=2023-01-11",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("📈 Stock Data for AAPL"));
        assert!(body.contains("AAPL Closing Prices"));
    }

    #[tokio::test]
    async fn index_rejects_bad_date() {
        let server = MockServer::start().await;
        let (status, body) = get(app(&server).await, "/?start=not-a-date").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("not-a-date"));
    }

    #[tokio::test]
    async fn company_returns_json() {
        let server = MockServer::start().await;
        mount_apple(&server).await;
        let (status, body) = get(app(&server).await, "/api/company/aapl").await;
        assert_eq!(status, StatusCode::OK);
        let info: CompanyInfo = serde_json::from_str(&body).unwrap();
        assert_eq!(info.sector.as_deref(), Some("Technology"));
    }

    #[tokio::test]
    async fn company_unknown_symbol_is_404() {
        let server = MockServer::start().await;
        let (status, _) = get(app(&server).await, "/api/company/ZZZZ").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn company_provider_failure_is_502() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v10/finance/quoteSummary/AAPL"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let (status, _) = get(app(&server).await, "/api/company/AAPL").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn history_returns_series() {
        let server = MockServer::start().await;
        mount_apple(&server).await;
        let (status, body) = get(
            app(&server).await,
            "/api/history/AAPL?start=2023-01-01&end=2023-01-11",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let points = json.as_array().unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0]["date"], "2023-01-03");
    }

    #[tokio::test]
    async fn history_inverted_window_is_empty() {
        let server = MockServer::start().await;
        let (status, body) = get(
            app(&server).await,
            "/api/history/AAPL?start=2023-01-10&end=2023-01-01",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }
}
