//! One render pass: collect inputs, fetch both datasets, build the page.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::chart::{build_figure, ChartTheme, Figure};
use crate::company::{CompanyPanel, MetadataPolicy};
use crate::error::DashboardError;
use crate::provider::MarketData;
use crate::query::{DashboardForm, DashboardQuery, QueryDefaults};
use crate::render::{PageRenderer, RenderOptions};

pub const COMPANY_FETCH_FAILED: &str = "Failed to fetch company data.";
pub const HISTORY_FETCH_FAILED: &str = "Failed to fetch historical data.";

/// A page region that either rendered or carries a user-facing error line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Section<T> {
    Ready(T),
    Failed(String),
}

impl<T> Section<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            Section::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Ready(_) => None,
            Section::Failed(message) => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub query: DashboardQuery,
    pub company: Section<CompanyPanel>,
    pub chart: Section<Figure>,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    pub policy: MetadataPolicy,
    pub theme: ChartTheme,
    pub defaults: QueryDefaults,
}

pub struct Dashboard<P> {
    provider: P,
    options: DashboardOptions,
    renderer: PageRenderer,
}

impl<P: MarketData> Dashboard<P> {
    pub fn new(provider: P, options: DashboardOptions) -> Result<Self, DashboardError> {
        Ok(Self {
            provider,
            options,
            renderer: PageRenderer::new()?,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// Normalize raw form input against the configured defaults.
    pub fn query_from_form(
        &self,
        form: &DashboardForm,
        today: NaiveDate,
    ) -> Result<DashboardQuery, DashboardError> {
        DashboardQuery::from_form(form, &self.options.defaults, today)
    }

    /// Fetch metadata and history concurrently and fold failures into
    /// page-level messages.
    pub async fn compose(&self, query: &DashboardQuery) -> DashboardPage {
        let (info, history) = tokio::join!(
            self.provider.company_info(&query.symbol),
            self.provider
                .price_history(&query.symbol, query.start_date, query.end_date),
        );

        let company = match info {
            Ok(None) => {
                tracing::warn!(symbol = %query.symbol, "no company metadata for symbol");
                Section::Failed(COMPANY_FETCH_FAILED.to_string())
            }
            Ok(Some(info)) => match CompanyPanel::build(&info, self.options.policy) {
                Ok(panel) => Section::Ready(panel),
                Err(DashboardError::MissingField(name)) => {
                    tracing::warn!(symbol = %query.symbol, field = name, "company metadata incomplete");
                    Section::Failed(format!(
                        "Company data is missing a required field: {}.",
                        name
                    ))
                }
                Err(e) => {
                    tracing::error!(symbol = %query.symbol, error = %e, "failed to build company panel");
                    Section::Failed(COMPANY_FETCH_FAILED.to_string())
                }
            },
            Err(e) => {
                tracing::error!(symbol = %query.symbol, error = %e, "company metadata request failed");
                Section::Failed(COMPANY_FETCH_FAILED.to_string())
            }
        };

        let chart = match history {
            Ok(series) => {
                tracing::debug!(symbol = %query.symbol, points = series.len(), "price history loaded");
                match build_figure(&query.symbol, &series, self.options.theme) {
                    Some(figure) => Section::Ready(figure),
                    None => {
                        tracing::warn!(
                            symbol = %query.symbol,
                            start = %query.start_date,
                            end = %query.end_date,
                            "no trading days in range"
                        );
                        Section::Failed(HISTORY_FETCH_FAILED.to_string())
                    }
                }
            }
            Err(e) => {
                tracing::error!(symbol = %query.symbol, error = %e, "price history request failed");
                Section::Failed(HISTORY_FETCH_FAILED.to_string())
            }
        };

        DashboardPage {
            query: query.clone(),
            company,
            chart,
        }
    }

    pub fn render(&self, page: &DashboardPage) -> Result<String, DashboardError> {
        let options = RenderOptions {
            theme: self.options.theme,
        };
        self.renderer.render(page, &options)
    }

    /// Collect, compose and render using today's local date as the default end.
    pub async fn render_page(&self, form: &DashboardForm) -> Result<String, DashboardError> {
        self.render_page_at(form, Local::now().date_naive()).await
    }

    pub async fn render_page_at(
        &self,
        form: &DashboardForm,
        today: NaiveDate,
    ) -> Result<String, DashboardError> {
        let query = self.query_from_form(form, today)?;
        let page = self.compose(&query).await;
        self.render(&page)
    }
}
