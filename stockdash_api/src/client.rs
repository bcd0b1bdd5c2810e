//! HTTP client for the Yahoo Finance chart and quote-summary endpoints.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use url::Url;

use crate::{
    query::{ChartQuery, Query, SummaryQuery},
    types::{ChartResponse, ChartResult, QuoteSummaryResponse, QuoteSummaryResult},
    user_agent::get_user_agent,
    Error,
};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const CONSENT_URL: &str = "https://fc.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Yahoo Finance API.
///
/// Holds one `reqwest::Client` (connection pool and cookie jar) for the life
/// of the process. The quote-summary endpoint needs a session crumb; it is
/// fetched on first use and reused afterwards. A failed fetch is not cached,
/// so the next quote-summary request tries again.
pub struct Client {
    /// Base URL for the API. Defaults to `https://query1.finance.yahoo.com`.
    base_api_url: String,
    /// URL hit once to obtain the session cookie the crumb is tied to.
    consent_url: String,
    http: reqwest::Client,
    crumb: OnceCell<String>,
}

impl Client {
    /// Creates a new client pointing at the production Yahoo Finance API.
    pub fn new() -> Result<Self, Error> {
        Self::build(DEFAULT_BASE_URL, CONSENT_URL, REQUEST_TIMEOUT)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base_url = base_url.trim_end_matches('/');
        Self::build(base_url, &format!("{}/", base_url), REQUEST_TIMEOUT)
    }

    /// Creates a client with an explicit base URL and request timeout.
    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base_url = base_url.trim_end_matches('/');
        let consent_url = if base_url == DEFAULT_BASE_URL {
            CONSENT_URL.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self::build(base_url, &consent_url, timeout)
    }

    fn build(base_url: &str, consent_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.to_string(),
            consent_url: consent_url.to_string(),
            http,
            crumb: OnceCell::new(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot take a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            if status == reqwest::StatusCode::NOT_FOUND {
                tracing::debug!("Resource not found: {}", snippet);
            } else {
                tracing::error!("Request failed with status {}: {}", status, snippet);
            }
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches daily (or coarser) bars for `symbol` over the query window.
    ///
    /// Returns `Ok(None)` when the symbol is unknown (404 or a `Not Found`
    /// envelope) or the envelope has no result.
    pub async fn get_chart(
        &self,
        symbol: &str,
        query: &ChartQuery,
    ) -> Result<Option<ChartResult>, Error> {
        let url = self.get_url(&["v8", "finance", "chart", symbol], Some(query))?;
        let resp = match self.get::<ChartResponse>(url).await {
            Ok(resp) => resp,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        if let Some(err) = resp.chart.error {
            if err.is_not_found() {
                return Ok(None);
            }
            return Err(Error::Provider {
                code: err.code,
                description: err.description.unwrap_or_default(),
            });
        }

        Ok(resp.chart.result.and_then(|r| r.into_iter().next()))
    }

    /// Fetches the quote-summary modules for `symbol`.
    ///
    /// Returns `Ok(None)` when the symbol is unknown or the result list is empty.
    pub async fn get_quote_summary(
        &self,
        symbol: &str,
        query: &SummaryQuery,
    ) -> Result<Option<QuoteSummaryResult>, Error> {
        let mut url = self.get_url(&["v10", "finance", "quoteSummary", symbol], Some(query))?;
        if let Some(crumb) = self.crumb().await {
            url.query_pairs_mut().append_pair("crumb", crumb);
        }

        let resp = match self.get::<QuoteSummaryResponse>(url).await {
            Ok(resp) => resp,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        if let Some(err) = resp.quote_summary.error {
            if err.is_not_found() {
                return Ok(None);
            }
            return Err(Error::Provider {
                code: err.code,
                description: err.description.unwrap_or_default(),
            });
        }

        Ok(resp.quote_summary.result.and_then(|r| r.into_iter().next()))
    }

    async fn crumb(&self) -> Option<&str> {
        self.crumb
            .get_or_try_init(|| async { self.fetch_crumb().await.ok_or(()) })
            .await
            .ok()
            .map(String::as_str)
    }

    async fn fetch_crumb(&self) -> Option<String> {
        // The consent host answers 404 but still sets the session cookie.
        if let Err(e) = self.http.get(&self.consent_url).send().await {
            tracing::warn!("Failed to obtain session cookie: {}", e);
        }

        let url = format!("{}/v1/test/getcrumb", self.base_api_url);
        let resp = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Failed to request crumb: {}", e);
                return None;
            }
        };
        if !resp.status().is_success() {
            tracing::warn!("Crumb request failed with status {}", resp.status());
            return None;
        }
        match resp.text().await {
            Ok(text) => {
                let crumb = text.trim();
                if crumb.is_empty() || crumb.contains('<') || crumb.contains(' ') {
                    tracing::warn!("Crumb response was not a crumb: {}", truncate_body(crumb));
                    None
                } else {
                    Some(crumb.to_string())
                }
            }
            Err(e) => {
                tracing::warn!("Failed to read crumb: {}", e);
                None
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
