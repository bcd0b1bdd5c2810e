//! Market data source seam. The page layer only talks to [`MarketData`], so
//! tests can swap Yahoo for an in-memory fake.

use std::future::Future;

use chrono::NaiveDate;
use stockdash_api::{ChartQuery, Client, SummaryQuery};

use crate::company::CompanyInfo;
use crate::error::DashboardError;
use crate::history::PriceSeries;

pub trait MarketData: Send + Sync {
    /// Descriptive metadata for `symbol`. `None` when the provider has no
    /// result for the symbol; a found symbol may still have every field absent.
    fn company_info(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Option<CompanyInfo>, DashboardError>> + Send;

    /// Daily closes for `symbol` on `[start, end)`.
    fn price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<PriceSeries, DashboardError>> + Send;
}

/// [`MarketData`] backed by the Yahoo Finance HTTP client.
pub struct YahooProvider {
    client: Client,
    summary_query: SummaryQuery,
}

impl YahooProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            summary_query: SummaryQuery::default(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl MarketData for YahooProvider {
    async fn company_info(&self, symbol: &str) -> Result<Option<CompanyInfo>, DashboardError> {
        let summary = self
            .client
            .get_quote_summary(symbol, &self.summary_query)
            .await?;
        match summary {
            Some(summary) => Ok(Some(CompanyInfo::from_summary(&summary))),
            None => {
                tracing::debug!(symbol, "no quote summary for symbol");
                Ok(None)
            }
        }
    }

    async fn price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DashboardError> {
        let query = ChartQuery::new(start, end);
        if query.is_empty_range() {
            tracing::debug!(symbol, %start, %end, "empty date window, skipping chart request");
            return Ok(PriceSeries::default());
        }

        match self.client.get_chart(symbol, &query).await? {
            Some(chart) => Ok(PriceSeries::from_chart(&chart)),
            None => {
                tracing::debug!(symbol, "no chart data for symbol");
                Ok(PriceSeries::default())
            }
        }
    }
}
