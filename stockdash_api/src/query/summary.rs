use std::fmt;

use url::Url;

use super::common::Query;

/// A quote-summary module name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryModule {
    AssetProfile,
    SummaryDetail,
    DefaultKeyStatistics,
    Price,
}

impl fmt::Display for SummaryModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SummaryModule::AssetProfile => "assetProfile",
            SummaryModule::SummaryDetail => "summaryDetail",
            SummaryModule::DefaultKeyStatistics => "defaultKeyStatistics",
            SummaryModule::Price => "price",
        };
        write!(f, "{}", s)
    }
}

/// Query for `/v10/finance/quoteSummary/{symbol}`.
#[derive(Clone, Debug)]
pub struct SummaryQuery {
    pub modules: Vec<SummaryModule>,
}

impl Default for SummaryQuery {
    fn default() -> Self {
        Self {
            modules: vec![
                SummaryModule::AssetProfile,
                SummaryModule::SummaryDetail,
                SummaryModule::DefaultKeyStatistics,
                SummaryModule::Price,
            ],
        }
    }
}

impl SummaryQuery {
    pub fn with_modules(mut self, modules: &[SummaryModule]) -> Self {
        self.modules = modules.to_vec();
        self
    }
}

impl Query for SummaryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let modules = self
            .modules
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",");
        url.query_pairs_mut().append_pair("modules", &modules);
        url
    }
}
