//! Wire types for the `/v10/finance/quoteSummary` endpoint.
//!
//! Only the modules and fields the dashboard reads are modelled; serde skips
//! the rest.

use serde::{Deserialize, Serialize};

use super::{ProviderError, RawValue};

#[derive(Serialize, Deserialize, Debug)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryEnvelope,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuoteSummaryEnvelope {
    pub result: Option<Vec<QuoteSummaryResult>>,
    pub error: Option<ProviderError>,
}

/// One symbol's requested modules. A module the provider does not have is absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub asset_profile: Option<AssetProfile>,
    pub summary_detail: Option<SummaryDetail>,
    pub default_key_statistics: Option<DefaultKeyStatistics>,
    pub price: Option<Price>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub country: Option<String>,
    pub full_time_employees: Option<i64>,
    pub long_business_summary: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    pub beta: Option<RawValue<f64>>,
    pub market_cap: Option<RawValue<i64>>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawValue<f64>>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue<f64>>,
    pub dividend_yield: Option<RawValue<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DefaultKeyStatistics {
    pub beta: Option<RawValue<f64>>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawValue<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub market_cap: Option<RawValue<i64>>,
}
