//! Wire types for the `/v8/finance/chart` endpoint.

use serde::{Deserialize, Serialize};

use super::ProviderError;

#[derive(Serialize, Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ProviderError>,
}

/// One symbol's bars. Columns in `indicators` are parallel to `timestamp`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Bar open times as Unix seconds. Absent when the window has no bars.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    /// Exchange offset from UTC in seconds (e.g. -18000 for New York in winter).
    #[serde(default)]
    pub gmtoffset: i64,
    pub exchange_timezone_name: Option<String>,
    pub regular_market_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseIndicator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<i64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AdjCloseIndicator {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

/// A single OHLC bar assembled from the parallel columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<i64>,
}

fn column<T: Copy>(values: Option<&Vec<Option<T>>>, i: usize) -> Option<T> {
    values.and_then(|v| v.get(i).copied().flatten())
}

impl ChartResult {
    /// Zip the timestamp and indicator columns into bars.
    ///
    /// A column that is shorter than `timestamp` yields `None` for the missing rows.
    pub fn bars(&self) -> Vec<Bar> {
        let quote = self.indicators.quote.first();
        let adjclose = self.indicators.adjclose.first().map(|a| &a.adjclose);
        self.timestamp
            .iter()
            .enumerate()
            .map(|(i, &timestamp)| Bar {
                timestamp,
                open: column(quote.map(|q| &q.open), i),
                high: column(quote.map(|q| &q.high), i),
                low: column(quote.map(|q| &q.low), i),
                close: column(quote.map(|q| &q.close), i),
                adj_close: column(adjclose, i),
                volume: column(quote.map(|q| &q.volume), i),
            })
            .collect()
    }
}
