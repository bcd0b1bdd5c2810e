//! Closing-price series built from chart bars.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use stockdash_api::types::ChartResult;

/// One trading day's close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Closing prices in ascending date order with no duplicate dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Sort by date and drop duplicates; the last point for a date wins.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let by_date: BTreeMap<NaiveDate, f64> = points
            .into_iter()
            .filter(|p| p.close.is_finite())
            .map(|p| (p.date, p.close))
            .collect();
        Self {
            points: by_date
                .into_iter()
                .map(|(date, close)| PricePoint { date, close })
                .collect(),
        }
    }

    /// Build from a chart result, mapping each bar to its exchange-local
    /// trading day and skipping bars without a close.
    pub fn from_chart(chart: &ChartResult) -> Self {
        let offset = chart.meta.gmtoffset;
        let points = chart.bars().into_iter().filter_map(|bar| {
            let close = bar.close?;
            let date = DateTime::from_timestamp(bar.timestamp.checked_add(offset)?, 0)?.date_naive();
            Some(PricePoint { date, close })
        });
        Self::from_points(points)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
