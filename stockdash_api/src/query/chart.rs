use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use url::Url;

use super::common::{midnight_utc, Query};

/// Bar width for the chart endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1d" | "daily" => Ok(Interval::Daily),
            "1wk" | "weekly" => Ok(Interval::Weekly),
            "1mo" | "monthly" => Ok(Interval::Monthly),
            other => Err(format!("unknown interval '{}': expected 1d, 1wk or 1mo", other)),
        }
    }
}

/// Query for `/v8/finance/chart/{symbol}`.
///
/// The window is `[start, end)`: `period1` is midnight UTC of the start date
/// and `period2` midnight UTC of the end date.
#[derive(Clone, Debug)]
pub struct ChartQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
    pub include_pre_post: bool,
}

impl ChartQuery {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            interval: Interval::Daily,
            include_pre_post: false,
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_pre_post(mut self, include_pre_post: bool) -> Self {
        self.include_pre_post = include_pre_post;
        self
    }

    /// True when the window holds no whole day.
    pub fn is_empty_range(&self) -> bool {
        self.end <= self.start
    }
}

impl Query for ChartQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("period1", &midnight_utc(self.start).to_string())
            .append_pair("period2", &midnight_utc(self.end).to_string())
            .append_pair("interval", &self.interval.to_string())
            .append_pair("events", "history")
            .append_pair("includePrePost", &self.include_pre_post.to_string());
        url
    }
}
