//! Input collection: turns the sidebar form into a normalized [`DashboardQuery`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::validation::{normalize_symbol, parse_date};

pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Start date used when the form leaves it blank.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid constant date")
}

/// Raw sidebar inputs as they arrive in the query string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardForm {
    pub symbol: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Fallbacks for blank form fields. The end date always falls back to today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub symbol: String,
    pub start_date: NaiveDate,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            start_date: default_start_date(),
        }
    }
}

/// One render pass worth of input: an uppercased symbol and a date window.
///
/// Date order is not enforced; an inverted window simply has no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardQuery {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DashboardQuery {
    pub fn new(
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            symbol: normalize_symbol(symbol)?,
            start_date,
            end_date,
        })
    }

    /// Apply defaults to blank fields and normalize the rest.
    pub fn from_form(
        form: &DashboardForm,
        defaults: &QueryDefaults,
        today: NaiveDate,
    ) -> Result<Self, DashboardError> {
        let symbol = match form.symbol.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => defaults.symbol.as_str(),
        };
        let start_date = parse_date("start", form.start.as_deref())?.unwrap_or(defaults.start_date);
        let end_date = parse_date("end", form.end.as_deref())?.unwrap_or(today);
        Self::new(symbol, start_date, end_date)
    }

    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }
}
