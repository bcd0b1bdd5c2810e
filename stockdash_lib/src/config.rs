//! Process configuration read from `STOCKDASH_*` environment variables.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use stockdash_api::Client;

use crate::chart::ChartTheme;
use crate::company::MetadataPolicy;
use crate::error::DashboardError;
use crate::page::DashboardOptions;
use crate::provider::YahooProvider;
use crate::query::{default_start_date, QueryDefaults, DEFAULT_SYMBOL};
use crate::validation::normalize_symbol;

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_PROVIDER_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub bind: String,
    pub provider_url: String,
    pub policy: MetadataPolicy,
    pub theme: ChartTheme,
    pub default_symbol: String,
    pub default_start: NaiveDate,
    pub timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            policy: MetadataPolicy::default(),
            theme: ChartTheme::default(),
            default_symbol: DEFAULT_SYMBOL.to_string(),
            default_start: default_start_date(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values keep
    /// their default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let default_symbol = match lookup("STOCKDASH_DEFAULT_SYMBOL") {
            Some(raw) => normalize_symbol(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = "STOCKDASH_DEFAULT_SYMBOL", error = %e, "ignoring invalid value");
                defaults.default_symbol.clone()
            }),
            None => defaults.default_symbol.clone(),
        };

        // A zero timeout would fail every request.
        let timeout = match parsed(&lookup, "STOCKDASH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS) {
            0 => {
                tracing::warn!(key = "STOCKDASH_TIMEOUT_SECS", "ignoring zero timeout");
                defaults.timeout
            }
            secs => Duration::from_secs(secs),
        };

        Self {
            bind: text("STOCKDASH_BIND", defaults.bind),
            provider_url: text("STOCKDASH_PROVIDER_URL", defaults.provider_url),
            policy: parsed(&lookup, "STOCKDASH_POLICY", defaults.policy),
            theme: parsed(&lookup, "STOCKDASH_THEME", defaults.theme),
            default_symbol,
            default_start: parsed(&lookup, "STOCKDASH_DEFAULT_START", defaults.default_start),
            timeout,
        }
    }

    pub fn defaults(&self) -> QueryDefaults {
        QueryDefaults {
            symbol: self.default_symbol.clone(),
            start_date: self.default_start,
        }
    }

    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            policy: self.policy,
            theme: self.theme,
            defaults: self.defaults(),
        }
    }

    pub fn provider(&self) -> Result<YahooProvider, DashboardError> {
        let client = Client::with_options(&self.provider_url, self.timeout)?;
        Ok(YahooProvider::new(client))
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, value = %raw, error = %e, "ignoring unparseable value");
                default
            }
        },
        _ => default,
    }
}
