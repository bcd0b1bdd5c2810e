//! Company metadata and the three-column panel it renders into.
//!
//! Two policies exist for absent fields. [`MetadataPolicy::Lenient`] shows
//! `N/A` and passes numbers through as-is. [`MetadataPolicy::Strict`] demands
//! every field and formats beta and P/E to two decimals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockdash_api::types::{QuoteSummaryResult, RawValue};

use crate::error::DashboardError;

pub const NOT_AVAILABLE: &str = "N/A";

/// Descriptive metadata for one symbol. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub sector: Option<String>,
    pub beta: Option<f64>,
    pub market_cap: Option<i64>,
    pub forward_pe: Option<f64>,
    pub website: Option<String>,
}

fn raw<T: Copy>(value: Option<&RawValue<T>>) -> Option<T> {
    value.and_then(RawValue::get)
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty()).map(String::from)
}

impl CompanyInfo {
    /// Pick the dashboard fields out of a quote summary, falling back across
    /// modules where Yahoo duplicates a value.
    pub fn from_summary(summary: &QuoteSummaryResult) -> Self {
        let profile = summary.asset_profile.as_ref();
        let detail = summary.summary_detail.as_ref();
        let stats = summary.default_key_statistics.as_ref();
        let price = summary.price.as_ref();

        Self {
            sector: non_blank(profile.and_then(|p| p.sector.as_ref())),
            beta: raw(detail.and_then(|d| d.beta.as_ref()))
                .or_else(|| raw(stats.and_then(|s| s.beta.as_ref()))),
            market_cap: raw(detail.and_then(|d| d.market_cap.as_ref()))
                .or_else(|| raw(price.and_then(|p| p.market_cap.as_ref()))),
            forward_pe: raw(detail.and_then(|d| d.forward_pe.as_ref()))
                .or_else(|| raw(stats.and_then(|s| s.forward_pe.as_ref()))),
            website: non_blank(profile.and_then(|p| p.website.as_ref())),
        }
    }
}

/// How absent metadata fields are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetadataPolicy {
    /// Absent fields render as `N/A`.
    #[default]
    Lenient,
    /// Absent fields are an error.
    Strict,
}

impl fmt::Display for MetadataPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataPolicy::Lenient => write!(f, "lenient"),
            MetadataPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for MetadataPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(MetadataPolicy::Lenient),
            "strict" => Ok(MetadataPolicy::Strict),
            other => Err(format!("unknown metadata policy '{}': expected lenient or strict", other)),
        }
    }
}

/// One labelled value in the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelField {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Link target, set only for the website field.
    pub link: Option<String>,
}

/// The metadata panel: `[Sector, Beta]`, `[Market Cap, P/E Ratio]`, `[Website]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyPanel {
    pub columns: Vec<Vec<PanelField>>,
}

impl CompanyPanel {
    pub fn build(info: &CompanyInfo, policy: MetadataPolicy) -> Result<Self, DashboardError> {
        let (sector, beta, market_cap, forward_pe, website) = match policy {
            MetadataPolicy::Lenient => (
                info.sector.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                info.beta.map(format_passthrough),
                info.market_cap.map(format_thousands),
                info.forward_pe.map(format_passthrough),
                info.website.clone(),
            ),
            MetadataPolicy::Strict => (
                info.sector.clone().ok_or(DashboardError::MissingField("sector"))?,
                Some(format_two_decimals(
                    info.beta.ok_or(DashboardError::MissingField("beta"))?,
                )),
                Some(format_thousands(
                    info.market_cap.ok_or(DashboardError::MissingField("market cap"))?,
                )),
                Some(format_two_decimals(
                    info.forward_pe.ok_or(DashboardError::MissingField("forward P/E"))?,
                )),
                Some(
                    info.website
                        .clone()
                        .ok_or(DashboardError::MissingField("website"))?,
                ),
            ),
        };

        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let website_field = match website {
            Some(url) => PanelField {
                icon: "🌐",
                label: "Website",
                link: is_http_url(&url).then(|| url.clone()),
                value: url,
            },
            None => field("🌐", "Website", NOT_AVAILABLE.to_string()),
        };

        Ok(Self {
            columns: vec![
                vec![field("🏢", "Sector", sector), field("📉", "Beta", or_na(beta))],
                vec![
                    field("💰", "Market Cap", or_na(market_cap)),
                    field("📊", "P/E Ratio", or_na(forward_pe)),
                ],
                vec![website_field],
            ],
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &PanelField> {
        self.columns.iter().flatten()
    }

    pub fn field(&self, label: &str) -> Option<&PanelField> {
        self.fields().find(|f| f.label == label)
    }
}

fn field(icon: &'static str, label: &'static str, value: String) -> PanelField {
    PanelField {
        icon,
        label,
        value,
        link: None,
    }
}

fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// `2500000000000` -> `"2,500,000,000,000"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// Shortest round-trip text, keeping a trailing `.0` on whole numbers.
pub fn format_passthrough(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdash_api::types::{AssetProfile, DefaultKeyStatistics, Price, SummaryDetail};

    fn full_info() -> CompanyInfo {
        CompanyInfo {
            sector: Some("Technology".to_string()),
            beta: Some(1.25),
            market_cap: Some(2_500_000_000_000),
            forward_pe: Some(28.4567),
            website: Some("https://www.apple.com".to_string()),
        }
    }

    // -- formatting --

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(2_500_000_000_000), "2,500,000,000,000");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(-1_234_567), "-1,234,567");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn two_decimals() {
        assert_eq!(format_two_decimals(1.25), "1.25");
        assert_eq!(format_two_decimals(28.4567), "28.46");
        assert_eq!(format_two_decimals(1.0), "1.00");
    }

    #[test]
    fn passthrough() {
        assert_eq!(format_passthrough(1.25), "1.25");
        assert_eq!(format_passthrough(28.4567), "28.4567");
        assert_eq!(format_passthrough(1.0), "1.0");
        assert_eq!(format_passthrough(-0.5), "-0.5");
    }

    // -- extraction --

    #[test]
    fn from_summary_prefers_summary_detail() {
        let summary = QuoteSummaryResult {
            asset_profile: Some(AssetProfile {
                sector: Some("Technology".to_string()),
                website: Some("https://www.apple.com".to_string()),
                ..Default::default()
            }),
            summary_detail: Some(SummaryDetail {
                beta: Some(RawValue { raw: Some(1.25) }),
                market_cap: Some(RawValue { raw: Some(100) }),
                forward_pe: Some(RawValue { raw: Some(20.0) }),
                ..Default::default()
            }),
            default_key_statistics: Some(DefaultKeyStatistics {
                beta: Some(RawValue { raw: Some(9.9) }),
                forward_pe: Some(RawValue { raw: Some(99.0) }),
            }),
            price: Some(Price {
                market_cap: Some(RawValue { raw: Some(999) }),
                ..Default::default()
            }),
        };
        let info = CompanyInfo::from_summary(&summary);
        assert_eq!(info.beta, Some(1.25));
        assert_eq!(info.market_cap, Some(100));
        assert_eq!(info.forward_pe, Some(20.0));
    }

    #[test]
    fn from_summary_falls_back() {
        let summary = QuoteSummaryResult {
            summary_detail: Some(SummaryDetail {
                beta: Some(RawValue { raw: None }),
                ..Default::default()
            }),
            default_key_statistics: Some(DefaultKeyStatistics {
                beta: Some(RawValue { raw: Some(0.92) }),
                forward_pe: Some(RawValue { raw: Some(18.5) }),
            }),
            price: Some(Price {
                market_cap: Some(RawValue { raw: Some(512) }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let info = CompanyInfo::from_summary(&summary);
        assert_eq!(info.beta, Some(0.92));
        assert_eq!(info.forward_pe, Some(18.5));
        assert_eq!(info.market_cap, Some(512));
        assert!(info.sector.is_none());
    }

    #[test]
    fn from_summary_empty() {
        let info = CompanyInfo::from_summary(&QuoteSummaryResult::default());
        assert_eq!(info, CompanyInfo::default());
    }

    #[test]
    fn blank_strings_are_absent() {
        let summary = QuoteSummaryResult {
            asset_profile: Some(AssetProfile {
                sector: Some("  ".to_string()),
                website: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(CompanyInfo::from_summary(&summary), CompanyInfo::default());
    }

    // -- lenient policy --

    #[test]
    fn lenient_full_panel() {
        let panel = CompanyPanel::build(&full_info(), MetadataPolicy::Lenient).unwrap();
        assert_eq!(panel.columns.len(), 3);
        assert_eq!(panel.fields().count(), 5);
        assert_eq!(panel.field("Sector").unwrap().value, "Technology");
        assert_eq!(panel.field("Beta").unwrap().value, "1.25");
        assert_eq!(panel.field("Market Cap").unwrap().value, "2,500,000,000,000");
        assert_eq!(panel.field("P/E Ratio").unwrap().value, "28.4567");
        let website = panel.field("Website").unwrap();
        assert_eq!(website.value, "https://www.apple.com");
        assert_eq!(website.link.as_deref(), Some("https://www.apple.com"));
    }

    #[test]
    fn lenient_missing_fields_are_placeholders() {
        let info = CompanyInfo {
            sector: Some("Energy".to_string()),
            ..Default::default()
        };
        let panel = CompanyPanel::build(&info, MetadataPolicy::Lenient).unwrap();
        assert_eq!(panel.fields().count(), 5);
        assert_eq!(panel.field("Sector").unwrap().value, "Energy");
        for label in ["Beta", "Market Cap", "P/E Ratio", "Website"] {
            assert_eq!(panel.field(label).unwrap().value, NOT_AVAILABLE, "{label}");
        }
        assert!(panel.field("Website").unwrap().link.is_none());
    }

    #[test]
    fn lenient_column_layout() {
        let panel = CompanyPanel::build(&full_info(), MetadataPolicy::Lenient).unwrap();
        let labels: Vec<Vec<&str>> = panel
            .columns
            .iter()
            .map(|c| c.iter().map(|f| f.label).collect())
            .collect();
        assert_eq!(
            labels,
            vec![
                vec!["Sector", "Beta"],
                vec!["Market Cap", "P/E Ratio"],
                vec!["Website"]
            ]
        );
    }

    #[test]
    fn non_http_website_is_not_linked() {
        let info = CompanyInfo {
            website: Some("javascript:alert(1)".to_string()),
            ..full_info()
        };
        let panel = CompanyPanel::build(&info, MetadataPolicy::Lenient).unwrap();
        let website = panel.field("Website").unwrap();
        assert_eq!(website.value, "javascript:alert(1)");
        assert!(website.link.is_none());
    }

    // -- strict policy --

    #[test]
    fn strict_full_panel() {
        let panel = CompanyPanel::build(&full_info(), MetadataPolicy::Strict).unwrap();
        assert_eq!(panel.field("Beta").unwrap().value, "1.25");
        assert_eq!(panel.field("P/E Ratio").unwrap().value, "28.46");
        assert_eq!(panel.field("Market Cap").unwrap().value, "2,500,000,000,000");
    }

    #[test]
    fn strict_missing_field_is_error() {
        let info = CompanyInfo {
            beta: None,
            ..full_info()
        };
        let err = CompanyPanel::build(&info, MetadataPolicy::Strict).unwrap_err();
        assert!(matches!(err, DashboardError::MissingField("beta")));

        let info = CompanyInfo {
            website: None,
            ..full_info()
        };
        let err = CompanyPanel::build(&info, MetadataPolicy::Strict).unwrap_err();
        assert!(matches!(err, DashboardError::MissingField("website")));
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("lenient".parse::<MetadataPolicy>().unwrap(), MetadataPolicy::Lenient);
        assert_eq!("STRICT".parse::<MetadataPolicy>().unwrap(), MetadataPolicy::Strict);
        assert!("loose".parse::<MetadataPolicy>().is_err());
        assert_eq!(MetadataPolicy::Strict.to_string(), "strict");
    }
}
