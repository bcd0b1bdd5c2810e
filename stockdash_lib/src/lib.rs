//! Library layer for stockdash: input collection, metadata policies, price
//! series, chart figures, and page composition.
//!
//! Wraps the `stockdash_api` Yahoo Finance client behind the [`MarketData`]
//! trait and turns one [`DashboardQuery`] into one rendered HTML page.

pub mod chart;
pub mod company;
pub mod config;
pub mod error;
pub mod history;
pub mod page;
pub mod provider;
pub mod query;
pub mod render;
pub mod validation;

pub use stockdash_api;
pub use stockdash_api::types;

pub use chart::{build_figure, ChartTheme, Figure};
pub use company::{CompanyInfo, CompanyPanel, MetadataPolicy, PanelField};
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use history::{PricePoint, PriceSeries};
pub use page::{Dashboard, DashboardOptions, DashboardPage, Section};
pub use provider::{MarketData, YahooProvider};
pub use query::{DashboardForm, DashboardQuery, QueryDefaults};
pub use render::{PageRenderer, RenderOptions};
