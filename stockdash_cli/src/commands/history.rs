use anyhow::Result;
use chrono::Local;
use clap::Args;
use stockdash_lib::validation::{normalize_symbol, parse_date};
use stockdash_lib::{DashboardConfig, MarketData};

use crate::output::{print_json, print_prices_csv, print_prices_table, OutputFormat};

#[derive(Args)]
pub struct HistoryArgs {
    /// Ticker symbol, e.g. AAPL
    pub symbol: String,

    /// Start date, YYYY-MM-DD (defaults to STOCKDASH_DEFAULT_START)
    #[arg(long)]
    pub start: Option<String>,

    /// End date, YYYY-MM-DD (exclusive; defaults to today)
    #[arg(long)]
    pub end: Option<String>,
}

pub async fn run(args: &HistoryArgs, config: &DashboardConfig, format: &OutputFormat) -> Result<()> {
    let symbol = normalize_symbol(&args.symbol)?;
    let start = parse_date("start", args.start.as_deref())?.unwrap_or(config.default_start);
    let end = parse_date("end", args.end.as_deref())?.unwrap_or_else(|| Local::now().date_naive());

    let series = config.provider()?.price_history(&symbol, start, end).await?;
    if series.is_empty() {
        tracing::warn!(%symbol, %start, %end, "no trading days in range");
    }

    match format {
        OutputFormat::Json => print_json(&series),
        OutputFormat::Table => print_prices_table(&series),
        OutputFormat::Csv => print_prices_csv(&series)?,
    }
    Ok(())
}
