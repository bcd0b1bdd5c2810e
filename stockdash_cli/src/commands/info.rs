use anyhow::{bail, Result};
use clap::Args;
use stockdash_lib::validation::normalize_symbol;
use stockdash_lib::{CompanyPanel, DashboardConfig, MarketData};

use crate::output::{print_json, print_panel_csv, print_panel_table, OutputFormat};

#[derive(Args)]
pub struct InfoArgs {
    /// Ticker symbol, e.g. AAPL
    pub symbol: String,
}

pub async fn run(args: &InfoArgs, config: &DashboardConfig, format: &OutputFormat) -> Result<()> {
    let symbol = normalize_symbol(&args.symbol)?;
    let provider = config.provider()?;
    let Some(info) = provider.company_info(&symbol).await? else {
        bail!("No company data for {}", symbol);
    };

    match format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Table => print_panel_table(&CompanyPanel::build(&info, config.policy)?),
        OutputFormat::Csv => print_panel_csv(&CompanyPanel::build(&info, config.policy)?)?,
    }
    Ok(())
}
