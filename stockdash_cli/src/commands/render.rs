use anyhow::{Context, Result};
use clap::Args;
use stockdash_lib::{Dashboard, DashboardConfig, DashboardForm};

#[derive(Args)]
pub struct RenderArgs {
    /// Ticker symbol (defaults to STOCKDASH_DEFAULT_SYMBOL)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Start date, YYYY-MM-DD
    #[arg(long)]
    pub start: Option<String>,

    /// End date, YYYY-MM-DD (exclusive; defaults to today)
    #[arg(long)]
    pub end: Option<String>,

    /// Write the page here instead of stdout
    #[arg(long)]
    pub out: Option<std::path::PathBuf>,
}

pub async fn run(args: &RenderArgs, config: &DashboardConfig) -> Result<()> {
    let dashboard = Dashboard::new(config.provider()?, config.options())?;
    let form = DashboardForm {
        symbol: args.symbol.clone(),
        start: args.start.clone(),
        end: args.end.clone(),
    };

    let html = dashboard.render_page(&form).await?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => println!("{}", html),
    }
    Ok(())
}
