mod commands;
mod output;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stockdash_lib::{ChartTheme, DashboardConfig, MetadataPolicy};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "Stock dashboard backed by Yahoo Finance", version)]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Metadata policy: lenient shows N/A for missing fields, strict requires them all
    #[arg(long, global = true)]
    policy: Option<MetadataPolicy>,

    /// Chart theme: light or dark
    #[arg(long, global = true)]
    theme: Option<ChartTheme>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve(commands::serve::ServeArgs),
    /// Render one dashboard page to a file or stdout
    Render(commands::render::RenderArgs),
    /// Show company metadata for a symbol
    Info(commands::info::InfoArgs),
    /// Show daily closing prices for a symbol
    History(commands::history::HistoryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockdash=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let mut config = DashboardConfig::from_env();
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    match &cli.command {
        Commands::Serve(args) => commands::serve::run(args, config).await?,
        Commands::Render(args) => commands::render::run(args, &config).await?,
        Commands::Info(args) => commands::info::run(args, &config, &format).await?,
        Commands::History(args) => commands::history::run(args, &config, &format).await?,
    }

    Ok(())
}
