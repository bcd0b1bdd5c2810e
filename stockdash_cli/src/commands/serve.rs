use anyhow::{Context, Result};
use clap::Args;
use stockdash_lib::{Dashboard, DashboardConfig};

use crate::server::{router, AppState};

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides STOCKDASH_BIND)
    #[arg(long)]
    pub bind: Option<String>,
}

pub async fn run(args: &ServeArgs, mut config: DashboardConfig) -> Result<()> {
    if let Some(bind) = &args.bind {
        config.bind = bind.clone();
    }

    let dashboard = Dashboard::new(config.provider()?, config.options())?;
    let app = router(AppState::new(dashboard));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        bind = %config.bind,
        provider = %config.provider_url,
        policy = %config.policy,
        theme = %config.theme,
        "stockdash listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutting down");
}
