use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use wapoints_server::{Cli, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let state = match &cli.tables {
        Some(path) => cli
            .app_state()
            .with_context(|| format!("load scoring tables from {}", path.display()))?,
        None => {
            warn!("no scoring tables configured, only fallbacks can score");
            cli.app_state().context("build calculator")?
        }
    };

    let shutdown = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for shutdown signal");
        }
    };

    serve(state, cli.bind, shutdown)
        .await
        .with_context(|| format!("serve on {}", cli.bind))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
