use anyhow::Context;
use backend::{RelayConfig, RelayServer};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = RelayConfig::parse();

    let filter = match config.log_filter.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server = RelayServer::bind(config.bind)
        .await
        .with_context(|| format!("starting chat relay on {}", config.bind))?;
    server.run(shutdown_signal()).await?;

    info!("[RELAY] Chat relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("[RELAY] Cannot listen for ctrl-c, running until killed: {}", err);
        std::future::pending::<()>().await;
    }
}
