use anyhow::Context;
use seolens_core::{Analyzer, AnalyzerConfig};
use seolens_server::{AppState, ServerConfig, app};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seolens_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let analyzer = Analyzer::with_config(AnalyzerConfig::builder().timeout(config.fetch_timeout).build());
    let router = app(AppState::new(analyzer));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, timeout = config.fetch_timeout, "seolens-server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("seolens-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
