use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

use searxng_mcp::api::{self, MESSAGES_PATH, SSE_PATH};
use searxng_mcp::config::ServerConfig;

#[derive(Debug, Parser)]
#[command(about = "Run MCP-SearXNG SSE-based server")]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5488)]
    port: u16,

    /// SearXNG url to connect to (SEARXNG_URL takes precedence)
    #[arg(long = "searxng_url", default_value = "http://localhost:8888")]
    searxng_url: String,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(true)
        .init();

    let config = ServerConfig::resolve(args.host, args.port, &args.searxng_url)
        .context("Invalid SearXNG url")?;
    let bind: SocketAddr = tokio::net::lookup_host(config.bind_addr())
        .await
        .with_context(|| format!("Invalid bind address {}", config.bind_addr()))?
        .next()
        .with_context(|| format!("No address for {}", config.bind_addr()))?;

    let ct = CancellationToken::new();
    let (router, service_ct) = api::create_router(&config, bind, ct.clone());

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(
        %bind,
        searxng_url = %config.searxng.base_url,
        "serving {SSE_PATH} and {MESSAGES_PATH}"
    );

    let shutdown = ct.clone();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;
    info!("shutting down");
    service_ct.cancel();
    ct.cancel();

    server
        .await
        .context("Server task panicked")?
        .context("Server error")?;
    Ok(())
}
