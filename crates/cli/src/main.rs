//! # Offline Agent
//!
//! Host harness for the offline caching agent: installs and activates the
//! agent on startup, then serves intercepted page requests through its
//! cache-first fetch strategy.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use offline_agent_application::AgentEvent;
use offline_agent_domain::CliOverrides;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "offline-agent")]
#[command(version)]
#[command(about = "Offline-first caching agent with a cache-first fetch strategy")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Harness port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite URL backing the cache store
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        database_url: cli.database_url,
        log_level: cli.log_level,
    };

    // Config first: the subscriber's level comes out of it.
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    tracing::info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        cache_version = %config.cache.version,
        precache_urls = config.cache.precache.len(),
        bind = %config.server.bind_address,
        port = config.server.port,
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database).await?;
    let services = di::build_agent(&config, pool)?;

    // Install: a population failure is logged and this host keeps going; the
    // fetch strategy still works request by request with whatever was cached.
    if let Err(e) = services.agent.dispatch(AgentEvent::Install).await {
        tracing::error!(error = %e, "Install failed; continuing with partial shell");
    }

    services.agent.dispatch(AgentEvent::Activate).await?;

    let state = server::AppState {
        agent: services.agent.clone(),
        network: services.network.clone(),
        documents_tag: config.sync.documents_tag.clone(),
    };
    let app = server::create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address: {e}"))?;

    tracing::info!(addr = %addr, "Offline agent serving");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
