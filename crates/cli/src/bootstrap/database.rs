use offline_agent_domain::config::DatabaseConfig;
use offline_agent_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing cache database: {}", cfg.url);

    let pool = create_pool(&cfg.url, cfg.max_connections).await.map_err(|e| {
        error!("Failed to initialize cache database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        "Cache database initialized"
    );

    Ok(pool)
}
