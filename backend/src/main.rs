//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use wedding_backend::inbound::http::health::HealthState;
use wedding_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use wedding_backend::settings::AppSettings;

async fn prepare_database(
    settings: &AppSettings,
    config: ServerConfig,
) -> std::io::Result<ServerConfig> {
    let Some(url) = settings.database_url() else {
        warn!("no database URL configured; guests and invitations live in memory");
        return Ok(config);
    };

    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections()))
        .await
        .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid bind host {:?}: {e}", settings.host()),
        )
    })?;

    let config = prepare_database(&settings, ServerConfig::new(bind_addr)).await?;
    info!(database = config.uses_database(), "storage configured");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
