//! ProjectHub server entry point.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use projecthub::inbound::http::health::HealthState;
use projecthub::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| eyre!("invalid configuration: {err}"))?;
    let bind_addr = settings
        .socket_addr()
        .wrap_err("PROJECTHUB_BIND_ADDR is not a socket address")?;
    let mut config = ServerConfig::new(bind_addr).with_registration(settings.registration());

    if let Some(pool_config) = settings.pool_config() {
        let url = pool_config.database_url().to_owned();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
            .await
            .wrap_err("migration task panicked")??;
        info!(applied, "database schema is current");
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| eyre!("database pool: {err}"))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await?;
    Ok(())
}
