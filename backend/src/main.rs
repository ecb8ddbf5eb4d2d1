//! Server entry-point: loads settings, prepares the database, and serves the
//! feature sample endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use sample_app::inbound::http::health::HealthState;
use sample_app::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use sample_app::settings::AppSettings;

use server::{ServerConfig, create_server};

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

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;
    let pool_config =
        PoolConfig::new(settings.database_url()).with_max_size(settings.pool_max_size());
    info!(database = %pool_config.redacted_url(), "using database");

    if settings.run_migrations() {
        let url = settings.database_url().to_owned();
        let applied = web::block(move || run_pending_migrations(&url))
            .await
            .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
            .map_err(std::io::Error::other)?;
        info!(applied, "database schema up to date");
    }

    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_db_pool(pool);
    create_server(health_state, config)?.await
}
