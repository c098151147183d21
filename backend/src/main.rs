//! User registry entry-point: opens the store and serves the REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{DATABASE_PATH, ServerConfig, ServerSettings, create_server};
use user_registry::inbound::http::health::HealthState;
use user_registry::outbound::persistence::DbConnection;

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    // Without the table there is nothing to serve.
    let connection = DbConnection::open(DATABASE_PATH).map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), connection.clone());
    let server = create_server(health_state.clone(), config)?;

    let result = server.await;
    health_state.mark_unhealthy();
    info!(path = connection.path(), "server stopped; closing user store");
    drop(connection);
    result
}
