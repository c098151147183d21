//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{DATABASE_PATH, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use user_registry::Trace;
use user_registry::inbound::http::configure;
use user_registry::inbound::http::health::HealthState;
use user_registry::inbound::http::state::HttpState;
use user_registry::outbound::persistence::DieselUserRepository;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
}

/// Construct an Actix HTTP server over the configured store.
///
/// Readiness is marked once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        connection,
    } = config;
    let http_state = web::Data::new(HttpState::new(Arc::new(DieselUserRepository::new(
        connection,
    ))));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?;
    for addr in server.addrs() {
        info!(%addr, "listening");
    }

    let server = server.run();
    health_state.mark_ready();
    Ok(server)
}
