//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use super::configure;
use super::health::HealthState;
use super::state::HttpState;
use crate::domain::ports::UserRepository;
use crate::middleware::Trace;

/// Build the full route table over the given store, wrapped in [`Trace`].
pub fn test_app(
    users: Arc<dyn UserRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(users)))
        .app_data(web::Data::new(HealthState::new()))
        .wrap(Trace)
        .configure(configure)
}
