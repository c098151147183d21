//! HTTP inbound adapter exposing the REST endpoints and landing page.

pub mod error;
pub mod health;
pub mod landing;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every route and the JSON extractor configuration.
///
/// Handlers expect `web::Data<state::HttpState>` and
/// `web::Data<health::HealthState>` to be registered on the `App`.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use user_registry::inbound::http::{configure, health::HealthState, state::HttpState};
/// use user_registry::outbound::persistence::{DbConnection, DieselUserRepository};
/// use std::sync::Arc;
///
/// let connection = DbConnection::open("database.db").expect("open store");
/// let state = HttpState::new(Arc::new(DieselUserRepository::new(connection)));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(landing::landing)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::update_user)
        .service(users::delete_user)
        .service(health::ready)
        .service(health::live);
}
