//! User registry: CRUD over a single SQLite `users` table, served via actix-web.
//!
//! Layout follows ports and adapters: [`domain`] holds the model and the
//! storage port, [`outbound`] the Diesel adapter, and [`inbound`] the HTTP
//! handlers.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use domain::TraceId;
pub use middleware::Trace;
