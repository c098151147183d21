//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! storage port, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storage gateway for user records.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state around a user store.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
