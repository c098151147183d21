//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters depend on these traits; outbound adapters implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
