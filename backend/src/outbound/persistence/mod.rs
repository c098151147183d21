//! SQLite persistence adapter using Diesel ORM.
//!
//! The store is a single database file holding one `users` table. One
//! connection is opened at startup and shared by every request:
//!
//! - **Thin adapter**: `DieselUserRepository` only translates between Diesel
//!   rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Serialised access**: `DbConnection` guards the connection with a mutex
//!   and runs each statement on the blocking thread pool.
//! - **Typed errors**: Diesel errors map onto `UserPersistenceError`.
//!
//! # Example
//!
//! ```no_run
//! use user_registry::outbound::persistence::{DbConnection, DieselUserRepository};
//!
//! let connection = DbConnection::open("database.db")?;
//! let repository = DieselUserRepository::new(connection);
//! # Ok::<(), user_registry::outbound::persistence::StoreError>(())
//! ```

mod connection;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod schema;

pub use connection::{DbConnection, StoreError};
pub use diesel_user_repository::DieselUserRepository;
