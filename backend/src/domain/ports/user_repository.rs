//! Port abstraction for the user store and its errors.

use async_trait::async_trait;

use crate::domain::{User, UserDetails, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user store adapters.
    ///
    /// Each variant carries the message reported by the storage engine.
    pub enum UserPersistenceError {
        /// The store could not be opened or its handle is unusable.
        Connection { message: String } => "user store connection failed: {message}",
        /// A uniqueness constraint rejected the write.
        ConstraintViolation { message: String } => "{message}",
        /// Any other statement failure.
        Query { message: String } => "{message}",
    }
}

impl UserPersistenceError {
    /// Message reported by the storage engine, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message }
            | Self::ConstraintViolation { message }
            | Self::Query { message } => message.as_str(),
        }
    }
}

/// Durable store of user records.
///
/// Every method issues exactly one statement. Update and delete report the
/// number of rows changed rather than failing when the identifier is absent;
/// callers decide what zero means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the identifier assigned by storage.
    async fn create_user(&self, details: &UserDetails) -> Result<UserId, UserPersistenceError>;

    /// Return every user in ascending identifier order.
    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Overwrite all fields of the user with `id`; returns rows changed (0 or 1).
    async fn update_user(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<usize, UserPersistenceError>;

    /// Permanently remove the user with `id`; returns rows changed (0 or 1).
    async fn delete_user(&self, id: UserId) -> Result<usize, UserPersistenceError>;
}
