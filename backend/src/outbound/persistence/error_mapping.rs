//! Mapping from connection and Diesel errors onto `UserPersistenceError`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::connection::StoreError;
use crate::domain::ports::UserPersistenceError;

/// Map connection-level failures into a connection error.
pub(super) fn map_store_error(error: StoreError) -> UserPersistenceError {
    UserPersistenceError::connection(error.to_string())
}

/// Map a statement failure, keeping the engine's own message.
///
/// Unique violations become `ConstraintViolation`; a closed connection
/// becomes `Connection`; everything else is a `Query` failure.
pub(super) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            UserPersistenceError::constraint_violation(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserPersistenceError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => UserPersistenceError::query(info.message()),
        other => UserPersistenceError::query(other.to_string()),
    }
}
