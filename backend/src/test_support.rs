//! Helpers shared by integration tests.
//!
//! Compiled only with the `test-support` feature.

use std::io;
use std::sync::Arc;

use tempfile::TempDir;

use crate::domain::ports::UserRepository;
use crate::outbound::persistence::{DbConnection, DieselUserRepository};

/// A user store in a throwaway directory, removed on drop.
pub struct TemporaryStore {
    _dir: TempDir,
    connection: DbConnection,
}

impl TemporaryStore {
    /// Create a fresh `database.db` inside a new temporary directory.
    ///
    /// # Errors
    /// Returns an I/O error when the directory or the database cannot be
    /// created.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let connection =
            DbConnection::open(dir.path().join("database.db")).map_err(io::Error::other)?;
        Ok(Self {
            _dir: dir,
            connection,
        })
    }

    /// Shared connection handle.
    pub fn connection(&self) -> &DbConnection {
        &self.connection
    }

    /// Repository adapter over this store.
    pub fn repository(&self) -> Arc<dyn UserRepository> {
        Arc::new(DieselUserRepository::new(self.connection.clone()))
    }
}
