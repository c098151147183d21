//! The single shared SQLite connection backing the user store.
//!
//! `SqliteConnection` is synchronous, so statements run on tokio's blocking
//! pool. A mutex serialises them; SQLite itself serialises conflicting writes
//! on the file.
//!
//! The handle is created explicitly at startup and handed to the adapters
//! that need it. Dropping the last clone closes the database.

use std::path::Path;
use std::sync::Arc;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::ports::define_port_error;

/// Idempotent DDL for the user table.
const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT UNIQUE,
    address TEXT
)";

define_port_error! {
    /// Errors raised while opening or driving the connection.
    pub enum StoreError {
        /// The database file could not be opened or created.
        Open { path: String, message: String } => "failed to open database {path}: {message}",
        /// The `users` table could not be ensured.
        Schema { message: String } => "failed to initialise schema: {message}",
        /// The blocking task running a statement panicked or was cancelled.
        Worker { message: String } => "database worker failed: {message}",
    }
}

/// Shared handle to the user store database.
///
/// Cloning is cheap and every clone refers to the same connection.
#[derive(Clone)]
pub struct DbConnection {
    inner: Arc<Mutex<SqliteConnection>>,
    path: Arc<str>,
}

impl DbConnection {
    /// Open (creating if absent) the database at `database_path` and ensure
    /// the `users` table exists.
    ///
    /// Blocks the calling thread; call it during startup, before serving.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the file cannot be opened and
    /// [`StoreError::Schema`] when the table cannot be created.
    pub fn open(database_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = database_path.as_ref().to_string_lossy().into_owned();
        let mut conn = SqliteConnection::establish(&path)
            .map_err(|err| StoreError::open(path.as_str(), err.to_string()))?;
        ensure_schema(&mut conn)?;
        info!(path = %path, "user store opened");

        Ok(Self {
            inner: Arc::new(Mutex::new(conn)),
            path: Arc::from(path),
        })
    }

    /// Location of the database file as given to [`DbConnection::open`].
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run `operation` against the connection on the blocking pool.
    ///
    /// The outer result reports failures of the worker itself; the inner one
    /// is the statement outcome.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Worker`] if the blocking task does not complete.
    pub async fn run<F, T>(&self, operation: F) -> Result<QueryResult<T>, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut guard = inner.blocking_lock();
            operation(&mut *guard)
        })
        .await
        .map_err(|err| StoreError::worker(err.to_string()))
    }
}

fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(conn)
        .map_err(|err| StoreError::schema(err.to_string()))?;
    debug!("users table ensured");
    Ok(())
}
