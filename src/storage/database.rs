//! `SQLite` database connection.
//!
//! The database lives at `<home>/todo.db` (see [`Paths`]) and holds the
//! `tasks` table. Each process opens one connection, owned by the caller and
//! closed when dropped.

use std::path::Path;
use std::time::Duration;

use log::debug;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::config::Paths;
use crate::error::TodoError;

use super::migrations;

/// How long a writer waits for another process to release the write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database under the given paths, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created, the database
    /// cannot be opened, or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, TodoError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, TodoError> {
        debug!("event=db_open path={}", path.display());
        let conn = Connection::open(path).map_err(|e| {
            TodoError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Self::init(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, TodoError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TodoError::Database(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, TodoError> {
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| TodoError::Database(format!("Failed to set busy timeout: {e}")))?;

        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<(), TodoError> {
        migrations::run(&mut self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, TodoError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection for read queries.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Start a write transaction that takes the database write lock up front.
    ///
    /// Two processes writing at once serialize here instead of interleaving;
    /// the second waits up to the busy timeout. Dropping the transaction
    /// without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired.
    pub fn write_transaction(&mut self) -> Result<Transaction<'_>, TodoError> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| TodoError::Database(format!("Failed to begin transaction: {e}")))
    }
}
