//! Database migrations for quicktodo.
//!
//! Each migration upgrades the schema by one version and runs in its own
//! transaction together with the version bump. Migrations run automatically
//! when the database is opened.

use rusqlite::Connection;

use crate::error::TodoError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, TodoError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TodoError::Database(format!("Failed to get schema version: {e}")))
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), TodoError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TodoError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &mut Connection) -> Result<(), TodoError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        let tx = conn
            .transaction()
            .map_err(|e| TodoError::Database(format!("Failed to begin migration: {e}")))?;
        run_migration(&tx, version)?;
        set_version(&tx, version)?;
        tx.commit()
            .map_err(|e| TodoError::Database(format!("Failed to commit migration v{version}: {e}")))?;
        log::info!("event=db_migrate status=ok version={version}");
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), TodoError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TodoError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the `tasks` table.
///
/// `due_date` is `YYYY-MM-DD`, timestamps are fixed-width RFC 3339 UTC, and
/// `tags` is a JSON array of strings. `AUTOINCREMENT` keeps ids from ever
/// being reused.
fn migrate_v1(conn: &Connection) -> Result<(), TodoError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK (length(trim(title)) > 0),
            description TEXT,
            due_date TEXT,
            tags TEXT NOT NULL DEFAULT '[]',
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            completed_at TEXT,
            CHECK ((completed = 0 AND completed_at IS NULL)
                OR (completed = 1 AND completed_at IS NOT NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_open
        ON tasks(completed, due_date, created_at);
        ",
    )
    .map_err(|e| TodoError::Database(format!("Migration v1 failed: {e}")))
}
