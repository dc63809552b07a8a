//! Task persistence.
//!
//! Wraps a [`Database`] and owns every read and write of the `tasks` table.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};
use log::{debug, info};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use super::{normalize_tags, Task, TaskDraft, TaskFilter};
use crate::config::Paths;
use crate::error::TodoError;
use crate::storage::Database;

const SELECT_TASK: &str = "SELECT id, title, description, due_date, tags, completed, created_at, completed_at FROM tasks";

/// Dated tasks first (earliest first), then undated; ties by creation time,
/// then id, so the order is total.
const ORDER_BY: &str = "ORDER BY due_date IS NULL, due_date ASC, created_at ASC, id ASC";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage for tasks.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Open the task store under the given paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(paths: &Paths) -> Result<Self, TodoError> {
        Ok(Self::with_database(Database::open(paths)?))
    }

    /// Create a store over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Persist a new task.
    ///
    /// The id comes from `SQLite`'s `AUTOINCREMENT` inside an immediate write
    /// transaction, so concurrent processes never receive the same id.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::EmptyTitle` for a blank title, or
    /// `TodoError::Database` if the write fails.
    pub fn create(&mut self, draft: &TaskDraft) -> Result<Task, TodoError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        let tags = normalize_tags(&draft.tags);
        let tags_json = serde_json::to_string(&tags)?;

        let tx = self.db.write_transaction()?;
        // Read the clock under the write lock so id order and created_at agree.
        let created_at = now();
        tx.execute(
            r"INSERT INTO tasks (title, description, due_date, tags, completed, created_at)
              VALUES (?1, ?2, ?3, ?4, 0, ?5)",
            params![
                title,
                draft.description,
                draft.due_date.map(format_date),
                tags_json,
                format_timestamp(created_at),
            ],
        )
        .map_err(|e| TodoError::Database(format!("Failed to insert task: {e}")))?;
        let id = tx.last_insert_rowid();
        tx.commit()
            .map_err(|e| TodoError::Database(format!("Failed to commit task: {e}")))?;

        info!(
            "event=task_create status=ok id={id} due={:?} tags={}",
            draft.due_date,
            tags.len()
        );

        Ok(Task {
            id,
            title,
            description: draft.description.clone(),
            due_date: draft.due_date,
            tags,
            completed: false,
            created_at,
            completed_at: None,
        })
    }

    /// Get a task by id.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no task has this id.
    pub fn get(&self, id: i64) -> Result<Task, TodoError> {
        self.db
            .connection()
            .query_row(&format!("{SELECT_TASK} WHERE id = ?1"), [id], row_to_task)
            .optional()
            .map_err(|e| TodoError::Database(format!("Failed to query task: {e}")))?
            .ok_or_else(|| TodoError::NotFound(format!("Task {id}")))
    }

    /// All open tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_open(&self) -> Result<Vec<Task>, TodoError> {
        self.query(&TaskFilter::open())
    }

    /// Tasks matching a filter, in the same order as [`Self::list_open`].
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query(&self, filter: &TaskFilter) -> Result<Vec<Task>, TodoError> {
        let sql = format!(
            "{SELECT_TASK} WHERE {} {ORDER_BY}",
            filter.status.sql_predicate()
        );
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| TodoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_task)
            .map_err(|e| TodoError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            let task = row.map_err(|e| TodoError::Database(e.to_string()))?;
            if filter.matches(&task) {
                tasks.push(task);
            }
        }

        debug!("event=task_query status=ok count={}", tasks.len());
        Ok(tasks)
    }

    /// Mark a task completed.
    ///
    /// Completing an already-completed task is a no-op that returns it with
    /// its original `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no task has this id; nothing is written.
    pub fn complete(&mut self, id: i64) -> Result<Task, TodoError> {
        let tx = self.db.write_transaction()?;

        let mut task = tx
            .query_row(&format!("{SELECT_TASK} WHERE id = ?1"), [id], row_to_task)
            .optional()
            .map_err(|e| TodoError::Database(format!("Failed to query task: {e}")))?
            .ok_or_else(|| TodoError::NotFound(format!("Task {id}")))?;

        if task.completed {
            debug!("event=task_complete status=noop id={id}");
            return Ok(task);
        }

        let completed_at = now();
        tx.execute(
            "UPDATE tasks SET completed = 1, completed_at = ?1 WHERE id = ?2 AND completed = 0",
            params![format_timestamp(completed_at), id],
        )
        .map_err(|e| TodoError::Database(format!("Failed to complete task: {e}")))?;
        tx.commit()
            .map_err(|e| TodoError::Database(format!("Failed to commit completion: {e}")))?;

        info!("event=task_complete status=ok id={id}");
        task.completed = true;
        task.completed_at = Some(completed_at);
        Ok(task)
    }
}

/// Current time at the precision that is stored.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Fixed-width so that text ordering in SQL matches time ordering.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(idx: usize, s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Convert a database row to a Task.
fn row_to_task(row: &Row<'_>) -> Result<Task, rusqlite::Error> {
    let due_date_str: Option<String> = row.get(3)?;
    let tags_json: String = row.get(4)?;
    let created_at_str: String = row.get(6)?;
    let completed_at_str: Option<String> = row.get(7)?;

    let due_date = due_date_str
        .map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| conversion_error(3, e)))
        .transpose()?;
    let tags: Vec<String> = serde_json::from_str(&tags_json).map_err(|e| conversion_error(4, e))?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date,
        tags,
        completed: row.get(5)?,
        created_at: parse_timestamp(6, &created_at_str)?,
        completed_at: completed_at_str
            .map(|s| parse_timestamp(7, &s))
            .transpose()?,
    })
}
