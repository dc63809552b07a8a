//! Output formatting for quicktodo.
//!
//! Renders tasks either as colored text or as JSON.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format a task list based on output format.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, today)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat, today: NaiveDate) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, today)),
        OutputFormat::Json => format_task_json(task),
    }
}
