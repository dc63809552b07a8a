//! Command implementations for quicktodo.
//!
//! Each command returns the text to print on success.

mod add;
mod completions;

pub use add::{parse_only, quick_add};
pub use completions::generate_completions;

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::{ConfigCommands, ListArgs, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::resolve_date;
use crate::error::TodoError;
use crate::output::{format_task, format_tasks, to_json};
use crate::tasks::{StatusFilter, TaskFilter, TaskStore};

/// List open tasks (the bare `todo` invocation).
///
/// # Errors
///
/// Returns an error if the query or output formatting fails.
pub fn list_open(
    store: &TaskStore,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String, TodoError> {
    let tasks = store.list_open()?;
    format_tasks(&tasks, "Open tasks", format, today)
}

/// Execute the list command.
///
/// # Errors
///
/// Returns `TodoError::InvalidArgument` for an unrecognized `--due-before`
/// date, or an error if the query or output formatting fails.
pub fn list(
    store: &TaskStore,
    args: &ListArgs,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String, TodoError> {
    let filter = build_filter(args, today)?;
    let title = match filter.status {
        StatusFilter::Open => "Open tasks",
        StatusFilter::Completed => "Completed tasks",
        StatusFilter::All => "All tasks",
    };
    let tasks = store.query(&filter)?;
    format_tasks(&tasks, title, format, today)
}

fn build_filter(args: &ListArgs, today: NaiveDate) -> Result<TaskFilter, TodoError> {
    let status = if args.all {
        StatusFilter::All
    } else if args.completed {
        StatusFilter::Completed
    } else {
        StatusFilter::Open
    };

    let mut filter = TaskFilter::open().with_status(status);
    if let Some(tag) = &args.tag {
        filter = filter.with_tag(tag.as_str());
    }
    if let Some(phrase) = &args.due_before {
        let date = resolve_date(phrase, today)
            .ok_or_else(|| TodoError::InvalidArgument(format!("Unrecognized date: {phrase}")))?;
        filter = filter.due_on_or_before(date);
    }
    if args.overdue {
        filter = filter.overdue_as_of(today);
    }
    if let Some(text) = &args.search {
        filter = filter.with_search(text.as_str());
    }
    Ok(filter)
}

/// Execute the done command.
///
/// Ids are completed in order; the first unknown id stops the command,
/// leaving earlier completions in place.
///
/// # Errors
///
/// Returns `TodoError::NotFound` for an unknown id.
pub fn done(
    store: &mut TaskStore,
    ids: &[i64],
    format: OutputFormat,
) -> Result<String, TodoError> {
    let mut completed = Vec::with_capacity(ids.len());
    let mut output = String::new();

    for &id in ids {
        let already = store.get(id)?.completed;
        let task = store.complete(id)?;
        let label = if already {
            "Already completed:".dimmed()
        } else {
            "Completed:".green().bold()
        };
        writeln!(output, "{label} {} (ID: {})", task.title, task.id).ok();
        completed.push(task);
    }

    match format {
        OutputFormat::Json => to_json(&completed),
        OutputFormat::Pretty => Ok(output),
    }
}

/// Execute the show command.
///
/// # Errors
///
/// Returns `TodoError::NotFound` for an unknown id.
pub fn show(
    store: &TaskStore,
    id: i64,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String, TodoError> {
    let task = store.get(id)?;
    format_task(&task, format, today)
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn config(
    cmd: &ConfigCommands,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match (cmd, format) {
        (ConfigCommands::Show, OutputFormat::Json) => to_json(config),
        (ConfigCommands::Show, OutputFormat::Pretty) => config.to_yaml(),
        (ConfigCommands::Path, OutputFormat::Json) => to_json(&serde_json::json!({
            "root": paths.root,
            "config_file": paths.config_file,
            "database": paths.database,
            "logs": paths.logs,
        })),
        (ConfigCommands::Path, OutputFormat::Pretty) => {
            let mut output = String::new();
            writeln!(output, "{}: {}", "Home".dimmed(), paths.root.display()).ok();
            writeln!(output, "{}: {}", "Config".dimmed(), paths.config_file.display()).ok();
            writeln!(output, "{}: {}", "Database".dimmed(), paths.database.display()).ok();
            writeln!(output, "{}: {}", "Logs".dimmed(), paths.logs.display()).ok();
            Ok(output)
        },
    }
}
