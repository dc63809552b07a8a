//! Quick add command implementation.
//!
//! Turns natural language input into a stored task.

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;
use log::info;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::nlp::{parse_task_on, ParsedTask};
use crate::output::{hashtags, to_json};
use crate::tasks::TaskStore;

/// Parse `text` and store the resulting task.
///
/// # Errors
///
/// Returns `TodoError::EmptyTitle` if nothing is left for the title, or a
/// storage error if the task cannot be saved.
pub fn quick_add(
    store: &mut TaskStore,
    text: &str,
    description: Option<String>,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String, TodoError> {
    let parsed = parse_task_on(text, today);
    let due_phrase = parsed.due_phrase.clone();
    let draft = parsed.into_draft()?.with_description(description);

    let task = store.create(&draft)?;
    info!("event=quick_add status=ok id={}", task.id);

    match format {
        OutputFormat::Json => to_json(&json!({
            "created": true,
            "task": task,
        })),
        OutputFormat::Pretty => {
            let mut output = format!(
                "{} {} (ID: {})\n",
                "Created:".green().bold(),
                task.title,
                task.id.to_string().dimmed()
            );
            if let Some(due) = task.due_date {
                write!(output, "  {} {due}", "Due:".yellow()).ok();
                if let Some(phrase) = due_phrase {
                    write!(output, " {}", format!("({phrase})").dimmed()).ok();
                }
                output.push('\n');
            }
            if !task.tags.is_empty() {
                writeln!(output, "  {} {}", "Tags:".cyan(), hashtags(&task.tags)).ok();
            }
            Ok(output)
        },
    }
}

/// Show what `text` would parse to without storing anything.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn parse_only(text: &str, format: OutputFormat, today: NaiveDate) -> Result<String, TodoError> {
    let parsed = parse_task_on(text, today);
    format_parsed_task(&parsed, format)
}

/// Format a parsed task for display (parse-only mode).
fn format_parsed_task(task: &ParsedTask, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "parsed": true,
            "title": task.title,
            "due_date": task.due_date,
            "due_phrase": task.due_phrase,
            "tags": task.tags,
        })),
        OutputFormat::Pretty => {
            let mut output = format!("{}\n", "Parsed Task (not created)".yellow().bold());
            writeln!(output, "  {} {}", "Title:".cyan().bold(), task.title).ok();

            if let Some(due) = task.due_date {
                let phrase = task.due_phrase.as_deref().unwrap_or_default();
                writeln!(output, "  {} {due} (from \"{phrase}\")", "Due:".yellow()).ok();
            }
            if !task.tags.is_empty() {
                writeln!(output, "  {} {}", "Tags:".cyan(), hashtags(&task.tags)).ok();
            }

            Ok(output)
        },
    }
}
