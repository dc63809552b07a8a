use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, Utc};
use colored::{ColoredString, Colorize};

use crate::tasks::Task;

/// Format a list of tasks, one per line.
pub fn format_tasks_pretty(tasks: &[Task], title: &str, today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No tasks");
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let mut line = format!(
            "{} {:>4}  {}",
            status_icon(task),
            task.id.to_string().dimmed(),
            task.title.bold()
        );

        if let Some(due) = task.due_date {
            write!(line, "  {}", due_label(task, due, today)).ok();
        }

        if !task.tags.is_empty() {
            write!(line, "  {}", hashtags(&task.tags).cyan()).ok();
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task with all of its fields.
pub fn format_task_pretty(task: &Task, today: NaiveDate) -> String {
    let mut output = format!("{} {}\n", status_icon(task), task.title.bold());
    writeln!(output, "  {}: {}", "ID".dimmed(), task.id).ok();
    writeln!(output, "  {}: {}", "Status".dimmed(), task.status()).ok();

    if let Some(description) = &task.description {
        writeln!(output, "  {}: {description}", "Description".dimmed()).ok();
    }

    if let Some(due) = task.due_date {
        writeln!(output, "  {}: {}", "Due".dimmed(), due_label(task, due, today)).ok();
    }

    if !task.tags.is_empty() {
        writeln!(output, "  {}: {}", "Tags".dimmed(), task.tags.join(", ")).ok();
    }

    writeln!(
        output,
        "  {}: {}",
        "Created".dimmed(),
        local_timestamp(task.created_at)
    )
    .ok();

    if let Some(completed_at) = task.completed_at {
        writeln!(
            output,
            "  {}: {}",
            "Completed".dimmed(),
            local_timestamp(completed_at)
        )
        .ok();
    }

    output
}

/// A stored UTC timestamp shown in the local zone.
fn local_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M %Z").to_string()
}

/// `#a #b` rendering of a tag list.
pub fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn status_icon(task: &Task) -> ColoredString {
    if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    }
}

/// The due date plus a relative hint for the next week or so.
fn due_label(task: &Task, due: NaiveDate, today: NaiveDate) -> ColoredString {
    let days = (due - today).num_days();
    let hint = match days {
        0 => " (today)".to_string(),
        1 => " (tomorrow)".to_string(),
        2..=6 => format!(" ({})", due.format("%A")),
        _ => String::new(),
    };
    let label = format!("{due}{hint}");

    if task.is_overdue(today) {
        format!("{label} overdue").red().bold()
    } else if days == 0 && !task.completed {
        label.yellow().bold()
    } else {
        label.yellow()
    }
}
