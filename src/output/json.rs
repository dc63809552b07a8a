//! JSON output formatting.

use serde::Serialize;
use serde_json::json;

use crate::error::TodoError;
use crate::tasks::Task;

/// Format tasks as a `{"list", "count", "items"}` envelope.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_name: &str) -> Result<String, TodoError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_task() -> Task {
        Task {
            id: 3,
            title: "Call client".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            tags: vec!["work".to_string()],
            completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 6, 14, 9, 30, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn test_format_tasks_json_empty_list() {
        let result = format_tasks_json(&[], "open").unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["list"], "open");
        assert_eq!(value["count"], 0);
        assert_eq!(value["items"], json!([]));
    }

    #[test]
    fn test_format_tasks_json_fields() {
        let result = format_tasks_json(&[make_task()], "open").unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        let item = &value["items"][0];
        assert_eq!(item["id"], 3);
        assert_eq!(item["title"], "Call client");
        assert_eq!(item["due_date"], "2024-06-15");
        assert_eq!(item["tags"], json!(["work"]));
        assert_eq!(item["completed"], false);
        assert_eq!(item["completed_at"], serde_json::Value::Null);
    }

    #[test]
    fn test_task_json_roundtrip() {
        let task = make_task();
        let parsed: Task = serde_json::from_str(&format_task_json(&task).unwrap()).unwrap();
        assert_eq!(parsed, task);
    }
}
