//! Natural language task parser.
//!
//! Parses strings like "Call client for tomorrow #work" into a title, a tag
//! list and an optional due date.

use chrono::NaiveDate;
use log::debug;

use crate::core::{local_today, resolve_date};
use crate::error::TodoError;
use crate::tasks::{normalize_tags, TaskDraft};

/// Connector words that introduce a due-date fragment.
const DEADLINE_MARKERS: [&str; 3] = ["for", "due", "by"];

/// Result of parsing a natural language task string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTask {
    /// The task title (input minus tags and a resolved deadline).
    pub title: String,
    /// Tags extracted from `#tag` tokens, deduplicated case-insensitively.
    pub tags: Vec<String>,
    /// Resolved due date.
    pub due_date: Option<NaiveDate>,
    /// The fragment the due date was resolved from, e.g. `next friday`.
    pub due_phrase: Option<String>,
}

impl ParsedTask {
    /// Turn this into a storable draft.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::EmptyTitle` if nothing is left for the title.
    pub fn into_draft(self) -> Result<TaskDraft, TodoError> {
        let mut draft = TaskDraft::new(self.title)?.with_tags(self.tags);
        draft.due_date = self.due_date;
        Ok(draft)
    }
}

/// Parse a task string, resolving dates against the local calendar day.
///
/// ```
/// use quicktodo::nlp::parse_task;
///
/// let task = parse_task("Buy groceries #shopping #personal");
/// assert_eq!(task.title, "Buy groceries");
/// assert_eq!(task.tags, vec!["shopping", "personal"]);
/// assert!(task.due_date.is_none());
/// ```
#[must_use]
pub fn parse_task(input: &str) -> ParsedTask {
    parse_task_on(input, local_today())
}

/// Parse a task string, resolving dates against `today`.
///
/// Never fails; an empty title is left for [`ParsedTask::into_draft`] to reject.
#[must_use]
pub fn parse_task_on(input: &str, today: NaiveDate) -> ParsedTask {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    debug!("event=parse_start tokens={}", tokens.len());

    let mut task = ParsedTask {
        tags: normalize_tags(tokens.iter().copied().filter(|t| is_tag(t))),
        ..ParsedTask::default()
    };

    // Only the first marker is considered. If its fragment does not resolve,
    // the marker and fragment stay in the title untouched.
    let mut consumed = 0..0;
    if let Some(marker) = tokens
        .iter()
        .position(|t| !is_tag(t) && is_deadline_marker(t))
    {
        let end = tokens[marker + 1..]
            .iter()
            .position(|t| is_tag(t))
            .map_or(tokens.len(), |offset| marker + 1 + offset);
        let fragment = tokens[marker + 1..end].join(" ");

        match resolve_date(&fragment, today) {
            Some(date) if !fragment.is_empty() => {
                debug!("event=parse_due fragment={fragment:?} date={date}");
                task.due_date = Some(date);
                task.due_phrase = Some(fragment);
                consumed = marker..end;
            },
            _ => debug!("event=parse_due_unresolved fragment={fragment:?}"),
        }
    }

    task.title = tokens
        .iter()
        .enumerate()
        .filter(|(i, t)| !is_tag(t) && !consumed.contains(i))
        .map(|(_, t)| *t)
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        "event=parse_done title_len={} tags={} due={:?}",
        task.title.len(),
        task.tags.len(),
        task.due_date
    );
    task
}

/// Parse a task string into a draft, anchored to the local calendar day.
///
/// # Errors
///
/// Returns `TodoError::EmptyTitle` if the input reduces to no title.
pub fn parse_command(input: &str) -> Result<TaskDraft, TodoError> {
    parse_command_on(input, local_today())
}

/// Parse a task string into a draft, anchored to `today`.
///
/// # Errors
///
/// Returns `TodoError::EmptyTitle` if the input reduces to no title.
pub fn parse_command_on(input: &str, today: NaiveDate) -> Result<TaskDraft, TodoError> {
    parse_task_on(input, today).into_draft()
}

fn is_tag(token: &str) -> bool {
    token.starts_with('#')
}

fn is_deadline_marker(token: &str) -> bool {
    DEADLINE_MARKERS
        .iter()
        .any(|marker| token.eq_ignore_ascii_case(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // 2024-06-14 is a Friday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn parse(input: &str) -> ParsedTask {
        parse_task_on(input, today())
    }

    // ===================
    // Basic Parsing Tests
    // ===================

    #[test]
    fn test_parse_simple_task() {
        let task = parse("buy milk");
        assert_eq!(task.title, "buy milk");
        assert!(task.tags.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_plain_input_is_title_verbatim() {
        for input in ["Buy MILK from Store", "  email john@example.com  ", "买牛奶 today"] {
            assert_eq!(parse(input).title, input.trim());
        }
    }

    #[test]
    fn test_parse_whitespace_only() {
        let task = parse("   ");
        assert_eq!(task.title, "");
        assert!(matches!(
            parse_command_on("   ", today()),
            Err(TodoError::EmptyTitle)
        ));
    }

    // ============
    // Tag Tests
    // ============

    #[test]
    fn test_parse_tags_in_order() {
        let task = parse("Buy groceries #shopping #personal");
        assert_eq!(task.title, "Buy groceries");
        assert_eq!(task.tags, vec!["shopping", "personal"]);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_parse_tag_anywhere() {
        let task = parse("#work complete #q4 report");
        assert_eq!(task.title, "complete report");
        assert_eq!(task.tags, vec!["work", "q4"]);
    }

    #[test]
    fn test_tag_dedup_keeps_first_casing() {
        let task = parse("Plan #Work #work #WORK");
        assert_eq!(task.tags, vec!["Work"]);
    }

    #[test]
    fn test_bare_hash_is_discarded() {
        let task = parse("Review PR # #code");
        assert_eq!(task.title, "Review PR");
        assert_eq!(task.tags, vec!["code"]);
    }

    #[test]
    fn test_only_tags_is_empty_title() {
        let task = parse("#work #home");
        assert_eq!(task.title, "");
        assert!(matches!(task.into_draft(), Err(TodoError::EmptyTitle)));
    }

    // ==============
    // Deadline Tests
    // ==============

    #[test]
    fn test_call_client_for_tomorrow() {
        let task = parse("Call client for tomorrow #work");
        assert_eq!(task.title, "Call client");
        assert_eq!(task.tags, vec!["work"]);
        assert_eq!(task.due_date, Some(today() + Duration::days(1)));
        assert_eq!(task.due_phrase.as_deref(), Some("tomorrow"));
    }

    #[test]
    fn test_each_marker_word() {
        for marker in ["for", "due", "by", "FOR", "Due", "bY"] {
            let task = parse(&format!("Send invoice {marker} monday"));
            assert_eq!(task.title, "Send invoice", "marker {marker}");
            assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 17));
        }
    }

    #[test]
    fn test_weekday_today_resolves_to_today() {
        let task = parse("Standup notes due friday");
        assert_eq!(task.due_date, Some(today()));
    }

    #[test]
    fn test_next_weekday_is_following_week() {
        let task = parse("Team lunch by next Friday");
        assert_eq!(task.title, "Team lunch");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 21));
    }

    #[test]
    fn test_multi_word_fragments() {
        assert_eq!(
            parse("Renew passport by in 2 days").due_date,
            NaiveDate::from_ymd_opt(2024, 6, 16)
        );
        assert_eq!(
            parse("Book flights for next week #travel").due_date,
            NaiveDate::from_ymd_opt(2024, 6, 21)
        );
    }

    #[test]
    fn test_unresolved_fragment_stays_in_title() {
        let task = parse("Task for xyzzy");
        assert_eq!(task.title, "Task for xyzzy");
        assert!(task.due_date.is_none());
        assert!(task.due_phrase.is_none());
    }

    #[test]
    fn test_unresolved_fragment_with_tag() {
        let task = parse("Buy a gift for mom #family");
        assert_eq!(task.title, "Buy a gift for mom");
        assert_eq!(task.tags, vec!["family"]);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_marker_at_end_stays_in_title() {
        let task = parse("What are we waiting for");
        assert_eq!(task.title, "What are we waiting for");
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_marker_followed_directly_by_tag() {
        let task = parse("Pay rent due #home tomorrow");
        assert_eq!(task.title, "Pay rent due tomorrow");
        assert_eq!(task.tags, vec!["home"]);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_fragment_stops_at_tag() {
        let task = parse("Call for tomorrow #work about budget");
        assert_eq!(task.title, "Call about budget");
        assert_eq!(task.tags, vec!["work"]);
        assert_eq!(task.due_date, Some(today() + Duration::days(1)));
    }

    #[test]
    fn test_only_first_marker_is_honored() {
        // The first marker's fragment runs to the end and does not resolve.
        let task = parse("Shop for food by tomorrow");
        assert_eq!(task.title, "Shop for food by tomorrow");
        assert!(task.due_date.is_none());

        // A second marker after a resolved one is plain title text.
        let task = parse("Report due monday #work written by Sam");
        assert_eq!(task.title, "Report written by Sam");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 17));
    }

    #[test]
    fn test_marker_inside_word_is_not_a_marker() {
        let task = parse("Forward the bylaws tomorrow");
        assert_eq!(task.title, "Forward the bylaws tomorrow");
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_date_only_input_is_empty_title() {
        assert!(matches!(
            parse_command_on("for tomorrow #x", today()),
            Err(TodoError::EmptyTitle)
        ));
    }

    #[test]
    fn test_parse_command_builds_draft() {
        let draft = parse_command_on("Water plants by sat #Home #home", today()).unwrap();
        assert_eq!(draft.title, "Water plants");
        assert_eq!(draft.tags, vec!["Home"]);
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(draft.description, None);
    }
}
