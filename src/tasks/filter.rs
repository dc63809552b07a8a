//! Task query filters.
//!
//! A [`TaskFilter`] narrows a task listing by status, tag, due date and
//! title text. Every criterion that is set must match.

use chrono::NaiveDate;

use super::Task;

/// Which completion states a query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Only tasks that are not completed.
    #[default]
    Open,
    /// Only completed tasks.
    Completed,
    /// Everything.
    All,
}

impl StatusFilter {
    /// SQL predicate over the `completed` column.
    pub(crate) const fn sql_predicate(self) -> &'static str {
        match self {
            Self::Open => "completed = 0",
            Self::Completed => "completed = 1",
            Self::All => "1 = 1",
        }
    }

    const fn accepts(self, completed: bool) -> bool {
        match self {
            Self::Open => !completed,
            Self::Completed => completed,
            Self::All => true,
        }
    }
}

/// Criteria for [`TaskStore::query`](super::TaskStore::query).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    /// Tag the task must carry (case-insensitive).
    pub tag: Option<String>,
    /// Only tasks due on or before this date. Undated tasks never match.
    pub due_on_or_before: Option<NaiveDate>,
    /// Only tasks due strictly before this date.
    pub overdue_as_of: Option<NaiveDate>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Open tasks, no other criteria.
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag = tag.trim().trim_start_matches('#');
        self.tag = (!tag.is_empty()).then(|| tag.to_string());
        self
    }

    #[must_use]
    pub const fn due_on_or_before(mut self, date: NaiveDate) -> Self {
        self.due_on_or_before = Some(date);
        self
    }

    #[must_use]
    pub const fn overdue_as_of(mut self, today: NaiveDate) -> Self {
        self.overdue_as_of = Some(today);
        self
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = (!text.trim().is_empty()).then(|| text.trim().to_string());
        self
    }

    /// Check a task against every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.status.accepts(task.completed) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !task.has_tag(tag) {
                return false;
            }
        }
        if let Some(limit) = self.due_on_or_before {
            if !task.due_date.is_some_and(|due| due <= limit) {
                return false;
            }
        }
        if let Some(today) = self.overdue_as_of {
            if !task.due_date.is_some_and(|due| due < today) {
                return false;
            }
        }
        if let Some(text) = &self.search {
            if !task.title.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        true
    }
}
