//! Tasks: the data model, query filters and the persistent store.

mod filter;
mod store;
mod types;

pub use filter::{StatusFilter, TaskFilter};
pub use store::TaskStore;
pub use types::{normalize_tags, Status, Task, TaskDraft};
