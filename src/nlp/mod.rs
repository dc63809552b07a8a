//! Natural language parsing for task entry.
//!
//! This module turns input like:
//! - "Call client for tomorrow #work"
//! - "Buy groceries #shopping #personal"
//! - "Submit report due next friday"
//!
//! into a title, tags and an optional due date.

mod parser;

pub use parser::{parse_command, parse_command_on, parse_task, parse_task_on, ParsedTask};
