//! quicktodo - A natural-language task tracker for the terminal
//!
//! Tasks are typed as free text. Hashtags become tags and a phrase after
//! `for`, `due` or `by` becomes the due date. Tasks live in a local
//! `SQLite` database.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod output;
pub mod storage;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoError;
pub use nlp::parse_command;
pub use tasks::{Task, TaskDraft, TaskStore};
