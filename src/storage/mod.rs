//! Storage layer for quicktodo.
//!
//! `SQLite`-based persistence for tasks. Higher-level task operations live
//! in [`crate::tasks::TaskStore`].

mod database;
mod migrations;

pub use database::Database;
