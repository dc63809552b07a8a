//! Core date utilities shared by the parser, the filters and the CLI.

mod datetime;

pub use datetime::{local_today, resolve_date, DatePhrase};
