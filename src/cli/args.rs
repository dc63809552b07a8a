use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A natural-language task tracker for the terminal")]
#[command(long_about = "todo - A natural-language task tracker

Type what you need to do; dates and tags are picked out for you.

QUICK START:
  todo                                   List open tasks
  todo Call client for tomorrow '#work'  Add a task due tomorrow, tagged work
  todo done 3                            Complete task 3
  todo list --tag work --overdue         Filter tasks

DUE DATES (after 'for', 'due' or 'by'):
  today, tomorrow, next week, in 3 days, in 2 weeks,
  friday, next friday, 2024-12-25

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Data directory holding the database, config and logs
    #[arg(long, env = "TODO_HOME", global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Log level override (error, warn, info, debug, trace, off)
    #[arg(long, env = "TODO_LOG", global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task text to add; with no text and no command, open tasks are listed
    #[arg(value_name = "TEXT")]
    pub words: Vec<String>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task from natural language
    ///
    /// Same as `todo <text>`, but works for titles that start with a
    /// command name.
    ///
    /// # Examples
    ///
    ///   todo add Call client for tomorrow '#work'
    ///   todo add list the attic contents due saturday
    ///   todo add -d 'ask about insurance' Call dentist by friday
    #[command(alias = "a")]
    Add(AddArgs),

    /// List tasks
    ///
    /// Without flags, shows open tasks: dated ones first (earliest due
    /// first), then undated ones, each in creation order.
    ///
    /// # Examples
    ///
    ///   todo list --tag work
    ///   todo list --due-before friday
    ///   todo list --all -o json
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark one or more tasks as completed
    ///
    /// Completing a task that is already completed is harmless.
    #[command(alias = "complete")]
    Done {
        /// Task ids
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Show a single task in detail
    Show {
        /// Task id
        id: i64,
    },

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: todo completions bash > ~/.local/share/bash-completion/completions/todo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for adding a task.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// The task in natural language
    ///
    /// Supports:
    ///   - Tags: #tag1 #tag2 (anywhere)
    ///   - Due dates: for/due/by followed by a date phrase
    #[arg(required = true, value_name = "TEXT")]
    pub words: Vec<String>,

    /// Optional longer description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Only parse and show what would be created, don't actually create
    #[arg(long)]
    pub parse_only: bool,
}

/// Arguments for listing tasks.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Include completed tasks
    #[arg(short, long, conflicts_with = "completed")]
    pub all: bool,

    /// Only completed tasks
    #[arg(short, long)]
    pub completed: bool,

    /// Only tasks with this tag (case-insensitive)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Only tasks due on or before this date (any due-date phrase)
    #[arg(long, value_name = "DATE")]
    pub due_before: Option<String>,

    /// Only open tasks whose due date has passed
    #[arg(long)]
    pub overdue: bool,

    /// Only tasks whose title contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the data, config, database and log paths
    Path,
}
