//! Path resolution for quicktodo configuration and data files.
//!
//! All data is stored in `~/.todo/` unless overridden with `--home` or
//! `TODO_HOME`:
//! - `config.yaml` - Main configuration file
//! - `todo.db` - SQLite task database
//! - `logs/` - Rotating log files

use std::path::PathBuf;

use crate::error::TodoError;

/// Paths to quicktodo configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.todo/`
    pub root: PathBuf,
    /// Config file: `~/.todo/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.todo/todo.db`
    pub database: PathBuf,
    /// Log directory: `~/.todo/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TodoError> {
        let home = std::env::var("HOME").map_err(|_| {
            TodoError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".todo")))
    }

    /// Use `root` when given, otherwise the default under `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, TodoError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("todo.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TodoError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TodoError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}
