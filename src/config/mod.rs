//! Configuration management for quicktodo.
//!
//! This module handles locating the data directory and loading `config.yaml`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig};
