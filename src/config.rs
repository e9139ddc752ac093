use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default notes directory, relative to the process working directory
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Color theme for the presentation layer.
///
/// Passed by value to wherever output is rendered; there is no shared
/// mutable theme state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where notes are stored
    pub notes_dir: PathBuf,

    /// Color theme for rendered output
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Builds a config from optional overrides, falling back to defaults
    pub fn from_overrides(notes_dir: Option<PathBuf>, theme: Option<Theme>) -> Self {
        Config {
            notes_dir: notes_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR)),
            theme: theme.unwrap_or_default(),
        }
    }
}
