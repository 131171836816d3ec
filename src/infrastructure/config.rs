//! Configuration management

use crate::domain::EntryCategory;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    /// Category applied by `log` when none is given on the command line.
    pub default_category: EntryCategory,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            default_category: EntryCategory::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
