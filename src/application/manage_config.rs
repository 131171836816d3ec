//! Config management use case

use crate::domain::EntryCategory;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, MoodlogRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "default_category" => Ok(config.default_category.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, default_category, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "default_category" => {
                let category = EntryCategory::from_str(value).map_err(MoodlogError::Config)?;
                config.default_category = category;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, default_category",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
