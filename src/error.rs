//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidTimeReference(_) => 3,
            MoodlogError::UnknownMood(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    moodlog log calm --date yesterday\n\
                    moodlog week last monday\n\
                    moodlog 17-01-2025",
                    ref_str
                )
            }
            MoodlogError::UnknownMood(label) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods (worst to best):\n\
                    • sad, anxious, neutral, calm, happy, excited\n\n\
                    Examples:\n\
                    moodlog log happy\n\
                    moodlog log anxious -c professional -m \"release day\"",
                    label
                )
            }
            MoodlogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodlog config editor 'vim'\n\
                    • Try a different editor: moodlog config editor 'notepad'",
                    msg
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("Invalid category") {
                    format!(
                        "{}\n\n\
                        Valid categories: personal, professional\n\
                        Example: moodlog log happy -c professional",
                        msg
                    )
                } else if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY or YYYY-MM-DD\n\
                        Example: moodlog list --from 13-01-2025 --to 19-01-2025",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
