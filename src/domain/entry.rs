//! Mood entry model and the personal/professional category split

use crate::domain::mood::MoodLabel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Life area an entry belongs to.
///
/// Aggregation keeps the two areas in separate series; entries without a
/// category are kept but excluded from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    #[default]
    Personal,
    Professional,
}

impl EntryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryCategory::Personal => "personal",
            EntryCategory::Professional => "professional",
        }
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(EntryCategory::Personal),
            "professional" => Ok(EntryCategory::Professional),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: personal, professional",
                s
            )),
        }
    }
}

/// One mood observation parsed out of a day note.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    /// Timestamp of the section heading, on the note's date.
    pub created_at: NaiveDateTime,
    pub category: Option<EntryCategory>,
    pub mood: MoodLabel,
    /// Section prose with tags and mood markers stripped.
    pub content: String,
    pub source_file: PathBuf,
}

impl MoodEntry {
    pub fn new(
        created_at: NaiveDateTime,
        category: Option<EntryCategory>,
        mood: MoodLabel,
        content: String,
        source_file: PathBuf,
    ) -> Self {
        MoodEntry {
            created_at,
            category,
            mood,
            content,
            source_file,
        }
    }
}
