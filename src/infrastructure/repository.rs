//! File system repository for day notes

use crate::error::{MoodlogError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A day note file with the date parsed from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub filename: String,
    pub date: NaiveDate,
}

impl NoteEntry {
    pub fn new(filename: String, date: NaiveDate) -> Self {
        NoteEntry { filename, date }
    }
}

/// Filename of the day note for a date
pub fn filename_for_date(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

/// Date encoded in a day note filename, if the name follows the convention
pub fn date_from_filename(filename: &str) -> Option<NaiveDate> {
    let stem = filename.strip_suffix(".md")?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// Abstract repository for journal operations
pub trait MoodlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of MoodlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// The .moodlog directory inside the repository root
    pub fn moodlog_dir(&self) -> PathBuf {
        self.root.join(".moodlog")
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }
}

impl MoodlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.moodlog_dir();

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }
}

// Note operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Check if a note file exists
    pub fn note_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Read note content (returns empty string if file doesn't exist)
    pub fn read_note(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);

        if !path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(&path).map_err(MoodlogError::Io)
    }

    /// Write note content (creates if doesn't exist, overwrites if exists)
    pub fn write_note(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(MoodlogError::Io)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn note_entry_from_relative_path(rel: &Path) -> Option<NoteEntry> {
        let filename = Self::normalize_relative_path(rel)?;
        let leaf = rel.file_name()?.to_str()?;

        date_from_filename(leaf).map(|date| NoteEntry::new(filename, date))
    }

    /// List day notes, newest first, applying optional date range and limit.
    ///
    /// The whole tree below the root is scanned so notes may be organized
    /// into subdirectories; dot directories such as `.moodlog` are skipped.
    pub fn list_notes(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Vec<NoteEntry> {
        let mut notes = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(note) = Self::note_entry_from_relative_path(rel) {
                notes.push(note);
            }
        }

        if let Some(from_date) = from {
            notes.retain(|e| e.date >= from_date);
        }
        if let Some(to_date) = to {
            notes.retain(|e| e.date <= to_date);
        }

        // Newest first; same-date notes in different directories sort by name.
        notes.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.filename.cmp(&b.filename)));

        if let Some(n) = limit {
            notes.truncate(n);
        }

        notes
    }
}
