//! List mood entries use case

use crate::domain::{EntryParser, MoodEntry};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;
use std::path::Path;

/// Flat listing of entries across day notes.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryListing {
    pub entries: Vec<MoodEntry>,
    /// Mood markers that had no section timestamp and were left out.
    pub skipped: usize,
}

/// Service for listing mood entries
pub struct ListEntriesService {
    repository: FileSystemRepository,
}

impl ListEntriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListEntriesService { repository }
    }

    /// Collect entries from all day notes in the range, newest first.
    /// The limit applies to entries, not notes.
    pub fn execute(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<EntryListing> {
        let notes = self.repository.list_notes(from, to, None);

        let mut entries = Vec::new();
        let mut skipped = 0;
        for note in &notes {
            let content = self.repository.read_note(&note.filename)?;
            let extraction =
                EntryParser::extract_from_markdown(&content, Path::new(&note.filename), note.date);
            entries.extend(extraction.entries);
            skipped += extraction.skipped;
        }

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(n) = limit {
            entries.truncate(n);
        }

        Ok(EntryListing { entries, skipped })
    }
}
