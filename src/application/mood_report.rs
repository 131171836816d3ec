//! Weekly mood report use case

use crate::domain::{
    analyze_mood_trend, current_week_mood_data, next_week_mood_data, previous_week_mood_data,
    week_end, week_start, EntryParser, MoodEntry, MoodTrend, WeeklyMoodData,
};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::Path;

/// Which week to report, relative to the reference timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSelect {
    Current,
    Previous,
    Next,
}

/// Aggregated week with trends for both categories.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    pub data: WeeklyMoodData,
    pub personal_trend: MoodTrend,
    pub professional_trend: MoodTrend,
    /// Mood markers in the scanned notes that had no section timestamp.
    pub skipped: usize,
}

/// Service producing weekly mood reports
pub struct WeekReportService {
    repository: FileSystemRepository,
}

impl WeekReportService {
    pub fn new(repository: FileSystemRepository) -> Self {
        WeekReportService { repository }
    }

    /// Aggregate the selected week around `now` and analyze both trends.
    pub fn execute(&self, now: NaiveDateTime, select: WeekSelect) -> Result<WeekReport> {
        let reference = match select {
            WeekSelect::Current => now,
            WeekSelect::Previous => now - Duration::days(7),
            WeekSelect::Next => now + Duration::days(7),
        };
        let start = week_start(reference);
        let end = week_end(reference);

        let (entries, skipped) = self.collect_entries(start.date(), end.date())?;

        let data = match select {
            WeekSelect::Current => current_week_mood_data(&entries, now),
            WeekSelect::Previous => previous_week_mood_data(&entries, now),
            WeekSelect::Next => next_week_mood_data(&entries, now),
        };

        let personal_trend = analyze_mood_trend(&data.personal_mood);
        let professional_trend = analyze_mood_trend(&data.professional_mood);

        Ok(WeekReport {
            week_start: start,
            week_end: end,
            data,
            personal_trend,
            professional_trend,
            skipped,
        })
    }

    fn collect_entries(&self, from: NaiveDate, to: NaiveDate) -> Result<(Vec<MoodEntry>, usize)> {
        let notes = self.repository.list_notes(Some(from), Some(to), None);

        let mut entries = Vec::new();
        let mut skipped = 0;
        for note in &notes {
            let content = self.repository.read_note(&note.filename)?;
            let extraction =
                EntryParser::extract_from_markdown(&content, Path::new(&note.filename), note.date);
            entries.extend(extraction.entries);
            skipped += extraction.skipped;
        }

        Ok((entries, skipped))
    }
}
