//! Log mood entry use case

use crate::domain::{load_day_template, EntryCategory, MoodLabel};
use crate::error::Result;
use crate::infrastructure::{filename_for_date, FileSystemRepository, MoodlogRepository};
use chrono::{NaiveDate, NaiveTime};

/// Resolved input for one `log` invocation.
///
/// Date and time are resolved by the caller; the service never reads the
/// clock.
pub struct LogOptions {
    pub mood: MoodLabel,
    pub message: Option<String>,
    pub category: Option<EntryCategory>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Service for appending mood entries to day notes
pub struct LogEntryService {
    repository: FileSystemRepository,
}

impl LogEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        LogEntryService { repository }
    }

    /// Append an entry to the day note, creating the note from the template
    /// when it does not exist yet. Returns the note filename.
    pub fn execute(&self, options: &LogOptions) -> Result<String> {
        let config = self.repository.load_config()?;
        let category = options.category.unwrap_or(config.default_category);
        let filename = filename_for_date(options.date);

        let mut content = self.repository.read_note(&filename)?;
        if content.is_empty() {
            let template = load_day_template(&self.repository.moodlog_dir())?;
            content = template.render(options.date);
        }

        let block = Self::entry_block(
            options.time,
            category,
            options.message.as_deref(),
            &options.mood,
        );

        let mut updated = content.trim_end().to_string();
        if !updated.is_empty() {
            updated.push_str("\n\n");
        }
        updated.push_str(&block);
        updated.push('\n');

        self.repository.write_note(&filename, &updated)?;
        Ok(filename)
    }

    /// Markdown block for one entry. Without a message the marker rides on
    /// the heading so the section still parses as a mood entry.
    fn entry_block(
        time: NaiveTime,
        category: EntryCategory,
        message: Option<&str>,
        mood: &MoodLabel,
    ) -> String {
        let heading = format!("## {} #{}", time.format("%H:%M"), category);
        match message {
            Some(message) if !message.trim().is_empty() => {
                format!("{}\n\n{} @mood({})", heading, message.trim(), mood)
            }
            _ => format!("{} @mood({})", heading, mood),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryParser;
    use crate::infrastructure::Config;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        repo
    }

    fn options(mood: &str, message: Option<&str>, category: Option<EntryCategory>) -> LogOptions {
        LogOptions {
            mood: MoodLabel::parse(mood),
            message: message.map(String::from),
            category,
            date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_log_creates_note_from_template() {
        let temp = TempDir::new().unwrap();
        let repo = setup_repo(&temp);
        let service = LogEntryService::new(repo.clone());

        let filename = service
            .execute(&options("calm", Some("Slept well"), None))
            .unwrap();

        assert_eq!(filename, "2025-06-04.md");
        let content = repo.read_note(&filename).unwrap();
        assert!(content.starts_with("# 04-06-2025"));
        assert!(content.contains("## 08:30 #personal"));
        assert!(content.contains("Slept well @mood(calm)"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_log_appends_to_existing_note() {
        let temp = TempDir::new().unwrap();
        let repo = setup_repo(&temp);
        let service = LogEntryService::new(repo.clone());

        service
            .execute(&options("calm", Some("Slept well"), None))
            .unwrap();

        let mut second = options("anxious", Some("Big meeting"), None);
        second.time = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        service.execute(&second).unwrap();

        let content = repo.read_note("2025-06-04.md").unwrap();
        assert!(content.contains("## 08:30 #personal"));
        assert!(content.contains("## 14:00 #personal"));
        assert!(content.contains("Slept well @mood(calm)"));
        assert!(content.contains("Big meeting @mood(anxious)"));
    }

    #[test]
    fn test_log_uses_configured_default_category() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let mut config = Config::new();
        config.default_category = EntryCategory::Professional;
        repo.save_config(&config).unwrap();

        let service = LogEntryService::new(repo.clone());
        service.execute(&options("neutral", None, None)).unwrap();

        let content = repo.read_note("2025-06-04.md").unwrap();
        assert!(content.contains("#professional"));
    }

    #[test]
    fn test_log_explicit_category_overrides_default() {
        let temp = TempDir::new().unwrap();
        let repo = setup_repo(&temp);
        let service = LogEntryService::new(repo.clone());

        service
            .execute(&options(
                "happy",
                Some("Shipped it"),
                Some(EntryCategory::Professional),
            ))
            .unwrap();

        let content = repo.read_note("2025-06-04.md").unwrap();
        assert!(content.contains("## 08:30 #professional"));
    }

    #[test]
    fn test_log_without_message_puts_marker_on_heading() {
        let temp = TempDir::new().unwrap();
        let repo = setup_repo(&temp);
        let service = LogEntryService::new(repo.clone());

        service.execute(&options("excited", None, None)).unwrap();

        let content = repo.read_note("2025-06-04.md").unwrap();
        assert!(content.contains("## 08:30 #personal @mood(excited)"));
    }

    #[test]
    fn test_logged_entries_round_trip_through_parser() {
        let temp = TempDir::new().unwrap();
        let repo = setup_repo(&temp);
        let service = LogEntryService::new(repo.clone());

        service
            .execute(&options("calm", Some("Slept well"), None))
            .unwrap();
        let mut second = options(
            "anxious",
            Some("Big meeting"),
            Some(EntryCategory::Professional),
        );
        second.time = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        service.execute(&second).unwrap();

        let content = repo.read_note("2025-06-04.md").unwrap();
        let extraction = EntryParser::extract_from_markdown(
            &content,
            Path::new("2025-06-04.md"),
            NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
        );

        assert_eq!(extraction.skipped, 0);
        assert_eq!(extraction.entries.len(), 2);
        assert_eq!(extraction.entries[0].mood, MoodLabel::Calm);
        assert_eq!(extraction.entries[0].content, "Slept well");
        assert_eq!(
            extraction.entries[1].category,
            Some(EntryCategory::Professional)
        );
    }
}
