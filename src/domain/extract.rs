//! Markdown day note parsing into mood entries

use crate::domain::entry::{EntryCategory, MoodEntry};
use crate::domain::mood::MoodLabel;
use chrono::{NaiveDate, NaiveTime};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"#([a-zA-Z0-9_-]+)").unwrap())
}

fn mood_marker_regex() -> &'static Regex {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKER_REGEX.get_or_init(|| Regex::new(r"@mood\(([^)]*)\)").unwrap())
}

fn heading_time_regex() -> &'static Regex {
    static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
    TIME_REGEX.get_or_init(|| Regex::new(r"\b([01]?\d|2[0-3]):([0-5]\d)\b").unwrap())
}

/// Result of scanning one note.
///
/// `skipped` counts mood markers that could not be anchored to a section
/// timestamp and were therefore left out of `entries`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    pub entries: Vec<MoodEntry>,
    pub skipped: usize,
}

/// Parses day notes written as time-headed markdown sections.
///
/// A section opens with a heading carrying a 24-hour `HH:MM` timestamp and
/// optional hashtags, and runs until the next heading. The first `@mood(...)`
/// marker in the heading or body makes the section a mood entry.
pub struct EntryParser;

impl EntryParser {
    pub fn extract_from_markdown(
        content: &str,
        source_file: &Path,
        note_date: NaiveDate,
    ) -> Extraction {
        let mut extraction = Extraction::default();
        let mut section = Section::preamble();

        let parser = Parser::new(content);
        let mut in_heading = false;
        let mut in_paragraph = false;
        let mut heading_text = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::Heading { .. }) => {
                    in_heading = true;
                    heading_text.clear();
                }
                Event::End(TagEnd::Heading(_)) => {
                    in_heading = false;
                    section.close_into(&mut extraction, source_file, note_date);
                    section = Section::headed(heading_text.clone());
                }
                Event::Start(Tag::Paragraph) => {
                    in_paragraph = true;
                }
                Event::End(TagEnd::Paragraph) => {
                    in_paragraph = false;
                    section.body.push('\n');
                }
                Event::Text(text) => {
                    if in_heading {
                        heading_text.push_str(&text);
                    } else if in_paragraph {
                        section.body.push_str(&text);
                    }
                }
                Event::Code(code) => {
                    if in_paragraph {
                        section.body.push('`');
                        section.body.push_str(&code);
                        section.body.push('`');
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if in_paragraph {
                        section.body.push(' ');
                    }
                }
                _ => {}
            }
        }
        section.close_into(&mut extraction, source_file, note_date);

        extraction
    }
}

struct Section {
    heading: Option<String>,
    body: String,
}

impl Section {
    /// Text before the first heading; it can never carry a timestamp.
    fn preamble() -> Self {
        Section {
            heading: None,
            body: String::new(),
        }
    }

    fn headed(heading: String) -> Self {
        Section {
            heading: Some(heading),
            body: String::new(),
        }
    }

    /// First mood marker label, checking the heading before the body.
    fn mood_label(&self) -> Option<String> {
        self.heading
            .as_deref()
            .and_then(find_mood_marker)
            .or_else(|| find_mood_marker(&self.body))
    }

    fn close_into(&self, extraction: &mut Extraction, source_file: &Path, note_date: NaiveDate) {
        let label = match self.mood_label() {
            Some(label) => label,
            None => return,
        };

        let time = self.heading.as_deref().and_then(find_heading_time);
        let time = match time {
            Some(time) => time,
            None => {
                extraction.skipped += 1;
                return;
            }
        };

        let category = self
            .heading
            .as_deref()
            .map(extract_tags)
            .unwrap_or_default()
            .iter()
            .find_map(|tag| EntryCategory::from_str(tag).ok());

        extraction.entries.push(MoodEntry::new(
            note_date.and_time(time),
            category,
            MoodLabel::parse(&label),
            clean_content(&self.body),
            source_file.to_path_buf(),
        ));
    }
}

fn find_mood_marker(text: &str) -> Option<String> {
    mood_marker_regex()
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

fn find_heading_time(heading: &str) -> Option<NaiveTime> {
    let caps = heading_time_regex().captures(heading)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn extract_tags(text: &str) -> Vec<String> {
    tag_regex()
        .captures_iter(text)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

fn clean_content(body: &str) -> String {
    let without_markers = mood_marker_regex().replace_all(body, "");
    let without_tags = tag_regex().replace_all(&without_markers, "");
    without_tags.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn note_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn extract(content: &str) -> Extraction {
        EntryParser::extract_from_markdown(content, &PathBuf::from("2025-06-04.md"), note_date())
    }

    #[test]
    fn test_extracts_full_entry() {
        let content = "## 08:30 #professional\n\nBig deadline today @mood(anxious)\n";
        let extraction = extract(content);
        assert_eq!(extraction.skipped, 0);
        assert_eq!(extraction.entries.len(), 1);

        let entry = &extraction.entries[0];
        assert_eq!(
            entry.created_at,
            note_date().and_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(entry.category, Some(EntryCategory::Professional));
        assert_eq!(entry.mood, MoodLabel::Anxious);
        assert_eq!(entry.content, "Big deadline today");
        assert_eq!(entry.source_file, PathBuf::from("2025-06-04.md"));
    }

    #[test]
    fn test_marker_in_heading() {
        let content = "## 21:15 #personal @mood(calm)\n\nWound down with a book\n";
        let extraction = extract(content);
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].mood, MoodLabel::Calm);
        assert_eq!(extraction.entries[0].content, "Wound down with a book");
    }

    #[test]
    fn test_section_without_marker_is_not_an_entry() {
        let content = "## 12:00 #personal\n\nLunch, nothing notable\n";
        let extraction = extract(content);
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn test_marker_without_heading_time_is_skipped() {
        let content = "## Morning thoughts\n\nRestless night @mood(anxious)\n";
        let extraction = extract(content);
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_marker_before_first_heading_is_skipped() {
        let content = "Woke up feeling off @mood(sad)\n\n## 09:00 #personal\n\nBetter now @mood(calm)\n";
        let extraction = extract(content);
        assert_eq!(extraction.skipped, 1);
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].mood, MoodLabel::Calm);
    }

    #[test]
    fn test_multiple_sections_yield_multiple_entries() {
        let content = "# 2025-06-04\n\n## 08:30 #professional\n\nStandup ran long @mood(neutral)\n\n## 13:00 #personal\n\nWalk in the park @mood(happy)\n\n## 22:00 #personal\n\nTired @mood(sad)\n";
        let extraction = extract(content);
        assert_eq!(extraction.entries.len(), 3);
        assert_eq!(extraction.entries[0].mood, MoodLabel::Neutral);
        assert_eq!(extraction.entries[1].mood, MoodLabel::Happy);
        assert_eq!(extraction.entries[2].mood, MoodLabel::Sad);
        assert_eq!(
            extraction.entries[2].created_at,
            note_date().and_hms_opt(22, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_first_category_tag_wins() {
        let content = "## 10:00 #professional #personal\n\nContext switching @mood(anxious)\n";
        let extraction = extract(content);
        assert_eq!(
            extraction.entries[0].category,
            Some(EntryCategory::Professional)
        );
    }

    #[test]
    fn test_topic_tags_do_not_set_a_category() {
        let content = "## 10:00 #running #health\n\nMorning run @mood(excited)\n";
        let extraction = extract(content);
        assert_eq!(extraction.entries[0].category, None);
    }

    #[test]
    fn test_category_tag_after_topic_tag() {
        let content = "## 10:00 #running #personal\n\nMorning run @mood(excited)\n";
        let extraction = extract(content);
        assert_eq!(
            extraction.entries[0].category,
            Some(EntryCategory::Personal)
        );
    }

    #[test]
    fn test_unrecognized_mood_label_is_preserved() {
        let content = "## 10:00 #personal\n\nHard to say @mood(grumpy)\n";
        let extraction = extract(content);
        let entry = &extraction.entries[0];
        assert_eq!(entry.mood, MoodLabel::Unrecognized("grumpy".to_string()));
        assert_eq!(entry.mood.value(), 5);
    }

    #[test]
    fn test_first_marker_wins() {
        let content = "## 10:00 #personal\n\nUp and down @mood(happy) then @mood(sad)\n";
        let extraction = extract(content);
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].mood, MoodLabel::Happy);
    }

    #[test]
    fn test_content_strips_tags_and_markers() {
        let content = "## 10:00 #personal\n\nCoffee with #friends and `cargo fix` @mood(happy)\n";
        let extraction = extract(content);
        let entry = &extraction.entries[0];
        assert!(!entry.content.contains("@mood"));
        assert!(!entry.content.contains('#'));
        assert!(entry.content.contains("`cargo fix`"));
        assert!(entry.content.contains("Coffee with"));
    }

    #[test]
    fn test_single_digit_hour_parses() {
        let content = "## 8:05 #personal\n\nEarly start @mood(neutral)\n";
        let extraction = extract(content);
        assert_eq!(
            extraction.entries[0].created_at,
            note_date().and_hms_opt(8, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_time_is_skipped() {
        let content = "## 25:99 #personal\n\nClock is broken @mood(sad)\n";
        let extraction = extract(content);
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_entry_with_empty_body_is_valid() {
        let content = "## 07:45 #professional @mood(neutral)\n";
        let extraction = extract(content);
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].content, "");
    }

    #[test]
    fn test_soft_broken_lines_join_with_spaces() {
        let content = "## 10:00 #personal\n\nFirst line\nsecond line @mood(calm)\n";
        let extraction = extract(content);
        assert_eq!(extraction.entries[0].content, "First line second line");
    }

    #[test]
    fn test_empty_document() {
        let extraction = extract("");
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.skipped, 0);
    }
}
