//! Output formatting utilities

use crate::application::WeekReport;
use crate::domain::{format_week_range, EntryCategory, MoodEntry, MoodTrend};

const SNIPPET_LENGTH: usize = 40;

/// Format a flat list of mood entries for display
pub fn format_entry_list(entries: &[MoodEntry], skipped: usize) -> String {
    if entries.is_empty() && skipped == 0 {
        return "No mood entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let category = entry
            .category
            .map(|c| c.as_str())
            .unwrap_or("-");
        output.push_str(&format!(
            "{}  {:<12}  {:<8}  {}\n",
            entry.created_at.format("%d-%m-%Y %H:%M"),
            category,
            entry.mood.as_str(),
            snippet(&entry.content),
        ));
    }
    push_skipped_note(&mut output, skipped);
    output
}

/// Format the weekly report table with trends for both categories
pub fn format_week_report(report: &WeekReport) -> String {
    let mut output = format!(
        "Week of {}\n",
        format_week_range(report.week_start, report.week_end)
    );

    if report.data.is_empty() {
        output.push_str("\nNo mood entries for this week\n");
        push_skipped_note(&mut output, report.skipped);
        return output;
    }

    output.push_str("\nDay  Personal  Professional\n");
    for (index, day) in report.data.days.iter().enumerate() {
        output.push_str(&format!(
            "{}  {:>8}  {:>12}\n",
            day,
            format_slot(report.data.personal_mood[index]),
            format_slot(report.data.professional_mood[index]),
        ));
    }

    output.push('\n');
    output.push_str(&trend_line("Personal", &report.personal_trend));
    output.push_str(&trend_line("Professional", &report.professional_trend));
    push_skipped_note(&mut output, report.skipped);
    output
}

/// Format the trend summary, optionally restricted to one category
pub fn format_trend(report: &WeekReport, category: Option<EntryCategory>) -> String {
    let mut output = format!(
        "Week of {}\n\n",
        format_week_range(report.week_start, report.week_end)
    );

    match category {
        Some(EntryCategory::Personal) => {
            output.push_str(&trend_line("Personal", &report.personal_trend));
        }
        Some(EntryCategory::Professional) => {
            output.push_str(&trend_line("Professional", &report.professional_trend));
        }
        None => {
            output.push_str(&trend_line("Personal", &report.personal_trend));
            output.push_str(&trend_line("Professional", &report.professional_trend));
        }
    }
    push_skipped_note(&mut output, report.skipped);
    output
}

fn trend_line(label: &str, trend: &MoodTrend) -> String {
    format!(
        "{} trend: {} ({}) {}\n",
        label,
        trend.direction,
        format_change(trend.change),
        trend.direction.emoji()
    )
}

fn format_change(change: f64) -> String {
    if change == 0.0 {
        "0.0".to_string()
    } else if change > 0.0 {
        format!("+{:.1}", change)
    } else {
        format!("{:.1}", change)
    }
}

fn format_slot(slot: Option<f64>) -> String {
    match slot {
        Some(value) => format!("{:.1}", value),
        None => "-".to_string(),
    }
}

fn snippet(content: &str) -> String {
    if content.chars().count() > SNIPPET_LENGTH {
        let cut: String = content.chars().take(SNIPPET_LENGTH).collect();
        format!("{}...", cut.trim_end())
    } else {
        content.to_string()
    }
}

fn push_skipped_note(output: &mut String, skipped: usize) {
    if skipped > 0 {
        let noun = if skipped == 1 { "marker" } else { "markers" };
        output.push_str(&format!(
            "\nSkipped {} mood {} without a section timestamp\n",
            skipped, noun
        ));
    }
}
