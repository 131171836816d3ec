//! Weekly aggregation of mood entries into per-day averages

use crate::domain::entry::{EntryCategory, MoodEntry};
use crate::domain::mood::round_to_tenth;
use crate::domain::week::{day_index, week_end, week_start, DAY_LABELS};
use chrono::{Duration, NaiveDateTime};

/// Per-day mood averages for one week, split by category.
///
/// Slots run Monday through Sunday. A day with no entries for a category is
/// `None`, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyMoodData {
    pub days: [&'static str; 7],
    pub personal_mood: [Option<f64>; 7],
    pub professional_mood: [Option<f64>; 7],
}

impl WeeklyMoodData {
    /// True when no day in either category has data.
    pub fn is_empty(&self) -> bool {
        self.personal_mood.iter().all(Option::is_none)
            && self.professional_mood.iter().all(Option::is_none)
    }

    /// The series for one category.
    pub fn mood_for(&self, category: EntryCategory) -> &[Option<f64>; 7] {
        match category {
            EntryCategory::Personal => &self.personal_mood,
            EntryCategory::Professional => &self.professional_mood,
        }
    }
}

/// Aggregate entries into the week containing `reference`.
///
/// The window is inclusive on both ends and inherits the reference's time of
/// day from [`week_start`] and [`week_end`]. Entries without a category are
/// excluded from both series; each entry contributes its mood value to the
/// day slot given by [`day_index`], and slot averages are rounded to one
/// decimal place.
pub fn weekly_mood_data(entries: &[MoodEntry], reference: NaiveDateTime) -> WeeklyMoodData {
    let start = week_start(reference);
    let end = week_end(reference);

    let mut personal: [Vec<f64>; 7] = Default::default();
    let mut professional: [Vec<f64>; 7] = Default::default();

    for entry in entries {
        if entry.created_at < start || entry.created_at > end {
            continue;
        }
        let slot = day_index(entry.created_at);
        let value = f64::from(entry.mood.value());
        match entry.category {
            Some(EntryCategory::Personal) => personal[slot].push(value),
            Some(EntryCategory::Professional) => professional[slot].push(value),
            None => {}
        }
    }

    WeeklyMoodData {
        days: DAY_LABELS,
        personal_mood: average_slots(&personal),
        professional_mood: average_slots(&professional),
    }
}

/// Aggregate the week containing `now`.
pub fn current_week_mood_data(entries: &[MoodEntry], now: NaiveDateTime) -> WeeklyMoodData {
    weekly_mood_data(entries, now)
}

/// Aggregate the week before the one containing `now`.
pub fn previous_week_mood_data(entries: &[MoodEntry], now: NaiveDateTime) -> WeeklyMoodData {
    weekly_mood_data(entries, now - Duration::days(7))
}

/// Aggregate the week after the one containing `now`.
pub fn next_week_mood_data(entries: &[MoodEntry], now: NaiveDateTime) -> WeeklyMoodData {
    weekly_mood_data(entries, now + Duration::days(7))
}

fn average_slots(buckets: &[Vec<f64>; 7]) -> [Option<f64>; 7] {
    let mut slots = [None; 7];
    for (slot, bucket) in slots.iter_mut().zip(buckets) {
        if !bucket.is_empty() {
            let mean = bucket.iter().sum::<f64>() / bucket.len() as f64;
            *slot = Some(round_to_tenth(mean));
        }
    }
    slots
}
