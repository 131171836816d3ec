//! Monday-based week boundaries and the week range label

use chrono::{Datelike, Duration, NaiveDateTime};

/// Day labels in week order, Monday first.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Monday of the week containing `reference`.
///
/// The reference's time of day is preserved, so the result is Monday at the
/// same clock time, not Monday midnight. A Sunday reference maps back to the
/// preceding Monday.
pub fn week_start(reference: NaiveDateTime) -> NaiveDateTime {
    let days_back = i64::from(reference.weekday().num_days_from_monday());
    reference - Duration::days(days_back)
}

/// Sunday of the week containing `reference`, six days after [`week_start`].
///
/// Carries the same time of day as the reference, matching `week_start`.
pub fn week_end(reference: NaiveDateTime) -> NaiveDateTime {
    week_start(reference) + Duration::days(6)
}

/// Slot of a timestamp within the week arrays: Monday is 0, Sunday is 6.
pub fn day_index(timestamp: NaiveDateTime) -> usize {
    timestamp.weekday().num_days_from_monday() as usize
}

/// Human-readable week range such as "Jun 3 - Jun 9".
///
/// The year is never shown, even when the week straddles a year boundary.
pub fn format_week_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}
