//! Natural-language time references for targeting day notes

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A reference to a day, relative or absolute.
///
/// Relative references resolve against a base date supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// The named weekday in the current week, or today if it matches.
    Weekday(Weekday),
    /// The most recent occurrence strictly before the base date.
    LastWeekday(Weekday),
    /// The next occurrence strictly after the base date.
    NextWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a reference such as "today", "last friday", "mon" or a date.
    ///
    /// Dates are accepted as DD-MM-YYYY or YYYY-MM-DD. Weekday names may be
    /// full or three-letter.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(name) = normalized.strip_prefix("last ") {
            if let Ok(day) = name.trim().parse::<Weekday>() {
                return Ok(TimeReference::LastWeekday(day));
            }
        }
        if let Some(name) = normalized.strip_prefix("next ") {
            if let Ok(day) = name.trim().parse::<Weekday>() {
                return Ok(TimeReference::NextWeekday(day));
            }
        }
        if let Ok(day) = normalized.parse::<Weekday>() {
            return Ok(TimeReference::Weekday(day));
        }

        if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%d-%m-%Y") {
            return Ok(TimeReference::SpecificDate(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
            return Ok(TimeReference::SpecificDate(date));
        }

        Err(MoodlogError::InvalidTimeReference(input.to_string()))
    }

    /// Resolve to a concrete date relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Tomorrow => today + Duration::days(1),
            TimeReference::Weekday(day) => today - Duration::days(days_since(today, *day)),
            TimeReference::LastWeekday(day) => {
                let back = days_since(today, *day);
                today - Duration::days(if back == 0 { 7 } else { back })
            }
            TimeReference::NextWeekday(day) => {
                let ahead = days_until(today, *day);
                today + Duration::days(if ahead == 0 { 7 } else { ahead })
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Days back to the most recent `target`, zero when `base` already is one.
fn days_since(base: NaiveDate, target: Weekday) -> i64 {
    let base_index = base.weekday().num_days_from_monday() as i64;
    let target_index = target.num_days_from_monday() as i64;
    (base_index - target_index).rem_euclid(7)
}

/// Days forward to the next `target`, zero when `base` already is one.
fn days_until(base: NaiveDate, target: Weekday) -> i64 {
    let base_index = base.weekday().num_days_from_monday() as i64;
    let target_index = target.num_days_from_monday() as i64;
    (target_index - base_index).rem_euclid(7)
}
