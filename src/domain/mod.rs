//! Domain layer: mood scale, entries, weekly aggregation and trends

pub mod aggregate;
pub mod entry;
pub mod extract;
pub mod mood;
pub mod template;
pub mod time_ref;
pub mod trend;
pub mod week;

pub use aggregate::{
    current_week_mood_data, next_week_mood_data, previous_week_mood_data, weekly_mood_data,
    WeeklyMoodData,
};
pub use entry::{EntryCategory, MoodEntry};
pub use extract::{EntryParser, Extraction};
pub use mood::MoodLabel;
pub use template::{load_day_template, Template};
pub use time_ref::TimeReference;
pub use trend::{analyze_mood_trend, MoodTrend, TrendDirection};
pub use week::{day_index, format_week_range, week_end, week_start, DAY_LABELS};
