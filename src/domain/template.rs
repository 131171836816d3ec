//! Day note templates and placeholder rendering

use crate::domain::week::{format_week_range, week_end, week_start};
use crate::error::{MoodlogError, Result};
use chrono::{NaiveDate, NaiveTime};
use std::fs;
use std::path::Path;

const DAY_TEMPLATE: &str = "# {DATE}\n\n";

/// Override location, relative to the `.moodlog` directory.
const DAY_TEMPLATE_FILE: &str = "templates/day.md";

/// A day note template.
///
/// Supported placeholders: `{DATE}` (DD-MM-YYYY), `{ISO_DATE}` (YYYY-MM-DD),
/// `{YEAR}`, `{MONTH}` (full month name), `{DAY_NAME}` (full weekday name)
/// and `{WEEK_RANGE}` (the Monday-Sunday label of the containing week).
/// Unknown placeholders are left untouched.
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    pub fn builtin() -> Self {
        Template {
            content: DAY_TEMPLATE.to_string(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MoodlogError::Template(format!("Cannot read template '{}': {}", path.display(), e))
        })?;
        Ok(Template { content })
    }

    pub fn render(&self, date: NaiveDate) -> String {
        let reference = date.and_time(NaiveTime::MIN);
        self.content
            .replace("{DATE}", &date.format("%d-%m-%Y").to_string())
            .replace("{ISO_DATE}", &date.format("%Y-%m-%d").to_string())
            .replace("{YEAR}", &date.format("%Y").to_string())
            .replace("{MONTH}", &date.format("%B").to_string())
            .replace("{DAY_NAME}", &date.format("%A").to_string())
            .replace(
                "{WEEK_RANGE}",
                &format_week_range(week_start(reference), week_end(reference)),
            )
    }
}

/// The day template, preferring an override under `templates/day.md` in the
/// `.moodlog` directory.
pub fn load_day_template(moodlog_dir: &Path) -> Result<Template> {
    let override_path = moodlog_dir.join(DAY_TEMPLATE_FILE);
    if override_path.is_file() {
        Template::from_file(&override_path)
    } else {
        Ok(Template::builtin())
    }
}
