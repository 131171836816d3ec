//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_entries;
pub mod log_entry;
pub mod manage_config;
pub mod mood_report;
pub mod open_note;

pub use list_entries::{EntryListing, ListEntriesService};
pub use log_entry::{LogEntryService, LogOptions};
pub use manage_config::ConfigService;
pub use mood_report::{WeekReport, WeekReportService, WeekSelect};
pub use open_note::OpenNoteService;
