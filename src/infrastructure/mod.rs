//! Infrastructure layer: file system, configuration, editor

pub mod config;
pub mod editor;
pub mod repository;

pub use config::Config;
pub use editor::EditorSession;
pub use repository::{
    date_from_filename, filename_for_date, FileSystemRepository, MoodlogRepository, NoteEntry,
};
