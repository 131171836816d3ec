//! Open day note use case

use crate::domain::{load_day_template, TimeReference};
use crate::error::Result;
use crate::infrastructure::{
    filename_for_date, EditorSession, FileSystemRepository, MoodlogRepository,
};
use chrono::NaiveDate;

/// Service for opening day notes in an editor
pub struct OpenNoteService {
    repository: FileSystemRepository,
}

impl OpenNoteService {
    /// Create a new open note service
    pub fn new(repository: FileSystemRepository) -> Self {
        OpenNoteService { repository }
    }

    /// Resolve time reference to a note filename, creating the note if
    /// needed. Opens the file in the editor only when `open_in_editor` is
    /// true. `today` anchors relative references.
    pub fn execute(
        &self,
        time_ref_str: &str,
        today: NaiveDate,
        open_in_editor: bool,
    ) -> Result<String> {
        // Loading config first doubles as the initialized-journal check.
        let config = self.repository.load_config()?;

        let time_ref = TimeReference::parse(time_ref_str)?;
        let date = time_ref.resolve(today);
        let filename = filename_for_date(date);

        if !self.repository.note_exists(&filename) {
            let template = load_day_template(&self.repository.moodlog_dir())?;
            self.repository.write_note(&filename, &template.render(date))?;
        }

        if open_in_editor {
            let editor = EditorSession::new(&config.get_editor());
            editor.open(&self.repository.root().join(&filename))?;
        }

        Ok(filename)
    }
}
