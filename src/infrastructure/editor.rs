//! Editor integration for opening note files

use crate::error::{MoodlogError, Result};
use std::path::Path;
use std::process::Command;

/// An editor invocation, split into program and arguments up front.
///
/// The configured command is whitespace-split; an empty command falls back
/// to the platform default editor.
pub struct EditorSession {
    program: String,
    args: Vec<String>,
}

impl EditorSession {
    pub fn new(editor_command: &str) -> Self {
        let mut parts = editor_command.split_whitespace().map(String::from);

        let program = parts
            .next()
            .unwrap_or_else(|| Self::platform_default().to_string());
        let args = parts.collect();

        EditorSession { program, args }
    }

    /// Spawn the editor on `file_path` and return without waiting.
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let mut command = self.base_command();
        command.args(&self.args).arg(file_path);

        command.spawn().map_err(|e| {
            MoodlogError::Editor(format!(
                "Failed to launch editor '{}': {}",
                self.program, e
            ))
        })?;

        Ok(())
    }

    // Windows resolves .bat/.cmd editors only through the shell.
    #[cfg(windows)]
    fn base_command(&self) -> Command {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(&self.program);
        command
    }

    #[cfg(not(windows))]
    fn base_command(&self) -> Command {
        Command::new(&self.program)
    }

    fn platform_default() -> &'static str {
        if cfg!(windows) {
            "notepad"
        } else {
            "nano"
        }
    }
}
