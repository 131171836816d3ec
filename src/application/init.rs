//! Initialize mood journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, MoodlogRepository};
use std::fs;
use std::path::Path;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized mood journal at {}", path.display());
    println!("Default category: {}", config.default_category);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_moodlog_dir_and_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("journal");

        init(&target).unwrap();

        assert!(target.join(".moodlog").is_dir());
        assert!(target.join(".moodlog/config.toml").is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();

        assert!(init(temp.path()).is_err());
    }
}
