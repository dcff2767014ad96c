//! Configuration management

use crate::error::{BodylogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_VIDEOS_FILE: &str = "videos.txt";
const DEFAULT_JOURNAL_FILE: &str = "body_log.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog of body parts and stretching video links, relative to the root
    pub videos_file: String,
    /// CSV journal table, relative to the root
    pub journal_file: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default file locations
    pub fn new() -> Self {
        Config {
            videos_file: DEFAULT_VIDEOS_FILE.to_string(),
            journal_file: DEFAULT_JOURNAL_FILE.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .bodylog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".bodylog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BodylogError::NotBodylogDirectory(path.to_path_buf())
            } else {
                BodylogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BodylogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .bodylog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let bodylog_dir = path.join(".bodylog");

        if !bodylog_dir.exists() {
            fs::create_dir(&bodylog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BodylogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(bodylog_dir.join("config.toml"), contents)?;

        Ok(())
    }

    /// Full path to the video catalog file
    pub fn videos_path(&self, root: &Path) -> PathBuf {
        root.join(&self.videos_file)
    }

    /// Full path to the journal table file
    pub fn journal_path(&self, root: &Path) -> PathBuf {
        root.join(&self.journal_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.videos_file, "videos.txt");
        assert_eq!(config.journal_file, "body_log.csv");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".bodylog").exists());
        assert!(temp.path().join(".bodylog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.videos_file, config.videos_file);
        assert_eq!(loaded.journal_file, config.journal_file);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            BodylogError::NotBodylogDirectory(_) => {}
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_paths_join_root() {
        let config = Config::new();
        let root = Path::new("/journal");
        assert_eq!(config.videos_path(root), Path::new("/journal/videos.txt"));
        assert_eq!(
            config.journal_path(root),
            Path::new("/journal/body_log.csv")
        );
    }
}
