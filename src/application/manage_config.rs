//! Config management use case

use crate::error::{BodylogError, Result};
use crate::infrastructure::{BodylogRepository, Config, FileSystemRepository};

const VALID_KEYS: &str = "videos_file, journal_file, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Load the full configuration
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }

    /// Get a single config value by key
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "videos_file" => Ok(config.videos_file),
            "journal_file" => Ok(config.journal_file),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value by key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "videos_file" => config.videos_file = value.to_string(),
            "journal_file" => config.journal_file = value.to_string(),
            "created" => {
                return Err(BodylogError::Config(
                    "Config key 'created' is read-only".to_string(),
                ))
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }
}

fn unknown_key(key: &str) -> BodylogError {
    BodylogError::Config(format!(
        "Unknown config key: '{}'. Valid keys: {}",
        key, VALID_KEYS
    ))
}
