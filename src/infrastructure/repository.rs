//! File system repository

use crate::error::{BodylogError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal workspace operations
pub trait BodylogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .bodylog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .bodylog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .bodylog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .bodylog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of BodylogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the journal root: BODYLOG_ROOT if set, otherwise walk up
    /// from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BODYLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_bodylog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(BodylogError::Config(format!(
                "BODYLOG_ROOT is set to '{}' but no .bodylog directory found. \
                Run 'bodylog init' in that directory or unset BODYLOG_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_bodylog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BodylogError::NotBodylogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_bodylog_dir(path: &Path) -> bool {
        path.join(".bodylog").is_dir()
    }
}

impl BodylogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_bodylog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let bodylog_dir = self.root.join(".bodylog");

        if bodylog_dir.exists() {
            return Err(BodylogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&bodylog_dir)?;
        Ok(())
    }
}
