//! Error types for bodylog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the bodylog application
#[derive(Debug, Error)]
pub enum BodylogError {
    #[error("Not a bodylog directory: {0}")]
    NotBodylogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Unknown body part: {0}")]
    UnknownPart(String),

    #[error("Nothing to record: pick a body part, set a pain score, or write a note")]
    EmptyEntry,

    #[error("Pain score must be between 0 and 5, got {0}")]
    InvalidPainScore(u8),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Journal table error: {0}")]
    Journal(#[from] csv::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BodylogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BodylogError::NotBodylogDirectory(_) => 2,
            BodylogError::InvalidTimeReference(_) => 3,
            BodylogError::UnknownPart(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BodylogError::NotBodylogDirectory(path) => {
                format!(
                    "Not a bodylog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'bodylog init' in this directory to create a new journal\n\
                    • Navigate to an existing bodylog directory\n\
                    • Set BODYLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            BodylogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2026-01-17)\n\n\
                    Examples:\n\
                    bodylog log today --pain 3\n\
                    bodylog log yesterday --note 'stiff knee'\n\
                    bodylog log 2026-01-15 --part knee",
                    ref_str
                )
            }
            BodylogError::UnknownPart(part) => {
                format!(
                    "Unknown body part: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'bodylog parts' to see the parts in your catalog\n\
                    • Part names match catalog headings exactly (including case)\n\
                    • Add a heading line for this part to your videos file",
                    part
                )
            }
            BodylogError::EmptyEntry => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • bodylog log --part knee\n\
                    • bodylog log --pain 2\n\
                    • bodylog log --note 'slept badly, lower back tight'",
                    self
                )
            }
            BodylogError::InvalidPainScore(_) => {
                format!(
                    "{}\n\n\
                    The pain scale runs from 0 (no pain) to 5 (worst).\n\
                    Example: bodylog log --pain 3",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BodylogError
pub type Result<T> = std::result::Result<T, BodylogError>;
