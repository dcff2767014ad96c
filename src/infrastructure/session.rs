//! Rotation session persistence

use crate::domain::RotationState;
use crate::error::Result;
use std::fs;
use std::path::Path;

fn session_path(root: &Path) -> std::path::PathBuf {
    root.join(".bodylog").join("session.toml")
}

/// Load the rotation memory from .bodylog/session.toml.
/// A missing file reads as a fresh state.
pub fn load_session(root: &Path) -> Result<RotationState> {
    let path = session_path(root);

    if !path.exists() {
        return Ok(RotationState::default());
    }

    let contents = fs::read_to_string(&path)?;
    Ok(toml::from_str(&contents)?)
}

/// Save the rotation memory to .bodylog/session.toml
pub fn save_session(root: &Path, state: &RotationState) -> Result<()> {
    let bodylog_dir = root.join(".bodylog");

    if !bodylog_dir.exists() {
        fs::create_dir(&bodylog_dir)?;
    }

    let contents = toml::to_string_pretty(state)?;
    fs::write(session_path(root), contents)?;

    Ok(())
}
