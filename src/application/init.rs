//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{BodylogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new body journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized bodylog journal at {}", path.display());
    println!(
        "Add body-part headings and video links to {} to get suggestions",
        config.videos_file
    );

    Ok(())
}
