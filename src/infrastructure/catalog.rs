//! Catalog file loading and caching

use crate::domain::VideoCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Load the video catalog from a file. A missing or unreadable file reads as
/// an empty catalog rather than an error.
pub fn load_catalog(path: &Path) -> VideoCatalog {
    match fs::read_to_string(path) {
        Ok(text) => VideoCatalog::parse(text.lines()),
        Err(_) => VideoCatalog::default(),
    }
}

/// Parsed catalog keyed on the source file's modification time.
///
/// `catalog()` re-reads the file only when its mtime differs from the cached
/// one, so a long-lived caller pays for parsing once per file change.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    modified: Option<SystemTime>,
    catalog: Option<VideoCatalog>,
}

impl CatalogCache {
    pub fn new(path: PathBuf) -> Self {
        CatalogCache {
            path,
            modified: None,
            catalog: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current catalog, reparsed if the file changed since the last call
    pub fn catalog(&mut self) -> &VideoCatalog {
        let modified = fs::metadata(&self.path).and_then(|m| m.modified()).ok();

        if self.modified != modified {
            self.catalog = None;
            self.modified = modified;
        }

        self.catalog.get_or_insert_with(|| load_catalog(&self.path))
    }
}
