//! List journal entries use case

use crate::domain::JournalRecord;
use crate::error::Result;
use crate::infrastructure::{BodylogRepository, FileSystemRepository, JournalStore};

/// Service for reading back saved journal entries
pub struct ListEntriesService {
    repository: FileSystemRepository,
}

impl ListEntriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListEntriesService { repository }
    }

    /// Entries in save order. With a limit, only the most recently saved
    /// entries are returned, still oldest-save first.
    pub fn execute(&self, limit: Option<usize>) -> Result<Vec<JournalRecord>> {
        let config = self.repository.load_config()?;
        let store = JournalStore::new(config.journal_path(self.repository.root()));

        let mut entries = store.load()?;

        if let Some(n) = limit {
            let skip = entries.len().saturating_sub(n);
            entries.drain(..skip);
        }

        Ok(entries)
    }
}
