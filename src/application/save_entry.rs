//! Save journal entry use case

use crate::domain::{JournalRecord, PainScore, TimeReference};
use crate::error::{BodylogError, Result};
use crate::infrastructure::{BodylogRepository, FileSystemRepository, JournalStore};
use chrono::Local;

/// Service for appending an entry to the body journal.
///
/// Holds the "record at least one thing" rule: an entry with no part, a zero
/// pain score, and an empty note is rejected here, before it reaches the
/// store.
pub struct SaveEntryService {
    repository: FileSystemRepository,
}

impl SaveEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SaveEntryService { repository }
    }

    /// Resolve the date, validate, and append the entry.
    /// Returns the record as written.
    pub fn execute(
        &self,
        time_ref_str: &str,
        body_part: Option<&str>,
        pain_score: PainScore,
        note: &str,
    ) -> Result<JournalRecord> {
        let config = self.repository.load_config()?;

        let time_ref = TimeReference::parse(time_ref_str)?;
        let date = time_ref.resolve(Local::now().date_naive());

        let body_part = body_part.unwrap_or("");
        if body_part.is_empty() && pain_score.value() == 0 && note.trim().is_empty() {
            return Err(BodylogError::EmptyEntry);
        }

        let record = JournalRecord {
            date,
            body_part: body_part.to_string(),
            pain_score,
            note: note.to_string(),
            saved_at: Local::now().naive_local(),
        };

        let store = JournalStore::new(config.journal_path(self.repository.root()));
        store.append(&record)?;

        Ok(record)
    }
}
