//! Append-only CSV journal store

use crate::domain::JournalRecord;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// CSV-backed journal table with columns
/// `date, body_part, pain_score, note, saved_at`.
///
/// The store persists whatever it is given; field validation happens before a
/// record reaches it. Appends are read-modify-write with no locking: the file
/// is read in full, the new row added, and the whole table rewritten. A
/// single writer at a time is assumed, and a failed rewrite has no recovery
/// path.
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn new(path: PathBuf) -> Self {
        JournalStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record, creating the table if it does not exist yet.
    /// Prior rows are rewritten unmodified, in their original order.
    pub fn append(&self, record: &JournalRecord) -> Result<()> {
        let mut rows = self.load()?;
        rows.push(record.clone());
        self.write_all(&rows)
    }

    /// Read all rows in save order. A missing table reads as empty.
    pub fn load(&self) -> Result<Vec<JournalRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    fn write_all(&self, rows: &[JournalRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
