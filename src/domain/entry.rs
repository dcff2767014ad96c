//! Journal record model

use crate::domain::PainScore;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One saved body-journal entry.
///
/// Immutable once written; the journal table only ever grows. An empty
/// `body_part` means no part was chosen. The record itself enforces nothing;
/// the "at least one field filled in" rule is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub date: NaiveDate,
    pub body_part: String,
    pub pain_score: PainScore,
    pub note: String,
    #[serde(with = "saved_at_format")]
    pub saved_at: NaiveDateTime,
}

/// Serde codec for the saved_at column, kept in "YYYY-MM-DD HH:MM:SS" form
mod saved_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}
