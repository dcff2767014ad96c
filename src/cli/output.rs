//! Output formatting utilities

use crate::domain::JournalRecord;

/// Format journal entries for display, one line per entry in save order
pub fn format_entry_list(entries: &[JournalRecord]) -> String {
    if entries.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let part = if entry.body_part.is_empty() {
            "-"
        } else {
            entry.body_part.as_str()
        };

        output.push_str(&format!(
            "{}  {}/5  {}",
            entry.date.format("%Y-%m-%d"),
            entry.pain_score,
            part
        ));
        if !entry.note.is_empty() {
            output.push_str(&format!("  {}", entry.note));
        }
        output.push('\n');
    }
    output
}

/// Format catalog body parts for display
pub fn format_part_list(parts: &[String]) -> String {
    if parts.is_empty() {
        return "No body parts found in the catalog".to_string();
    }

    let mut output = String::new();
    for part in parts {
        output.push_str(part);
        output.push('\n');
    }
    output
}
