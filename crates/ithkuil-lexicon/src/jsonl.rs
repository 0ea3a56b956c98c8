//! JSONL storage: one entry per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::entry::TaggedEntry;
use crate::error::LexiconError;
use std::io::BufRead;

/// Read tagged entries from a JSONL reader.
pub fn read_entries(reader: impl BufRead) -> Result<Vec<TaggedEntry>, LexiconError> {
    let mut entries = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LexiconError::Line {
            line: line_no + 1,
            message: e.to_string(),
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let entry: TaggedEntry =
            serde_json::from_str(trimmed).map_err(|e| LexiconError::Line {
                line: line_no + 1,
                message: e.to_string(),
            })?;
        entries.push(entry);
    }
    Ok(entries)
}
