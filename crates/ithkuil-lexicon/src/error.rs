use crate::entry::EntryKind;

/// Errors from loading or assembling a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("{path}: I/O error: {message}")]
    Io { path: String, message: String },

    #[error("line {line}: parse error: {message}")]
    Line { line: usize, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported lexicon format `{0}` (expected .json, .jsonl or .toml)")]
    UnsupportedFormat(String),

    #[error("{kind} {index} is defined twice")]
    Duplicate { kind: EntryKind, index: u64 },

    #[error("{kind} {index}: `{cs}` {reason}")]
    InvalidConsonant {
        kind: EntryKind,
        index: u64,
        cs: String,
        reason: &'static str,
    },
}
