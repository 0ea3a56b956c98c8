//! On-disk shapes of a lexicon.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Root,
    Affix,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Root => "root",
            Self::Affix => "affix",
        })
    }
}

/// One numbered root or affix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub index: u64,
    /// The consonant form written in Slot III or in an affix.
    pub cs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

/// A JSONL line: an entry that says which table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEntry {
    pub kind: EntryKind,
    #[serde(flatten)]
    pub entry: LexiconEntry,
}

/// A whole lexicon as one JSON or TOML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub roots: Vec<LexiconEntry>,
    #[serde(default)]
    pub affixes: Vec<LexiconEntry>,
}
