//! In-memory lexicon and the file loaders that fill it.

use crate::entry::{EntryKind, LexiconDocument, LexiconEntry, TaggedEntry};
use crate::error::LexiconError;
use crate::jsonl::read_entries;
use ithkuil_kernel::Lexicon;
use ithkuil_kernel::affix::is_reserved_consonant;
use ithkuil_kernel::phonotactics::CONSONANTS;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Numbered roots and affixes, each table keyed by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconStore {
    roots: BTreeMap<u64, LexiconEntry>,
    affixes: BTreeMap<u64, LexiconEntry>,
}

impl LexiconStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry. Indices are unique per table, and an affix may not
    /// use a consonant set aside for case accessors, Cn or gemination.
    pub fn insert(&mut self, kind: EntryKind, entry: LexiconEntry) -> Result<(), LexiconError> {
        validate(kind, &entry)?;
        let table = match kind {
            EntryKind::Root => &mut self.roots,
            EntryKind::Affix => &mut self.affixes,
        };
        if table.contains_key(&entry.index) {
            return Err(LexiconError::Duplicate {
                kind,
                index: entry.index,
            });
        }
        table.insert(entry.index, entry);
        Ok(())
    }

    pub fn from_document(document: LexiconDocument) -> Result<Self, LexiconError> {
        let mut store = Self::new();
        for entry in document.roots {
            store.insert(EntryKind::Root, entry)?;
        }
        for entry in document.affixes {
            store.insert(EntryKind::Affix, entry)?;
        }
        Ok(store)
    }

    pub fn from_tagged(entries: Vec<TaggedEntry>) -> Result<Self, LexiconError> {
        let mut store = Self::new();
        for TaggedEntry { kind, entry } in entries {
            store.insert(kind, entry)?;
        }
        Ok(store)
    }

    /// Loads a lexicon file, picking the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let text = fs::read_to_string(path).map_err(|e| LexiconError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let store = match extension.as_str() {
            "json" => Self::from_document(
                serde_json::from_str(&text).map_err(|e| LexiconError::Parse(e.to_string()))?,
            )?,
            "toml" => Self::from_document(
                toml::from_str(&text).map_err(|e| LexiconError::Parse(e.to_string()))?,
            )?,
            "jsonl" => Self::from_tagged(read_entries(text.as_bytes())?)?,
            _ => return Err(LexiconError::UnsupportedFormat(shown)),
        };
        tracing::debug!(
            target: "ithkuil::lexicon",
            path = %shown,
            roots = store.roots.len(),
            affixes = store.affixes.len(),
            "loaded lexicon"
        );
        Ok(store)
    }

    pub fn root(&self, index: u64) -> Option<&LexiconEntry> {
        self.roots.get(&index)
    }

    pub fn affix(&self, index: u64) -> Option<&LexiconEntry> {
        self.affixes.get(&index)
    }

    pub fn roots(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.roots.values()
    }

    pub fn affixes(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.affixes.values()
    }

    pub fn len(&self) -> usize {
        self.roots.len() + self.affixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Lexicon for LexiconStore {
    fn root_consonant(&self, index: u64) -> Option<String> {
        self.root(index).map(|entry| entry.cs.clone())
    }

    fn affix_consonant(&self, index: u64) -> Option<String> {
        self.affix(index).map(|entry| entry.cs.clone())
    }
}

fn validate(kind: EntryKind, entry: &LexiconEntry) -> Result<(), LexiconError> {
    let invalid = |reason| LexiconError::InvalidConsonant {
        kind,
        index: entry.index,
        cs: entry.cs.clone(),
        reason,
    };
    if entry.cs.is_empty() || !entry.cs.chars().all(|c| CONSONANTS.contains(c)) {
        return Err(invalid("is not a consonant form"));
    }
    if kind == EntryKind::Affix && is_reserved_consonant(&entry.cs) {
        return Err(invalid("is reserved and cannot name an affix"));
    }
    Ok(())
}
