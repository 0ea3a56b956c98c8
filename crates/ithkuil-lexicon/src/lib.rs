//! # ithkuil-lexicon
//!
//! Dictionaries of numbered roots and affixes.
//!
//! This crate provides:
//! - `LexiconEntry` and `LexiconDocument` (the on-disk shapes)
//! - JSONL reading, one entry per line
//! - `LexiconStore`, which implements the kernel's `Lexicon` trait so that
//!   formatives may name roots and affixes by number
//!
//! ## Data model
//!
//! ```text
//! lexicon.json / lexicon.toml   { roots: [...], affixes: [...] }
//! lexicon.jsonl                 one {"kind": ..., "index": ..., "cs": ...} per line
//!     ↓  load
//! LexiconStore (index → entry, per kind)
//! ```

pub mod entry;
pub mod error;
pub mod jsonl;
pub mod store;

pub use entry::{EntryKind, LexiconDocument, LexiconEntry, TaggedEntry};
pub use error::LexiconError;
pub use jsonl::read_entries;
pub use store::LexiconStore;
