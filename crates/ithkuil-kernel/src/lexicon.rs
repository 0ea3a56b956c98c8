//! Root and affix dictionaries, seen from the codec.
//!
//! Roots and affixes may be given by dictionary number instead of by
//! consonant form. The codec only needs the number-to-consonant mapping;
//! loading and storing dictionaries lives outside the kernel.

use crate::error::{IthkuilError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number-to-consonant lookups for roots and affixes.
pub trait Lexicon {
    fn root_consonant(&self, index: u64) -> Option<String>;
    fn affix_consonant(&self, index: u64) -> Option<String>;
}

/// A lexicon with no entries; numbered roots and affixes fail to resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLexicon;

impl Lexicon for EmptyLexicon {
    fn root_consonant(&self, _index: u64) -> Option<String> {
        None
    }

    fn affix_consonant(&self, _index: u64) -> Option<String> {
        None
    }
}

/// A consonant form written out, or a dictionary number standing for one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Consonant {
    Text(String),
    Numeric(u64),
}

impl Consonant {
    pub fn resolve_root(&self, lexicon: &dyn Lexicon) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Numeric(index) => lexicon
                .root_consonant(*index)
                .ok_or_else(|| IthkuilError::Lexicon(format!("no root numbered {index}"))),
        }
    }

    pub fn resolve_affix(&self, lexicon: &dyn Lexicon) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Numeric(index) => lexicon
                .affix_consonant(*index)
                .ok_or_else(|| IthkuilError::Lexicon(format!("no affix numbered {index}"))),
        }
    }
}

impl From<&str> for Consonant {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Numeric(index) => write!(f, "#{index}"),
        }
    }
}
