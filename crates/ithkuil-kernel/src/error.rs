//! Error types for Ithkuil kernel operations.

/// Errors arising from malformed structured input or undecodable words.
///
/// A word that simply does not look like a formative is *not* an error:
/// parsers return `Ok(None)` for that case. These variants are reserved for
/// input that is recognizably shaped but carries an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IthkuilError {
    /// A tag string does not name a member of the enumeration.
    #[error("unknown {kind} `{value}`")]
    UnknownTag { kind: &'static str, value: String },

    /// A field holds a value that is legal on its own but not in this word.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A requested shortcut cannot compress this formative.
    #[error("shortcut {shortcut} is not applicable: {reason}")]
    InvalidShortcut { shortcut: String, reason: String },

    /// A surface vowel string is not a recognized vowel form.
    #[error("Invalid vowel form: `{0}`")]
    InvalidVowelForm(String),

    /// A surface consonant string is not a recognized morpheme.
    #[error("invalid {slot} form `{value}`")]
    InvalidConsonantForm { slot: &'static str, value: String },

    /// Stress marks are missing, duplicated, or misplaced.
    #[error("stress error: {0}")]
    Stress(String),

    /// A root or affix index could not be resolved through the lexicon.
    #[error("unresolved lexicon reference: {0}")]
    Lexicon(String),

    /// The word matched a grammar but a captured slot is undecodable.
    #[error("malformed {kind}: {reason}")]
    Malformed { kind: &'static str, reason: String },
}

impl IthkuilError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = IthkuilError> = std::result::Result<T, E>;
