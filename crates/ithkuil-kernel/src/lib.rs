//! # Ithkuil Kernel
//!
//! The morphology codec: structured grammatical descriptions in, romanized
//! words out, and back again.
//!
//! Everything here is a pure function over fixed tables. Dictionaries of
//! numbered roots and affixes are reached only through the [`Lexicon`]
//! trait, so the kernel itself does no I/O.
//!
//! ## Architecture
//!
//! ```text
//! phonotactics, stress      ← Which clusters are legal; where stress falls
//!     │
//! VowelForm, WithWyAlternative ← The vowel table and its w/y spellings
//!     │
//! category, Ca, referent    ← Grammatical categories and their forms
//!     │
//! affix                     ← Slot V / VII affixes
//!     │
//! formative                 ← Ten-slot assembly and recognition
//!     │
//! word                      ← Formatives and adjuncts; running text
//! ```

#[macro_use]
mod macros;

pub mod adjunct;
pub mod affix;
pub mod ca;
pub mod category;
pub mod error;
pub mod formative;
pub mod lexicon;
pub mod phonotactics;
pub mod referent;
pub mod stress;
pub mod vowel_form;
pub mod word;
pub mod wy;

pub use adjunct::{ParsingAdjunct, SuppletiveAdjunct, SuppletiveAdjunctType};
pub use affix::{Affix, AffixType};
pub use ca::{Affiliation, Ca, Configuration, Essence, Extension, Perspective};
pub use category::{
    Case, CaseScope, ConcatenationType, Context, Function, IllocutionValidation, Mood,
    Specification, Stem, Version, Vn,
};
pub use error::{IthkuilError, Result};
pub use formative::{
    Formative, FormativeKind, FormativeType, PartialFormative, Root, Shortcut, fill_defaults,
    formative_to_ithkuil, formative_to_ithkuil_with, parse_formative,
    parse_formative_with_stress,
};
pub use lexicon::{Consonant, EmptyLexicon, Lexicon};
pub use referent::Referent;
pub use stress::{Stress, transform_word};
pub use vowel_form::VowelForm;
pub use word::{
    PartialWord, Word, WordOutcome, parse_sentence, parse_word, word_to_ithkuil,
    word_to_ithkuil_with,
};
pub use wy::WithWyAlternative;
