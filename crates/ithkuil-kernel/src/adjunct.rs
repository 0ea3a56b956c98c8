//! Suppletive and parsing adjuncts.
//!
//! A suppletive adjunct stands in for a formative whose content is a
//! quotation, a name or a phrase, and carries only a case. A parsing
//! adjunct is a lone vowel with a glottal stop that fixes the stress of
//! the word after it.

use crate::category::{Case, case_from_vowel, case_vowel};
use crate::error::Result;
use crate::stress::{Stress, is_vowel};
use crate::vowel_form::VowelForm;
use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum SuppletiveAdjunctType {
        /// Carrier.
        Car => "CAR",
        /// Quotative.
        Quo => "QUO",
        /// Naming.
        Nam => "NAM",
        /// Phrasal.
        Phr => "PHR",
    }
}

const SUPPLETIVE_CONSONANTS: [&str; 4] = ["hl", "hm", "hn", "hň"];

impl SuppletiveAdjunctType {
    pub fn consonant(self) -> &'static str {
        SUPPLETIVE_CONSONANTS[self.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuppletiveAdjunct {
    #[serde(rename = "type")]
    pub kind: SuppletiveAdjunctType,
    #[serde(default)]
    pub case: Case,
}

pub fn suppletive_adjunct_to_ithkuil(adjunct: &SuppletiveAdjunct) -> String {
    let vowel = case_vowel(adjunct.case)
        .with_glottal_stop(adjunct.case.is_offset())
        .to_text(true);
    format!("{}{vowel}", adjunct.kind.consonant())
}

/// `Ok(None)` unless the word is one of the four consonants followed by
/// vowels only.
pub fn parse_suppletive_adjunct(word: &str) -> Result<Option<SuppletiveAdjunct>> {
    for &kind in SuppletiveAdjunctType::ALL {
        let Some(rest) = word.strip_prefix(kind.consonant()) else {
            continue;
        };
        if rest.is_empty() || !rest.chars().all(|c| is_vowel(c) || c == '\'') {
            return Ok(None);
        }
        let vowel = VowelForm::parse(rest)?;
        let case = case_from_vowel(vowel, vowel.has_glottal_stop)?;
        return Ok(Some(SuppletiveAdjunct { kind, case }));
    }
    Ok(None)
}

tag_enum! {
    /// The stress a parsing adjunct imposes on the next word.
    pub enum ParsingAdjunct {
        Monosyllabic => "monosyllabic",
        Ultimate => "ultimate",
        Penultimate => "penultimate",
        Antepenultimate => "antepenultimate",
    }
}

const PARSING_ADJUNCTS: [&str; 4] = ["a'", "e'", "o'", "u'"];

impl ParsingAdjunct {
    pub fn to_ithkuil(self) -> &'static str {
        PARSING_ADJUNCTS[self.index()]
    }

    pub fn stress(self) -> Stress {
        match self {
            Self::Monosyllabic => Stress::Monosyllabic,
            Self::Ultimate => Stress::Ultimate,
            Self::Penultimate => Stress::Penultimate,
            Self::Antepenultimate => Stress::Antepenultimate,
        }
    }
}

pub fn parse_parsing_adjunct(word: &str) -> Option<ParsingAdjunct> {
    PARSING_ADJUNCTS
        .iter()
        .position(|&adjunct| adjunct == word)
        .and_then(ParsingAdjunct::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppletive(kind: SuppletiveAdjunctType, case: Case) -> SuppletiveAdjunct {
        SuppletiveAdjunct { kind, case }
    }

    #[test]
    fn suppletive_adjuncts_write_their_case() {
        assert_eq!(
            suppletive_adjunct_to_ithkuil(&suppletive(SuppletiveAdjunctType::Car, Case::Thm)),
            "hla"
        );
        assert_eq!(
            suppletive_adjunct_to_ithkuil(&suppletive(SuppletiveAdjunctType::Quo, Case::Prn)),
            "hma'a"
        );
    }

    #[test]
    fn suppletive_adjuncts_read_back() {
        for &kind in SuppletiveAdjunctType::ALL {
            for &case in Case::ALL {
                let adjunct = suppletive(kind, case);
                let word = suppletive_adjunct_to_ithkuil(&adjunct);
                assert_eq!(parse_suppletive_adjunct(&word).unwrap(), Some(adjunct), "{word}");
            }
        }
    }

    #[test]
    fn longer_words_are_not_suppletive() {
        assert_eq!(parse_suppletive_adjunct("hlala").unwrap(), None);
        assert_eq!(parse_suppletive_adjunct("lala").unwrap(), None);
        assert_eq!(parse_suppletive_adjunct("hl").unwrap(), None);
    }

    #[test]
    fn parsing_adjuncts_mark_stress() {
        assert_eq!(parse_parsing_adjunct("e'"), Some(ParsingAdjunct::Ultimate));
        assert_eq!(ParsingAdjunct::Antepenultimate.to_ithkuil(), "u'");
        assert_eq!(ParsingAdjunct::Penultimate.stress(), Stress::Penultimate);
        assert_eq!(parse_parsing_adjunct("e"), None);
    }

    #[test]
    fn suppletive_adjuncts_serialize_with_a_type_tag() {
        let adjunct: SuppletiveAdjunct =
            serde_json::from_str(r#"{"type":"NAM","case":"ERG"}"#).unwrap();
        assert_eq!(adjunct, suppletive(SuppletiveAdjunctType::Nam, Case::Erg));
    }
}
