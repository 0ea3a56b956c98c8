//! Whole words and running text.
//!
//! A word is a formative or one of the adjuncts that travel with
//! formatives. Parsing tries the adjunct shapes first since they are
//! short and unambiguous.

use crate::adjunct::{
    ParsingAdjunct, SuppletiveAdjunct, parse_parsing_adjunct, parse_suppletive_adjunct,
    suppletive_adjunct_to_ithkuil,
};
use crate::error::Result;
use crate::formative::{
    Formative, PartialFormative, formative_to_ithkuil_with, parse_formative_with_stress,
};
use crate::lexicon::{EmptyLexicon, Lexicon};
use crate::stress::{Stress, transform_word};
use serde::{Deserialize, Serialize};

/// A word to generate. Formatives may leave most fields out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartialWord {
    Formative(PartialFormative),
    Suppletive(SuppletiveAdjunct),
    Parsing(ParsingAdjunct),
}

/// A parsed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Word {
    Formative(Formative),
    Suppletive(SuppletiveAdjunct),
    Parsing(ParsingAdjunct),
}

impl From<&Word> for PartialWord {
    fn from(word: &Word) -> Self {
        match word {
            Word::Formative(formative) => Self::Formative(PartialFormative::from(formative)),
            Word::Suppletive(adjunct) => Self::Suppletive(*adjunct),
            Word::Parsing(adjunct) => Self::Parsing(*adjunct),
        }
    }
}

pub fn word_to_ithkuil(word: &PartialWord) -> Result<String> {
    word_to_ithkuil_with(word, &EmptyLexicon)
}

pub fn word_to_ithkuil_with(word: &PartialWord, lexicon: &dyn Lexicon) -> Result<String> {
    match word {
        PartialWord::Formative(formative) => formative_to_ithkuil_with(formative, lexicon),
        PartialWord::Suppletive(adjunct) => Ok(suppletive_adjunct_to_ithkuil(adjunct)),
        PartialWord::Parsing(adjunct) => Ok(adjunct.to_ithkuil().to_string()),
    }
}

/// Reads one word as written. `Ok(None)` when no word shape matches.
pub fn parse_word(word: &str) -> Result<Option<Word>> {
    let transformed = transform_word(word)?;
    parse_transformed_word(&transformed.word, transformed.stress)
}

fn parse_transformed_word(word: &str, stress: Stress) -> Result<Option<Word>> {
    if let Some(adjunct) = parse_parsing_adjunct(word) {
        return Ok(Some(Word::Parsing(adjunct)));
    }
    if let Some(adjunct) = parse_suppletive_adjunct(word)? {
        return Ok(Some(Word::Suppletive(adjunct)));
    }
    Ok(parse_formative_with_stress(word, stress)?.map(Word::Formative))
}

/// What became of one word of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOutcome {
    pub word: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WordOutcome {
    fn parsed(word: &str, value: Word) -> Self {
        Self {
            word: word.to_string(),
            ok: true,
            value: Some(value),
            reason: None,
        }
    }

    fn failed(word: &str, reason: impl Into<String>) -> Self {
        Self {
            word: word.to_string(),
            ok: false,
            value: None,
            reason: Some(reason.into()),
        }
    }
}

const SENTENCE_PUNCTUATION: [char; 9] = ['.', ',', ';', ':', '!', '?', '"', '(', ')'];

/// Parses every word of a text. A failed word is reported in place and
/// does not stop the rest. A parsing adjunct sets the stress of the word
/// after it, overriding any mark that word carries.
pub fn parse_sentence(text: &str) -> Vec<WordOutcome> {
    let mut outcomes = Vec::new();
    let mut forced_stress: Option<Stress> = None;

    for word in text
        .split(|c: char| c.is_whitespace() || SENTENCE_PUNCTUATION.contains(&c))
        .filter(|word| !word.is_empty())
    {
        let forced = forced_stress.take();
        let result = transform_word(word).and_then(|transformed| {
            parse_transformed_word(&transformed.word, forced.unwrap_or(transformed.stress))
        });
        let outcome = match result {
            Ok(Some(value)) => {
                if let Word::Parsing(adjunct) = &value {
                    forced_stress = Some(adjunct.stress());
                }
                WordOutcome::parsed(word, value)
            }
            Ok(None) => WordOutcome::failed(word, "not a recognized word"),
            Err(error) => {
                tracing::debug!(target: "ithkuil::sentence", word, %error, "word failed to parse");
                WordOutcome::failed(word, error.to_string())
            }
        };
        outcomes.push(outcome);
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjunct::SuppletiveAdjunctType;
    use crate::category::Case;
    use crate::formative::FormativeType;

    #[test]
    fn partial_words_deserialize_by_shape() {
        let formative: PartialWord = serde_json::from_str(r#"{"type":"UNF/C","root":"l"}"#).unwrap();
        assert!(matches!(formative, PartialWord::Formative(_)));
        let suppletive: PartialWord = serde_json::from_str(r#"{"type":"CAR","case":"ERG"}"#).unwrap();
        assert_eq!(
            suppletive,
            PartialWord::Suppletive(SuppletiveAdjunct {
                kind: SuppletiveAdjunctType::Car,
                case: Case::Erg,
            })
        );
        let parsing: PartialWord = serde_json::from_str(r#""ultimate""#).unwrap();
        assert_eq!(parsing, PartialWord::Parsing(ParsingAdjunct::Ultimate));
    }

    #[test]
    fn words_generate_by_kind() {
        let formative = PartialWord::Formative(PartialFormative::new(FormativeType::Nominal, "l"));
        assert_eq!(word_to_ithkuil(&formative).unwrap(), "lala");
        assert_eq!(
            word_to_ithkuil(&PartialWord::Parsing(ParsingAdjunct::Monosyllabic)).unwrap(),
            "a'"
        );
    }

    #[test]
    fn adjuncts_are_tried_before_formatives() {
        assert!(matches!(parse_word("hla").unwrap(), Some(Word::Suppletive(_))));
        assert!(matches!(parse_word("o'").unwrap(), Some(Word::Parsing(_))));
        assert!(matches!(parse_word("lala").unwrap(), Some(Word::Formative(_))));
        assert_eq!(parse_word("lal").unwrap(), None);
    }

    #[test]
    fn one_bad_word_does_not_stop_a_sentence() {
        let outcomes = parse_sentence("lala, lalla (hla) xyz.");
        let words: Vec<&str> = outcomes.iter().map(|o| o.word.as_str()).collect();
        assert_eq!(words, ["lala", "lalla", "hla", "xyz"]);
        let ok: Vec<bool> = outcomes.iter().map(|o| o.ok).collect();
        assert_eq!(ok, [true, false, true, false]);
        assert_eq!(outcomes[3].reason.as_deref(), Some("not a recognized word"));
    }

    #[test]
    fn parsing_adjuncts_set_the_next_stress() {
        let outcomes = parse_sentence("e' lala lala");
        let kinds: Vec<Option<FormativeType>> = outcomes
            .iter()
            .map(|outcome| match &outcome.value {
                Some(Word::Formative(formative)) => Some(formative.kind.formative_type()),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            [
                None,
                Some(FormativeType::UnframedVerbal),
                Some(FormativeType::Nominal)
            ]
        );
    }
}
