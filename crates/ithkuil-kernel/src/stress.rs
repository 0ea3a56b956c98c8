//! Syllabification and stress.
//!
//! Stress is written with an acute accent (á é í ó ú) or, on the umlauted
//! vowels, a circumflex (â ê ô û). Only one syllable may carry a mark. An
//! unmarked word of two or more syllables has penultimate stress.

use crate::error::{IthkuilError, Result};
use serde::{Deserialize, Serialize};

pub const VOWELS: &str = "aäeëiöoüu";

const DIPHTHONGS: [(char, char); 10] = [
    ('a', 'i'),
    ('a', 'u'),
    ('e', 'i'),
    ('e', 'u'),
    ('ë', 'i'),
    ('ë', 'u'),
    ('o', 'i'),
    ('o', 'u'),
    ('i', 'u'),
    ('u', 'i'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stress {
    Antepenultimate,
    Penultimate,
    Ultimate,
    Monosyllabic,
    Zerosyllabic,
}

impl Stress {
    /// Syllable offset from the end of the word, where 1 is the last.
    pub fn offset_from_end(self) -> Option<usize> {
        match self {
            Self::Ultimate | Self::Monosyllabic => Some(1),
            Self::Penultimate => Some(2),
            Self::Antepenultimate => Some(3),
            Self::Zerosyllabic => None,
        }
    }
}

/// A lowercased, canonically spelled word with stress marks removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedWord {
    pub word: String,
    pub stress: Stress,
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn unstressed(c: char) -> Option<char> {
    Some(match c {
        'á' => 'a',
        'â' => 'ä',
        'é' => 'e',
        'ê' => 'ë',
        'í' => 'i',
        'ó' => 'o',
        'ô' => 'ö',
        'ú' => 'u',
        'û' | 'ǘ' => 'ü',
        _ => return None,
    })
}

fn stressed(c: char) -> char {
    match c {
        'a' => 'á',
        'ä' => 'â',
        'e' => 'é',
        'ë' => 'ê',
        'i' => 'í',
        'o' => 'ó',
        'ö' => 'ô',
        'u' => 'ú',
        'ü' => 'û',
        other => other,
    }
}

fn canonical_letter(c: char) -> char {
    match c {
        'ṭ' | 'ŧ' | 'ț' => 'ţ',
        'ḍ' | 'đ' => 'ḑ',
        'ł' | 'ḷ' => 'ļ',
        'ż' => 'ẓ',
        'ṇ' | 'ṅ' | 'ņ' => 'ň',
        'ŗ' | 'ṛ' => 'ř',
        '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
        other => other,
    }
}

fn combine(base: char, mark: char) -> Option<char> {
    Some(match (base, mark) {
        ('a', '\u{0308}') => 'ä',
        ('e', '\u{0308}') => 'ë',
        ('o', '\u{0308}') => 'ö',
        ('u', '\u{0308}') => 'ü',
        ('t', '\u{0327}') => 'ţ',
        ('d', '\u{0327}') => 'ḑ',
        ('l', '\u{0327}') => 'ļ',
        ('c', '\u{0327}') => 'ç',
        ('s', '\u{030C}') => 'š',
        ('z', '\u{030C}') => 'ž',
        ('c', '\u{030C}') => 'č',
        ('n', '\u{030C}') => 'ň',
        ('r', '\u{030C}') => 'ř',
        _ => return None,
    })
}

/// Splits the vowels of `chars` into syllables, returning each syllable's
/// `(start, len)` in char positions.
fn syllable_spans(chars: &[char]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !is_vowel(chars[i]) {
            i += 1;
            continue;
        }
        let len = match chars.get(i + 1) {
            Some(&next) if DIPHTHONGS.contains(&(chars[i], next)) => 2,
            _ => 1,
        };
        spans.push((i, len));
        i += len;
    }
    spans
}

/// Number of syllables in an unstressed word.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    syllable_spans(&chars).len()
}

/// Lowercases, canonicalizes alternate spellings, strips a leading
/// apostrophe, and reads off the stress.
pub fn transform_word(word: &str) -> Result<TransformedWord> {
    let mut chars: Vec<char> = Vec::new();
    let mut marked: Vec<bool> = Vec::new();

    for c in word.trim().chars().flat_map(char::to_lowercase) {
        match c {
            '\u{0301}' => {
                if let Some(flag) = marked.last_mut() {
                    *flag = true;
                }
            }
            '\u{0308}' | '\u{0327}' | '\u{030C}' => {
                if let Some(last) = chars.last_mut()
                    && let Some(combined) = combine(*last, c)
                {
                    *last = combined;
                }
            }
            _ => {
                let c = canonical_letter(c);
                match unstressed(c) {
                    Some(base) => {
                        chars.push(base);
                        marked.push(true);
                    }
                    None => {
                        chars.push(c);
                        marked.push(false);
                    }
                }
            }
        }
    }

    if chars.first() == Some(&'\'') {
        chars.remove(0);
        marked.remove(0);
    }

    let spans = syllable_spans(&chars);
    let stressed_syllables: Vec<usize> = spans
        .iter()
        .enumerate()
        .filter(|(_, (start, len))| marked[*start..*start + *len].iter().any(|&m| m))
        .map(|(index, _)| index)
        .collect();

    let stress = match stressed_syllables.as_slice() {
        [] => match spans.len() {
            0 => Stress::Zerosyllabic,
            1 => Stress::Monosyllabic,
            _ => Stress::Penultimate,
        },
        [index] => match spans.len() - index {
            1 => Stress::Ultimate,
            2 => Stress::Penultimate,
            3 => Stress::Antepenultimate,
            _ => {
                return Err(IthkuilError::Stress(
                    "Stress can only occur on one of the last three syllables".to_string(),
                ));
            }
        },
        _ => {
            return Err(IthkuilError::Stress(
                "Two syllables are marked as stressed".to_string(),
            ));
        }
    };

    Ok(TransformedWord {
        word: chars.into_iter().collect(),
        stress,
    })
}

/// Marks the syllable `offset_from_end` positions from the end (1 = last)
/// of an unstressed word.
pub fn apply_stress(word: &str, offset_from_end: usize) -> Result<String> {
    let mut chars: Vec<char> = word.chars().collect();
    let spans = syllable_spans(&chars);
    if offset_from_end == 0 || offset_from_end > spans.len() {
        return Err(IthkuilError::Stress(format!(
            "cannot stress syllable {offset_from_end} from the end of `{word}`, which has {} syllables",
            spans.len()
        )));
    }
    let (start, _) = spans[spans.len() - offset_from_end];
    chars[start] = stressed(chars[start]);
    Ok(chars.into_iter().collect())
}
