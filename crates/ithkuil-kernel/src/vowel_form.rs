//! The standard vowel table.
//!
//! Every vocalic slot (Vv, Vr, Vx, Vn, Vc, Vk) is written with one cell of
//! a 4×10 table: four series, degrees 0 through 9. Series 3 cells carry a
//! second spelling used after `w` or `y`; both spellings parse to the same
//! cell.

use crate::error::{IthkuilError, Result};
use crate::wy::WithWyAlternative;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

struct Cell {
    default_value: &'static str,
    value_after_w: &'static str,
    value_after_y: &'static str,
}

const fn plain(text: &'static str) -> Cell {
    Cell {
        default_value: text,
        value_after_w: text,
        value_after_y: text,
    }
}

const fn after_y(text: &'static str, alternative: &'static str) -> Cell {
    Cell {
        default_value: text,
        value_after_w: text,
        value_after_y: alternative,
    }
}

const fn after_w(text: &'static str, alternative: &'static str) -> Cell {
    Cell {
        default_value: text,
        value_after_w: alternative,
        value_after_y: text,
    }
}

#[rustfmt::skip]
const TABLE: [[Cell; 10]; 4] = [
    [
        plain("ae"), plain("a"), plain("ä"), plain("e"), plain("i"),
        plain("ëi"), plain("ö"), plain("o"), plain("ü"), plain("u"),
    ],
    [
        plain("ea"), plain("ai"), plain("au"), plain("ei"), plain("eu"),
        plain("ëu"), plain("ou"), plain("oi"), plain("iu"), plain("ui"),
    ],
    [
        plain("üo"), after_y("ia", "uä"), after_y("ie", "uë"), after_y("io", "üä"),
        after_y("iö", "üë"), plain("eë"), after_w("uö", "öë"), after_w("uo", "öä"),
        after_w("ue", "ië"), after_w("ua", "iä"),
    ],
    [
        plain("üö"), plain("ao"), plain("aö"), plain("eo"), plain("eö"),
        plain("oë"), plain("öe"), plain("oe"), plain("öa"), plain("oa"),
    ],
];

fn lookup() -> &'static HashMap<&'static str, (u8, u8)> {
    static MAP: OnceLock<HashMap<&'static str, (u8, u8)>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map = HashMap::new();
        for (series, row) in TABLE.iter().enumerate() {
            for (degree, cell) in row.iter().enumerate() {
                let key = (series as u8 + 1, degree as u8);
                map.insert(cell.default_value, key);
                map.insert(cell.value_after_w, key);
                map.insert(cell.value_after_y, key);
            }
        }
        map
    })
}

/// One cell of the vowel table, optionally followed by a glottal stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VowelForm {
    /// Series, 1 through 4.
    pub sequence: u8,
    /// Degree, 0 through 9.
    pub degree: u8,
    pub has_glottal_stop: bool,
}

impl VowelForm {
    pub fn new(sequence: u8, degree: u8) -> Self {
        debug_assert!((1..=4).contains(&sequence) && degree <= 9);
        Self {
            sequence,
            degree,
            has_glottal_stop: false,
        }
    }

    pub fn with_glottal_stop(self, has_glottal_stop: bool) -> Self {
        Self {
            has_glottal_stop,
            ..self
        }
    }

    /// Recognizes a surface vowel string. Apostrophes mark a glottal stop
    /// wherever they appear; a word-final `a'a` is the single vowel `a`
    /// with its glottal stop moved inside.
    pub fn of(text: &str) -> Option<Self> {
        let has_glottal_stop = text.contains('\'');
        let bare: String = text.chars().filter(|&c| c != '\'').collect();
        let mut chars = bare.chars();
        let collapsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if a == b => a.to_string(),
            _ => bare,
        };
        lookup()
            .get(collapsed.as_str())
            .map(|&(sequence, degree)| Self {
                sequence,
                degree,
                has_glottal_stop,
            })
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::of(text).ok_or_else(|| IthkuilError::InvalidVowelForm(text.to_string()))
    }

    fn cell(&self) -> &'static Cell {
        &TABLE[usize::from(self.sequence - 1)][usize::from(self.degree)]
    }

    /// All three spellings, with the glottal stop placed for the position.
    pub fn to_wy(&self, is_at_end_of_word: bool) -> WithWyAlternative {
        let cell = self.cell();
        let base = WithWyAlternative::new(cell.default_value, cell.value_after_w, cell.value_after_y);
        if self.has_glottal_stop {
            insert_glottal_stop_into_wy(&base, is_at_end_of_word)
        } else {
            base
        }
    }

    /// The default spelling.
    pub fn to_text(&self, is_at_end_of_word: bool) -> String {
        self.to_wy(is_at_end_of_word).default_value
    }
}

/// Adds a glottal stop to a vowel. Inside a word it follows the vowel;
/// word-finally it moves between the vowel's letters, doubling a lone vowel.
pub fn insert_glottal_stop(text: &str, is_at_end_of_word: bool) -> String {
    if text.is_empty() || text.contains('\'') {
        return text.to_string();
    }
    if !is_at_end_of_word {
        return format!("{text}'");
    }
    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        [single] => format!("{single}'{single}"),
        [first, rest @ ..] => format!("{first}'{}", rest.iter().collect::<String>()),
        [] => String::new(),
    }
}

pub fn insert_glottal_stop_into_wy(
    value: &WithWyAlternative,
    is_at_end_of_word: bool,
) -> WithWyAlternative {
    value.map(|text| insert_glottal_stop(text, is_at_end_of_word))
}
