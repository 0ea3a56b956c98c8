//! Affixes: a vowel and a consonant, in either order.
//!
//! Four kinds share the slot. Ordinary affixes index the 3×10 vowel table
//! by type and degree; Ca affixes wrap a whole Ca-complex behind `üö`;
//! referential affixes write a referent list behind a Series 4 vowel;
//! case-accessor and case-stacking affixes write a case vowel in front of a
//! reserved consonant.

use crate::ca::{Ca, Perspective, ca_to_slot_form, is_geminated, parse_ca};
use crate::category::{Case, case_from_vowel, case_vowel};
use crate::error::{IthkuilError, Result};
use crate::lexicon::{Consonant, Lexicon};
use crate::phonotactics::CONSONANTS;
use crate::referent::{Referent, ReferentForm, parse_referent_list, referent_list_to_ithkuil};
use crate::vowel_form::VowelForm;
use crate::wy::WithWyAlternative;
use serde::{Deserialize, Serialize};

numeric_enum! {
    pub enum AffixType {
        One = 1,
        Two = 2,
        Three = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Affix {
    Standard {
        #[serde(rename = "type")]
        kind: AffixType,
        degree: u8,
        cs: Consonant,
    },
    Ca {
        ca: Ca,
    },
    Referential {
        referents: Vec<Referent>,
        #[serde(default)]
        perspective: Perspective,
        case: Case,
    },
    CaseAccessor {
        case: Case,
        #[serde(rename = "type")]
        kind: AffixType,
        #[serde(default, rename = "isInverse")]
        is_inverse: bool,
    },
    CaseStacking {
        case: Case,
    },
}

impl Affix {
    pub fn standard(kind: AffixType, degree: u8, cs: &str) -> Self {
        Self::Standard {
            kind,
            degree,
            cs: Consonant::from(cs),
        }
    }
}

const ACCESSOR_HEADS: [&str; 3] = ["s", "z", "č"];
const INVERSE_ACCESSOR_HEADS: [&str; 3] = ["š", "ž", "j"];
const STACKING_HEAD: &str = "l";
const PERSPECTIVE_SUFFIX: [&str; 4] = ["", "ļ", "ç", "x"];

/// Placement of one affix within a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffixOptions {
    /// Write consonant then vowel (Slot V of an unshortened formative).
    pub reversed: bool,
    pub glottal_stop: bool,
}

/// Whether `cs` is set aside for another kind of affix or for Cn.
pub fn is_reserved_consonant(cs: &str) -> bool {
    cs.starts_with('h')
        || cs == "w"
        || cs == "y"
        || parse_case_accessor_consonant(cs).is_some()
        || is_geminated(cs)
}

fn accessor_consonant(head: &str, case: Case) -> String {
    let glide = if case.is_offset() { 'y' } else { 'w' };
    format!("{head}{glide}")
}

/// `(type, is_inverse, is_offset)` for a case-accessor consonant; a type of
/// `None` marks case stacking.
fn parse_case_accessor_consonant(cs: &str) -> Option<(Option<AffixType>, bool, bool)> {
    let is_offset = match cs.chars().last()? {
        'w' => false,
        'y' => true,
        _ => return None,
    };
    let head = &cs[..cs.len() - 1];
    if head == STACKING_HEAD {
        return Some((None, false, is_offset));
    }
    let position = |heads: &[&str; 3]| heads.iter().position(|&h| h == head);
    if let Some(index) = position(&ACCESSOR_HEADS) {
        return Some((AffixType::ALL.get(index).copied(), false, is_offset));
    }
    position(&INVERSE_ACCESSOR_HEADS)
        .map(|index| (AffixType::ALL.get(index).copied(), true, is_offset))
}

fn check_degree(degree: u8) -> Result<()> {
    if degree > 9 {
        return Err(IthkuilError::invalid(
            "affix degree",
            format!("{degree} is outside 0-9"),
        ));
    }
    Ok(())
}

fn check_standard_consonant(cs: &str) -> Result<()> {
    if cs.is_empty() || !cs.chars().all(|c| CONSONANTS.contains(c)) {
        return Err(IthkuilError::invalid(
            "affix cs",
            format!("`{cs}` is not a consonant cluster"),
        ));
    }
    if is_reserved_consonant(cs) {
        return Err(IthkuilError::invalid(
            "affix cs",
            format!("`{cs}` is reserved for another kind of affix"),
        ));
    }
    Ok(())
}

/// The vowel and consonant of an affix.
pub fn affix_parts(affix: &Affix, lexicon: &dyn Lexicon) -> Result<(VowelForm, String)> {
    match affix {
        Affix::Standard { kind, degree, cs } => {
            check_degree(*degree)?;
            let cs = cs.resolve_affix(lexicon)?;
            check_standard_consonant(&cs)?;
            Ok((VowelForm::new(kind.value(), *degree), cs))
        }
        Affix::Ca { ca } => Ok((VowelForm::new(4, 0), ca_to_slot_form(ca))),
        Affix::Referential {
            referents,
            perspective,
            case,
        } => {
            if case.index() >= 9 {
                return Err(IthkuilError::invalid(
                    "referential affix case",
                    format!("{case} is not one of THM through IND"),
                ));
            }
            let cluster = referent_list_to_ithkuil(referents, ReferentForm::Affix)?;
            Ok((
                VowelForm::new(4, case.index() as u8 + 1),
                format!("{cluster}{}", PERSPECTIVE_SUFFIX[perspective.index()]),
            ))
        }
        Affix::CaseAccessor {
            case,
            kind,
            is_inverse,
        } => {
            let heads = if *is_inverse {
                &INVERSE_ACCESSOR_HEADS
            } else {
                &ACCESSOR_HEADS
            };
            let head = heads[usize::from(kind.value()) - 1];
            Ok((case_vowel(*case), accessor_consonant(head, *case)))
        }
        Affix::CaseStacking { case } => {
            Ok((case_vowel(*case), accessor_consonant(STACKING_HEAD, *case)))
        }
    }
}

/// Writes an affix. The vowel keeps its W/Y alternatives when it comes
/// first; when reversed it is resolved against its own consonant.
pub fn affix_to_ithkuil(
    affix: &Affix,
    options: AffixOptions,
    lexicon: &dyn Lexicon,
) -> Result<WithWyAlternative> {
    let (vowel, cs) = affix_parts(affix, lexicon)?;
    let vowel = vowel.with_glottal_stop(options.glottal_stop).to_wy(false);
    if options.reversed {
        Ok(WithWyAlternative::after(&cs, &vowel))
    } else {
        Ok(&vowel + &WithWyAlternative::of(cs))
    }
}

/// Reads an affix from its vowel and consonant.
pub fn parse_affix(vowel: VowelForm, cs: &str) -> Result<Affix> {
    if vowel.sequence == 4 && vowel.degree == 0 {
        return Ok(Affix::Ca { ca: parse_ca(cs)? });
    }

    if let Some((kind, is_inverse, is_offset)) = parse_case_accessor_consonant(cs) {
        let case = case_from_vowel(vowel, is_offset)?;
        return Ok(match kind {
            Some(kind) => Affix::CaseAccessor {
                case,
                kind,
                is_inverse,
            },
            None => Affix::CaseStacking { case },
        });
    }

    if vowel.sequence == 4 {
        let (cluster, perspective) = split_perspective_suffix(cs);
        let case = Case::from_index(usize::from(vowel.degree) - 1)
            .ok_or_else(|| IthkuilError::malformed("affix", "referential vowel"))?;
        return Ok(Affix::Referential {
            referents: parse_referent_list(cluster, ReferentForm::Affix)?,
            perspective,
            case,
        });
    }

    if is_reserved_consonant(cs) {
        return Err(IthkuilError::InvalidConsonantForm {
            slot: "affix",
            value: cs.to_string(),
        });
    }
    let kind = AffixType::try_from(vowel.sequence)?;
    Ok(Affix::Standard {
        kind,
        degree: vowel.degree,
        cs: Consonant::from(cs),
    })
}

fn split_perspective_suffix(cs: &str) -> (&str, Perspective) {
    for (index, suffix) in PERSPECTIVE_SUFFIX.iter().enumerate().skip(1) {
        if let Some(cluster) = cs.strip_suffix(suffix)
            && let Some(perspective) = Perspective::from_index(index)
        {
            return (cluster, perspective);
        }
    }
    (cs, Perspective::M)
}
