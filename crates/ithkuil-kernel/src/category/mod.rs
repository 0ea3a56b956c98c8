//! Closed grammatical categories and their vowel/consonant tables.

mod case;
mod illocution;
mod mood;
mod vn;

pub use case::{Case, case_from_vowel, case_vowel};
pub use illocution::IllocutionValidation;
pub use mood::{CaseScope, Cn, Mood, MoodOrCaseScope};
pub use vn::{Aspect, Effect, Level, Phase, Valence, Vn};

use crate::error::{IthkuilError, Result};
use crate::vowel_form::VowelForm;

tag_enum! {
    pub enum Version {
        Prc => "PRC",
        Cpt => "CPT",
    }
}

tag_enum! {
    pub enum Function {
        Sta => "STA",
        Dyn => "DYN",
    }
}

tag_enum! {
    pub enum Specification {
        Bsc => "BSC",
        Cte => "CTE",
        Csv => "CSV",
        Obj => "OBJ",
    }
}

tag_enum! {
    pub enum Context {
        Exs => "EXS",
        Fnc => "FNC",
        Rps => "RPS",
        Amg => "AMG",
    }
}

numeric_enum! {
    pub enum Stem {
        Zero = 0,
        One = 1,
        Two = 2,
        Three = 3,
    }
}

numeric_enum! {
    /// Slot I of a formative that heads a concatenation chain member.
    pub enum ConcatenationType {
        One = 1,
        Two = 2,
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::Prc
    }
}

impl Default for Function {
    fn default() -> Self {
        Self::Sta
    }
}

impl Default for Specification {
    fn default() -> Self {
        Self::Bsc
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::Exs
    }
}

impl Default for Stem {
    fn default() -> Self {
        Self::One
    }
}

/// Vv degree for each stem and version, skipping 0 and 5 which mark the
/// special roots.
const VV_DEGREES: [(Stem, Version, u8); 8] = [
    (Stem::One, Version::Prc, 1),
    (Stem::One, Version::Cpt, 2),
    (Stem::Two, Version::Prc, 3),
    (Stem::Two, Version::Cpt, 4),
    (Stem::Zero, Version::Cpt, 6),
    (Stem::Zero, Version::Prc, 7),
    (Stem::Three, Version::Cpt, 8),
    (Stem::Three, Version::Prc, 9),
];

pub fn vv_degree(stem: Stem, version: Version) -> u8 {
    VV_DEGREES
        .iter()
        .find(|(s, v, _)| *s == stem && *v == version)
        .map(|(_, _, degree)| *degree)
        .unwrap_or(1)
}

/// Inverse of [`vv_degree`]; `None` for the special-root degrees.
pub fn stem_and_version(degree: u8) -> Option<(Stem, Version)> {
    VV_DEGREES
        .iter()
        .find(|(_, _, d)| *d == degree)
        .map(|(stem, version, _)| (*stem, *version))
}

/// Vr of an ordinary root: context picks the series, function and
/// specification the degree (STA counts up from 1, DYN down from 9).
pub fn vr(function: Function, specification: Specification, context: Context) -> VowelForm {
    let offset = specification.index() as u8;
    let degree = match function {
        Function::Sta => 1 + offset,
        Function::Dyn => 9 - offset,
    };
    VowelForm::new(context.index() as u8 + 1, degree)
}

pub fn parse_vr(form: VowelForm) -> Result<(Function, Specification, Context)> {
    let context = Context::from_index(usize::from(form.sequence) - 1)
        .ok_or_else(|| IthkuilError::malformed("Vr", format!("series {}", form.sequence)))?;
    let (function, offset) = match form.degree {
        1..=4 => (Function::Sta, form.degree - 1),
        6..=9 => (Function::Dyn, 9 - form.degree),
        other => {
            return Err(IthkuilError::malformed(
                "Vr",
                format!("degree {other} does not mark function and specification"),
            ));
        }
    };
    let specification = Specification::from_index(usize::from(offset))
        .ok_or_else(|| IthkuilError::malformed("Vr", format!("degree {}", form.degree)))?;
    Ok((function, specification, context))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vv_degrees_cover_every_stem_and_version() {
        for &stem in Stem::ALL {
            for &version in Version::ALL {
                let degree = vv_degree(stem, version);
                assert_ne!(degree, 0);
                assert_ne!(degree, 5);
                assert_eq!(stem_and_version(degree), Some((stem, version)));
            }
        }
    }

    #[test]
    fn vr_round_trips() {
        for &function in Function::ALL {
            for &specification in Specification::ALL {
                for &context in Context::ALL {
                    let form = vr(function, specification, context);
                    assert_eq!(parse_vr(form).unwrap(), (function, specification, context));
                }
            }
        }
    }

    #[test]
    fn vr_of_cte_is_second_degree() {
        let form = vr(Function::Sta, Specification::Cte, Context::Exs);
        assert_eq!(form.to_text(false), "ä");
        let form = vr(Function::Sta, Specification::Bsc, Context::Fnc);
        assert_eq!(form.to_text(false), "ai");
    }

    #[test]
    fn numeric_tags_reject_out_of_range_values() {
        assert!(Stem::try_from(4).is_err());
        assert_eq!(ConcatenationType::try_from(2).unwrap(), ConcatenationType::Two);
        let stem: Stem = serde_json::from_str("2").unwrap();
        assert_eq!(stem, Stem::Two);
    }
}
