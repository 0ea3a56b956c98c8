//! Formative recognition.
//!
//! A word is split into alternating consonant and vowel groups, which are
//! then read against one of two layouts: the ordinary one, or the Cc form
//! where Slots IV and VI have been folded into Slots I and II.

use super::generate::VII_SHORTCUTS;
use super::{
    CcShortcut, Formative, FormativeKind, Root, Shortcut, iv_vi_shortcut_ca, parse_cc,
    referential_essence,
};
use crate::affix::{Affix, AffixType, parse_affix};
use crate::ca::{Ca, is_geminated, parse_ca, parse_geminated_ca};
use crate::category::{
    CaseScope, Cn, ConcatenationType, Context, Function, IllocutionValidation, Mood,
    Specification, Stem, Version, Vn, case_from_vowel, parse_vr, stem_and_version,
};
use crate::error::{IthkuilError, Result};
use crate::lexicon::Consonant;
use crate::phonotactics::CONSONANTS;
use crate::referent::{ReferentForm, parse_referent_list};
use crate::stress::{Stress, is_vowel, transform_word};
use crate::vowel_form::VowelForm;

/// Reads a formative as written, stress marks included. `Ok(None)` means
/// the word does not have the shape of a formative at all.
pub fn parse_formative(word: &str) -> Result<Option<Formative>> {
    let transformed = transform_word(word)?;
    parse_formative_with_stress(&transformed.word, transformed.stress)
}

/// Reads an already transformed word under the given stress.
pub fn parse_formative_with_stress(word: &str, stress: Stress) -> Result<Option<Formative>> {
    let Some(groups) = split_groups(word) else {
        return Ok(None);
    };
    if !matches!(groups.last(), Some(Group::Vowels(_))) {
        return Ok(None);
    }

    let mut groups = groups.as_slice();
    let mut cc = None;
    if let [Group::Consonants(first), rest @ ..] = groups
        && let Some(parsed) = parse_cc(first)
    {
        cc = Some(parsed);
        groups = rest;
    }

    let (vv, root, rest) = match groups {
        [Group::Vowels(vv), Group::Consonants(root), rest @ ..] => (Some(*vv), *root, rest),
        [Group::Consonants(root), rest @ ..] if cc.is_none() => (None, *root, rest),
        _ => return Ok(None),
    };
    let texts: Vec<&str> = rest.iter().map(|group| group.text()).collect();

    let parsed = match (cc, vv) {
        (Some((concatenation_type, Some(shortcut))), Some(vv)) => {
            tracing::debug!(target: "ithkuil::formative", word, "reading Cc shortcut form");
            read_cc_form(concatenation_type, shortcut, vv, root, &texts, stress)?
        }
        (cc, vv) => {
            tracing::debug!(target: "ithkuil::formative", word, "reading ordinary form");
            read_ordinary_form(cc.and_then(|(c, _)| c), vv, root, &texts, stress)?
        }
    };
    Ok(parsed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group<'a> {
    Consonants(&'a str),
    Vowels(&'a str),
}

impl<'a> Group<'a> {
    fn new(is_vocalic: bool, text: &'a str) -> Self {
        if is_vocalic {
            Self::Vowels(text)
        } else {
            Self::Consonants(text)
        }
    }

    fn text(&self) -> &'a str {
        match self {
            Self::Consonants(text) | Self::Vowels(text) => *text,
        }
    }
}

/// Vowel groups include glottal stops. Any letter outside the alphabet
/// means the word is not a formative.
fn split_groups(word: &str) -> Option<Vec<Group<'_>>> {
    let mut groups = Vec::new();
    let mut current: Option<(bool, usize)> = None;
    for (index, c) in word.char_indices() {
        let is_vocalic = if is_vowel(c) || c == '\'' {
            true
        } else if CONSONANTS.contains(c) {
            false
        } else {
            return None;
        };
        match current {
            Some((kind, _)) if kind == is_vocalic => {}
            Some((kind, start)) => {
                groups.push(Group::new(kind, &word[start..index]));
                current = Some((is_vocalic, index));
            }
            None => current = Some((is_vocalic, index)),
        }
    }
    if let Some((kind, start)) = current {
        groups.push(Group::new(kind, &word[start..]));
    }
    Some(groups)
}

fn malformed(reason: impl Into<String>) -> IthkuilError {
    IthkuilError::malformed("formative", reason)
}

/// Glottal stops seen in Vr, affix vowels, Vn and Vc. One of them marks an
/// offset case wherever it sits.
#[derive(Debug, Default)]
struct GlottalStops {
    count: usize,
}

impl GlottalStops {
    fn take(&mut self, text: &str) -> Result<VowelForm> {
        let form = VowelForm::parse(text)?;
        if form.has_glottal_stop {
            self.count += 1;
        }
        Ok(form.with_glottal_stop(false))
    }

    fn marks_offset_case(&self) -> Result<bool> {
        match self.count {
            0 => Ok(false),
            1 => Ok(true),
            count => Err(malformed(format!(
                "only one glottal stop may follow Vv, found {count}"
            ))),
        }
    }
}

fn special_root_version(vv: VowelForm) -> Result<Version> {
    Version::from_index(usize::from(vv.sequence) - 1)
        .ok_or_else(|| malformed(format!("series {} Vv does not mark a version", vv.sequence)))
}

fn check_vv_glottal_stop(vv: VowelForm, slot_v_count: usize) -> Result<()> {
    if vv.has_glottal_stop != (slot_v_count >= 2) {
        return Err(malformed(format!(
            "a glottal stop in Vv marks two or more Slot V affixes, found {slot_v_count}"
        )));
    }
    Ok(())
}

/// Slots VII and VIII as `(vowel, consonant)` pairs. The last pair is
/// Slot VIII when its consonant is a Cn.
struct Tail {
    slot_vii: Vec<Affix>,
    slot_viii: Option<(VowelForm, Cn)>,
}

fn read_tail(pairs: &[(&str, &str)], glottal_stops: &mut GlottalStops) -> Result<Tail> {
    let (affix_pairs, slot_viii) = match pairs.split_last() {
        Some(((vowel, cn), rest)) => match Cn::parse(cn) {
            Some(cn) => (rest, Some((glottal_stops.take(vowel)?, cn))),
            None => (pairs, None),
        },
        None => (pairs, None),
    };
    let slot_vii = affix_pairs
        .iter()
        .map(|(vowel, cs)| parse_affix(glottal_stops.take(vowel)?, cs))
        .collect::<Result<Vec<_>>>()?;
    Ok(Tail {
        slot_vii,
        slot_viii,
    })
}

fn read_vn(slot_viii: Option<(VowelForm, Cn)>) -> Result<Vn> {
    match slot_viii {
        Some((vowel, cn)) => Vn::from_vowel(vowel, cn.is_aspectual),
        None => Ok(Vn::default()),
    }
}

/// Formative type and the Slot VIII/IX values, from stress and Vc.
fn read_kind(
    concatenation_type: Option<ConcatenationType>,
    stress: Stress,
    vc: &str,
    cn: Option<Cn>,
    mut glottal_stops: GlottalStops,
) -> Result<Option<FormativeKind>> {
    let vc = glottal_stops.take(vc)?;
    let glottal_stop = glottal_stops.marks_offset_case()?;
    let case_scope = || cn.map_or(Ok(CaseScope::default()), Cn::as_case_scope);

    if let Some(concatenation_type) = concatenation_type {
        if glottal_stop {
            return Err(malformed(
                "a concatenated formative marks offset cases with stress",
            ));
        }
        let is_offset = match stress {
            Stress::Penultimate | Stress::Monosyllabic => false,
            Stress::Ultimate => true,
            Stress::Antepenultimate | Stress::Zerosyllabic => {
                return Err(IthkuilError::Stress(
                    "a concatenated formative takes penultimate or ultimate stress".to_string(),
                ));
            }
        };
        return Ok(Some(FormativeKind::Nominal {
            concatenation_type: Some(concatenation_type),
            case_scope: case_scope()?,
            case: case_from_vowel(vc, is_offset)?,
        }));
    }

    let kind = match stress {
        Stress::Penultimate | Stress::Monosyllabic => FormativeKind::Nominal {
            concatenation_type: None,
            case_scope: case_scope()?,
            case: case_from_vowel(vc, glottal_stop)?,
        },
        Stress::Ultimate => {
            if glottal_stop {
                return Err(malformed("an unframed verbal formative has no glottal stop after Vv"));
            }
            FormativeKind::UnframedVerbal {
                mood: cn.map_or(Ok(Mood::default()), Cn::as_mood)?,
                illocution_validation: IllocutionValidation::from_vowel(vc)?,
            }
        }
        Stress::Antepenultimate => FormativeKind::FramedVerbal {
            case_scope: case_scope()?,
            case: case_from_vowel(vc, glottal_stop)?,
        },
        Stress::Zerosyllabic => return Ok(None),
    };
    Ok(Some(kind))
}

/// `[Vr, C1, V1, ..., Cn, Vc]` after the root.
fn read_ordinary_form(
    concatenation_type: Option<ConcatenationType>,
    vv: Option<&str>,
    root: &str,
    texts: &[&str],
    stress: Stress,
) -> Result<Option<Formative>> {
    let [vr_text, after_vr @ ..] = texts else {
        return Ok(None);
    };
    if after_vr.is_empty() {
        return Ok(None);
    }
    let pairs: Vec<(&str, &str)> = after_vr
        .chunks(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    let mut glottal_stops = GlottalStops::default();
    let vr = glottal_stops.take(vr_text)?;

    let viii_shortcut = Cn::parse_shortcut_ca(pairs[0].0);
    let (slot_v, ca, ca_index) = if viii_shortcut.is_some() {
        (Vec::new(), Ca::default(), 0)
    } else if let Some(index) = pairs.iter().position(|(c, _)| is_geminated(c)) {
        if index == 0 {
            return Err(malformed("a geminated Ca needs Slot V affixes before it"));
        }
        let slot_v = pairs[..index]
            .iter()
            .map(|(cs, vowel)| parse_affix(glottal_stops.take(vowel)?, cs))
            .collect::<Result<Vec<_>>>()?;
        (slot_v, parse_geminated_ca(pairs[index].0)?, index)
    } else {
        (Vec::new(), parse_ca(pairs[0].0)?, 0)
    };

    // Re-pair the rest as (vowel, consonant), leaving Vc on its own.
    let after_ca: Vec<(&str, &str)> = pairs[ca_index..]
        .windows(2)
        .map(|window| (window[0].1, window[1].0))
        .collect();
    let vc = pairs[pairs.len() - 1].1;

    let tail = read_tail(&after_ca, &mut glottal_stops)?;
    if viii_shortcut.is_some() && tail.slot_viii.is_some() {
        return Err(malformed("Slot VIII appears twice"));
    }
    let cn = viii_shortcut.or(tail.slot_viii.map(|(_, cn)| cn));
    let vn = read_vn(tail.slot_viii)?;
    let mut slot_vii = tail.slot_vii;

    let vv = match vv {
        Some(text) => VowelForm::parse(text)?,
        None => VowelForm::new(1, 1),
    };
    check_vv_glottal_stop(vv, slot_v.len())?;

    let mut vii_shortcut = false;
    let (root, stem, version, function, specification, context) = match vv.degree {
        0 => {
            let (function, specification, context) = parse_vr(vr)?;
            (
                Root::Referents(parse_referent_list(root, ReferentForm::Root)?),
                Stem::default(),
                special_root_version(vv)?,
                function,
                specification,
                context,
            )
        }
        5 => {
            let context = Context::from_index(usize::from(vr.sequence) - 1)
                .ok_or_else(|| malformed("Vr series out of range"))?;
            (
                Root::Affixual {
                    cs: Consonant::from(root),
                    degree: vr.degree,
                },
                Stem::default(),
                special_root_version(vv)?,
                Function::Sta,
                Specification::Bsc,
                context,
            )
        }
        degree => {
            let (stem, version) = stem_and_version(degree)
                .ok_or_else(|| malformed(format!("Vv degree {degree}")))?;
            if vv.sequence > 1 {
                let (affix_degree, cs, _) = VII_SHORTCUTS
                    .iter()
                    .find(|(_, _, series)| *series == vv.sequence)
                    .ok_or_else(|| malformed(format!("Vv series {}", vv.sequence)))?;
                slot_vii.push(Affix::standard(AffixType::One, *affix_degree, cs));
                vii_shortcut = true;
            }
            let (function, specification, context) = parse_vr(vr)?;
            (
                Root::Text(root.to_string()),
                stem,
                version,
                function,
                specification,
                context,
            )
        }
    };

    let Some(kind) = read_kind(concatenation_type, stress, vc, cn, glottal_stops)? else {
        return Ok(None);
    };

    Ok(Some(Formative {
        kind,
        root,
        version,
        stem,
        function,
        specification,
        context,
        slot_v_affixes: slot_v,
        ca,
        slot_vii_affixes: slot_vii,
        vn,
        shortcut: Shortcut::from_parts(vii_shortcut, viii_shortcut.is_some()),
    }))
}

/// `[V1, C1, ..., Vc]` after the root, with no Vr or Ca. Slot V ends at
/// the affix whose vowel carries a glottal stop.
fn read_cc_form(
    concatenation_type: Option<ConcatenationType>,
    shortcut: CcShortcut,
    vv: &str,
    root: &str,
    texts: &[&str],
    stress: Stress,
) -> Result<Option<Formative>> {
    let (vc, body) = match texts.split_last() {
        Some((vc, body)) => (*vc, body),
        None => return Ok(None),
    };
    let pairs: Vec<(&str, &str)> = body.chunks(2).map(|pair| (pair[0], pair[1])).collect();

    let marked: Vec<usize> = pairs
        .iter()
        .enumerate()
        .filter(|(_, (vowel, _))| vowel.contains('\''))
        .map(|(index, _)| index)
        .collect();
    let slot_v_len = match marked.as_slice() {
        [] => 0,
        [index] => index + 1,
        _ => return Err(malformed("more than one Slot V affix is marked as last")),
    };
    let slot_v = pairs[..slot_v_len]
        .iter()
        .map(|(vowel, cs)| {
            let form = VowelForm::parse(vowel)?.with_glottal_stop(false);
            parse_affix(form, cs)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut glottal_stops = GlottalStops::default();
    let tail = read_tail(&pairs[slot_v_len..], &mut glottal_stops)?;
    let cn = tail.slot_viii.map(|(_, cn)| cn);
    let vn = read_vn(tail.slot_viii)?;

    let vv = VowelForm::parse(vv)?;
    check_vv_glottal_stop(vv, slot_v.len())?;

    let (root, stem, version, ca) = match vv.degree {
        0 => (
            Root::Referents(parse_referent_list(root, ReferentForm::Root)?),
            Stem::default(),
            special_root_version(vv)?,
            Ca {
                essence: referential_essence(shortcut),
                ..Ca::default()
            },
        ),
        5 => return Err(malformed("an affixual root cannot take the Cc shortcut")),
        degree => {
            let (stem, version) = stem_and_version(degree)
                .ok_or_else(|| malformed(format!("Vv degree {degree}")))?;
            let ca = iv_vi_shortcut_ca(vv.sequence, shortcut)
                .ok_or_else(|| malformed(format!("Vv series {}", vv.sequence)))?;
            (Root::Text(root.to_string()), stem, version, ca)
        }
    };

    let Some(kind) = read_kind(concatenation_type, stress, vc, cn, glottal_stops)? else {
        return Ok(None);
    };

    Ok(Some(Formative {
        kind,
        root,
        version,
        stem,
        function: Function::default(),
        specification: Specification::default(),
        context: Context::default(),
        slot_v_affixes: slot_v,
        ca,
        slot_vii_affixes: tail.slot_vii,
        vn,
        shortcut: Shortcut::IvVi,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ca::{Essence, Extension, Perspective};
    use crate::category::Case;
    use crate::formative::{FormativeType, PartialFormative, formative_to_ithkuil};

    fn parse(word: &str) -> Formative {
        parse_formative(word).unwrap().unwrap()
    }

    #[test]
    fn default_nominal() {
        let formative = parse("lala");
        assert_eq!(formative.kind.formative_type(), FormativeType::Nominal);
        assert_eq!(formative.root, Root::from("l"));
        assert_eq!(formative.ca, Ca::default());
        assert_eq!(formative.shortcut, Shortcut::None);
        assert_eq!(parse("aržala").root, Root::from("rž"));
    }

    #[test]
    fn stress_picks_the_type() {
        assert_eq!(
            parse("klalá").kind,
            FormativeKind::UnframedVerbal {
                mood: Mood::Fac,
                illocution_validation: IllocutionValidation::Obs,
            }
        );
        assert_eq!(
            parse("álala").kind.formative_type(),
            FormativeType::FramedVerbal
        );
    }

    #[test]
    fn offset_cases() {
        assert_eq!(
            parse("lala'a").kind,
            FormativeKind::Nominal {
                concatenation_type: None,
                case_scope: CaseScope::Ccn,
                case: Case::Prn,
            }
        );
        assert_eq!(
            parse("halalá").kind,
            FormativeKind::Nominal {
                concatenation_type: Some(ConcatenationType::One),
                case_scope: CaseScope::Ccn,
                case: Case::Prn,
            }
        );
    }

    #[test]
    fn slot_vii_shortcut_restores_the_affix() {
        let formative = parse("ailala");
        assert_eq!(
            formative.slot_vii_affixes,
            vec![Affix::standard(AffixType::One, 4, "r")]
        );
        assert_eq!(formative.shortcut, Shortcut::Vii);
        assert_eq!(formative.version, Version::Prc);
    }

    #[test]
    fn slot_viii_shortcut_reads_the_mood() {
        let formative = parse("lahlá");
        assert_eq!(formative.shortcut, Shortcut::Viii);
        assert_eq!(formative.kind.mood_or_case_scope().index(), 1);
        assert_eq!(formative.ca, Ca::default());

        let full = parse("lalahlá");
        assert_eq!(full.shortcut, Shortcut::None);
        assert_eq!(
            full.kind,
            FormativeKind::UnframedVerbal {
                mood: Mood::Sub,
                illocution_validation: IllocutionValidation::Obs,
            }
        );
    }

    #[test]
    fn glottal_stop_after_vv_marks_an_offset_case() {
        let offset_nominal = |formative: Formative| match formative.kind {
            FormativeKind::Nominal { case, .. } => case,
            other => panic!("expected a nominal, got {other:?}"),
        };
        assert_eq!(offset_nominal(parse("la'la")), Case::Prn);
        assert_eq!(offset_nominal(parse("lala'hla")), Case::Prn);
        assert_eq!(parse("lala'hla").vn, Vn::default());
        assert_eq!(
            parse("ála'la").kind,
            FormativeKind::FramedVerbal {
                case_scope: CaseScope::Ccn,
                case: Case::Prn,
            }
        );
        assert!(parse_formative("la'la'a").is_err());
        assert!(parse_formative("la'lá").is_err());
        assert!(parse_formative("hala'lá").is_err());
    }

    #[test]
    fn cc_shortcut_carries_perspective_extension_and_essence() {
        let formative = parse("weola");
        assert_eq!(formative.shortcut, Shortcut::IvVi);
        assert_eq!(formative.stem, Stem::Two);
        assert_eq!(formative.ca.perspective, Perspective::G);
        assert_eq!(formative.ca.essence, Essence::Rpv);

        let proximal = parse("yala");
        assert_eq!(proximal.ca.extension, Extension::Prx);
        assert_eq!(proximal.ca.perspective, Perspective::M);
        assert_eq!(proximal.ca.essence, Essence::Nrm);

        let framed = parse("wálaha");
        assert_eq!(framed.kind.formative_type(), FormativeType::FramedVerbal);
        assert_eq!(framed.ca, Ca::default());
        assert_eq!(framed.vn, Vn::default());
    }

    #[test]
    fn parsed_formatives_regenerate_the_same_word() {
        for word in [
            "lala", "aržala", "klalá", "álala", "lala'a", "ailala", "lahlá", "weola", "yala",
        ] {
            let formative = parse(word);
            assert_eq!(
                formative_to_ithkuil(&PartialFormative::from(&formative)).unwrap(),
                word
            );
        }
        // The glottal stop of an offset case is written on Vc.
        assert_eq!(
            formative_to_ithkuil(&PartialFormative::from(&parse("la'la"))).unwrap(),
            "lala'a"
        );
    }

    #[test]
    fn other_shapes_are_not_formatives() {
        assert_eq!(
            parse_formative_with_stress("lal", Stress::Monosyllabic).unwrap(),
            None
        );
        assert_eq!(
            parse_formative_with_stress("la1a", Stress::Penultimate).unwrap(),
            None
        );
        assert_eq!(
            parse_formative_with_stress("la", Stress::Monosyllabic).unwrap(),
            None
        );
    }

    #[test]
    fn malformed_formatives_are_errors() {
        assert!(parse_formative("lalla").is_err());
        assert!(parse_formative("a'lala").is_err());
        assert!(parse_formative("hálala").is_err());
    }
}
