//! Formative assembly.
//!
//! Slots are computed in dependency order, not surface order: the root
//! shape and the shortcut plan come first because Slots I, II, IV and VI all
//! depend on them. Each slot is held as a [`WithWyAlternative`] so that a
//! vowel can still react to the consonant that ends up in front of it.

use super::{
    CcShortcut, Formative, FormativeKind, PartialFormative, Root, cc_to_ithkuil, fill_defaults,
    iv_vi_shortcut_for, referential_cc,
};
use crate::affix::{Affix, AffixOptions, AffixType, affix_to_ithkuil};
use crate::ca::{Ca, ca_to_slot_form, geminated_ca_to_ithkuil};
use crate::category::{
    Context, Function, MoodOrCaseScope, Specification, Version, Vn, case_vowel, vr, vv_degree,
};
use crate::error::{IthkuilError, Result};
use crate::lexicon::{Consonant, EmptyLexicon, Lexicon};
use crate::phonotactics::{CONSONANTS, is_legal_word_initial_consonant_form};
use crate::referent::{ReferentForm, referent_list_to_ithkuil};
use crate::stress::{Stress, apply_stress, count_syllables};
use crate::vowel_form::VowelForm;
use crate::wy::WithWyAlternative;

/// Writes a formative, resolving numbered roots and affixes through no
/// dictionary at all.
pub fn formative_to_ithkuil(partial: &PartialFormative) -> Result<String> {
    formative_to_ithkuil_with(partial, &EmptyLexicon)
}

pub fn formative_to_ithkuil_with(partial: &PartialFormative, lexicon: &dyn Lexicon) -> Result<String> {
    let formative = fill_defaults(partial)?;
    generate_formative(&formative, lexicon)
}

/// Slot VII affixes that Slot II can absorb, as `(degree, cs, Vv series)`.
/// All are type 1.
pub(super) const VII_SHORTCUTS: [(u8, &str, u8); 3] = [(4, "r", 2), (4, "t", 3), (5, "t", 4)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootShape {
    Plain,
    Affixual { degree: u8 },
    Referential,
}

fn check_root_text(text: &str) -> Result<()> {
    if text.is_empty() || !text.chars().all(|c| CONSONANTS.contains(c)) {
        return Err(IthkuilError::invalid(
            "root",
            format!("`{text}` is not a consonant cluster"),
        ));
    }
    Ok(())
}

fn resolve_root(formative: &Formative, lexicon: &dyn Lexicon) -> Result<(String, RootShape)> {
    let resolved = match &formative.root {
        Root::Text(text) => (text.clone(), RootShape::Plain),
        Root::Numeric(index) => (
            Consonant::Numeric(*index).resolve_root(lexicon)?,
            RootShape::Plain,
        ),
        Root::Affixual { cs, degree } => {
            if *degree > 9 {
                return Err(IthkuilError::invalid(
                    "root",
                    format!("affixual degree {degree} is outside 0-9"),
                ));
            }
            if formative.specification != Specification::Bsc || formative.function != Function::Sta
            {
                return Err(IthkuilError::invalid(
                    "root",
                    "an affixual root takes BSC specification and STA function",
                ));
            }
            (
                cs.resolve_affix(lexicon)?,
                RootShape::Affixual { degree: *degree },
            )
        }
        Root::Referents(referents) => (
            referent_list_to_ithkuil(referents, ReferentForm::Root)?,
            RootShape::Referential,
        ),
    };
    check_root_text(&resolved.0)?;
    Ok(resolved)
}

/// Which shortcuts fire. At most one mechanism rewrites any slot: VII and
/// VIII may combine, and IV/VI is only tried when neither fired.
#[derive(Debug, Default)]
struct ShortcutPlan {
    vii_series: Option<u8>,
    viii_ca: Option<&'static str>,
    /// Vv series and Cc letter carried by Slots I and II.
    iv_vi: Option<(u8, CcShortcut)>,
}

fn vii_series(affix: &Affix) -> Option<u8> {
    match affix {
        Affix::Standard {
            kind: AffixType::One,
            degree,
            cs: Consonant::Text(cs),
        } => VII_SHORTCUTS
            .iter()
            .find(|(d, c, _)| d == degree && c == cs)
            .map(|(_, _, series)| *series),
        _ => None,
    }
}

fn ineligible(shortcut: &str, reason: &str) -> IthkuilError {
    IthkuilError::InvalidShortcut {
        shortcut: shortcut.to_string(),
        reason: reason.to_string(),
    }
}

fn plan_shortcuts(formative: &Formative, shape: RootShape) -> Result<ShortcutPlan> {
    let requested = formative.shortcut;
    let mut plan = ShortcutPlan::default();

    if requested.allows_vii() {
        plan.vii_series = match (shape, formative.slot_vii_affixes.last()) {
            (RootShape::Plain, Some(last)) => vii_series(last),
            _ => None,
        };
        if plan.vii_series.is_none() && requested.is_explicit() {
            return Err(ineligible(
                "VII",
                "the root must be a plain consonant form and the last Slot VII affix one of r/4, t/4 or t/5 (type 1)",
            ));
        }
    }

    if requested.allows_viii() {
        let mood_or_case_scope = formative.kind.mood_or_case_scope();
        let eligible = formative.slot_v_affixes.is_empty()
            && formative.vn.is_default()
            && formative.ca.is_default();
        plan.viii_ca = mood_or_case_scope
            .to_shortcut_ca()
            .filter(|_| eligible);
        if plan.viii_ca.is_none() && requested.is_explicit() {
            return Err(ineligible(
                "VIII",
                "Slot V must be empty, Vn MNO, the Ca-complex default, and the mood or case-scope not FAC/CCN",
            ));
        }
    }

    if requested.allows_iv_vi() && plan.vii_series.is_none() && plan.viii_ca.is_none() {
        plan.iv_vi = iv_vi_shortcut(formative, shape);
        if plan.iv_vi.is_none() && requested.is_explicit() {
            return Err(ineligible(
                "IV/VI",
                "function, specification and context must be default, and the Ca one a plain or personal-reference root can fold into Slots I and II",
            ));
        }
    }

    Ok(plan)
}

fn iv_vi_shortcut(formative: &Formative, shape: RootShape) -> Option<(u8, CcShortcut)> {
    let ca = &formative.ca;
    let defaults = formative.function == Function::Sta
        && formative.specification == Specification::Bsc
        && formative.context == Context::Exs;
    if !defaults {
        return None;
    }
    match shape {
        RootShape::Plain => iv_vi_shortcut_for(ca),
        RootShape::Referential
            if *ca
                == Ca {
                    essence: ca.essence,
                    ..Ca::default()
                } =>
        {
            Some((version_series(formative.version), referential_cc(ca.essence)))
        }
        _ => None,
    }
}

/// Series of the special-root Vv, which carries version alone.
fn version_series(version: Version) -> u8 {
    version.index() as u8 + 1
}

#[derive(Debug, Default)]
struct Slots {
    i: WithWyAlternative,
    ii: WithWyAlternative,
    iii: WithWyAlternative,
    iv: WithWyAlternative,
    v: WithWyAlternative,
    vi: WithWyAlternative,
    vii: WithWyAlternative,
    viii: WithWyAlternative,
    ix: WithWyAlternative,
}

impl Slots {
    fn through_vii(&self) -> String {
        [&self.i, &self.ii, &self.iii, &self.iv, &self.v, &self.vi, &self.vii]
            .into_iter()
            .fold(WithWyAlternative::EMPTY, |acc, slot| &acc + slot)
            .default_value
    }

    fn join(&self) -> String {
        [
            &self.i, &self.ii, &self.iii, &self.iv, &self.v, &self.vi, &self.vii, &self.viii,
            &self.ix,
        ]
        .into_iter()
        .fold(WithWyAlternative::EMPTY, |acc, slot| &acc + slot)
        .default_value
    }
}

fn slot_viii(vn: Vn, mood_or_case_scope: MoodOrCaseScope) -> WithWyAlternative {
    &vn.to_vowel().to_wy(false)
        + &WithWyAlternative::of(mood_or_case_scope.to_cn(vn.is_aspect()))
}

fn slot_ix(kind: &FormativeKind) -> WithWyAlternative {
    match *kind {
        FormativeKind::Nominal {
            concatenation_type,
            case,
            ..
        } => case_vowel(case)
            .with_glottal_stop(case.is_offset() && concatenation_type.is_none())
            .to_wy(true),
        FormativeKind::FramedVerbal { case, .. } => case_vowel(case)
            .with_glottal_stop(case.is_offset())
            .to_wy(true),
        FormativeKind::UnframedVerbal {
            illocution_validation,
            ..
        } => illocution_validation.to_vowel().to_wy(true),
    }
}

/// Marks stress where it differs from the unmarked penultimate.
fn apply_slot_x_stress(word: String, kind: &FormativeKind) -> Result<String> {
    let stress = match *kind {
        FormativeKind::Nominal {
            concatenation_type: Some(_),
            case,
            ..
        } if case.is_offset() => Stress::Ultimate,
        FormativeKind::Nominal { .. } => Stress::Penultimate,
        FormativeKind::UnframedVerbal { .. } => Stress::Ultimate,
        FormativeKind::FramedVerbal { .. } => Stress::Antepenultimate,
    };
    match stress.offset_from_end() {
        Some(offset) if stress != Stress::Penultimate => apply_stress(&word, offset),
        _ => Ok(word),
    }
}

pub(crate) fn generate_formative(formative: &Formative, lexicon: &dyn Lexicon) -> Result<String> {
    let (root, shape) = resolve_root(formative, lexicon)?;
    let plan = plan_shortcuts(formative, shape)?;

    let mut slot_vii_affixes = formative.slot_vii_affixes.as_slice();
    if plan.vii_series.is_some() {
        slot_vii_affixes = &slot_vii_affixes[..slot_vii_affixes.len() - 1];
    }
    let slot_v_count = formative.slot_v_affixes.len();

    let mut slots = Slots {
        i: WithWyAlternative::of(cc_to_ithkuil(
            formative.kind.concatenation_type(),
            plan.iv_vi.map(|(_, cc)| cc),
        )),
        iii: WithWyAlternative::of(root.as_str()),
        ..Slots::default()
    };

    let vv = match (shape, plan.iv_vi) {
        (RootShape::Referential, _) => VowelForm::new(version_series(formative.version), 0),
        (RootShape::Affixual { .. }, _) => VowelForm::new(version_series(formative.version), 5),
        (RootShape::Plain, Some((series, _))) => {
            VowelForm::new(series, vv_degree(formative.stem, formative.version))
        }
        (RootShape::Plain, None) => VowelForm::new(
            plan.vii_series.unwrap_or(1),
            vv_degree(formative.stem, formative.version),
        ),
    }
    .with_glottal_stop(slot_v_count >= 2);
    let elide_vv = slots.i.is_empty()
        && vv == VowelForm::new(1, 1)
        && is_legal_word_initial_consonant_form(&root)
        && !root.starts_with(['w', 'y', 'h']);
    if !elide_vv {
        slots.ii = vv.to_wy(false);
    }

    if plan.iv_vi.is_none() {
        let vr_form = match shape {
            RootShape::Affixual { degree } => {
                VowelForm::new(formative.context.index() as u8 + 1, degree)
            }
            _ => vr(formative.function, formative.specification, formative.context),
        };
        slots.iv = vr_form.to_wy(false);
    }

    for (index, affix) in formative.slot_v_affixes.iter().enumerate() {
        let options = if plan.iv_vi.is_some() {
            AffixOptions {
                reversed: false,
                glottal_stop: index + 1 == slot_v_count,
            }
        } else {
            AffixOptions {
                reversed: true,
                glottal_stop: false,
            }
        };
        slots.v = &slots.v + &affix_to_ithkuil(affix, options, lexicon)?;
    }

    if plan.iv_vi.is_none() {
        let ca = if let Some(cn) = plan.viii_ca {
            cn.to_string()
        } else if slot_v_count > 0 {
            geminated_ca_to_ithkuil(&formative.ca)
        } else {
            ca_to_slot_form(&formative.ca)
        };
        slots.vi = WithWyAlternative::of(ca);
    }

    for affix in slot_vii_affixes {
        slots.vii = &slots.vii + &affix_to_ithkuil(affix, AffixOptions::default(), lexicon)?;
    }

    let mood_or_case_scope = formative.kind.mood_or_case_scope();
    let slot_viii_is_default = formative.vn.is_default() && mood_or_case_scope.is_default();
    let is_framed = matches!(formative.kind, FormativeKind::FramedVerbal { .. });

    if is_framed
        && count_syllables(&slots.through_vii()) < 2
        && slots.ii.is_empty()
        && slot_viii_is_default
    {
        slots.ii = WithWyAlternative::of("a");
    }
    let keep_default_viii = is_framed && count_syllables(&slots.through_vii()) < 2;
    if plan.viii_ca.is_none() && (!slot_viii_is_default || keep_default_viii) {
        slots.viii = slot_viii(formative.vn, mood_or_case_scope);
    }

    slots.ix = slot_ix(&formative.kind);

    if is_framed && count_syllables(&slots.join()) < 3 && slots.ii.is_empty() {
        slots.ii = WithWyAlternative::of("a");
    }

    let word = apply_slot_x_stress(slots.join(), &formative.kind)?;
    tracing::trace!(target: "ithkuil::formative", %word, "generated formative");
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ca::{Essence, Extension, Perspective};
    use crate::category::{Case, CaseScope, Mood, Stem};
    use crate::formative::{FormativeType, Shortcut};

    fn generate(partial: &PartialFormative) -> String {
        formative_to_ithkuil(partial).unwrap()
    }

    #[test]
    fn default_nominal_elides_its_vowel() {
        let partial = PartialFormative::new(FormativeType::Nominal, "l");
        assert_eq!(generate(&partial), "lala");
    }

    #[test]
    fn illegal_initial_root_keeps_its_vowel() {
        let partial = PartialFormative::new(FormativeType::Nominal, "rž");
        assert_eq!(generate(&partial), "aržala");
    }

    #[test]
    fn unframed_verbal_is_stressed_last() {
        let partial = PartialFormative::new(FormativeType::UnframedVerbal, "kl");
        assert_eq!(generate(&partial), "klalá");
    }

    #[test]
    fn short_framed_formatives_are_padded() {
        let partial = PartialFormative::new(FormativeType::FramedVerbal, "l");
        assert_eq!(generate(&partial), "álala");
        let mut shortcut = PartialFormative::new(FormativeType::FramedVerbal, "l");
        shortcut.shortcut = Some(Shortcut::IvVi);
        assert_eq!(generate(&shortcut), "wálaha");
    }

    #[test]
    fn offset_cases_take_a_glottal_stop() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.case = Some(Case::Prn);
        assert_eq!(generate(&partial), "lala'a");
    }

    #[test]
    fn concatenated_offset_cases_take_ultimate_stress() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.concatenation_type = Some(crate::category::ConcatenationType::One);
        partial.case = Some(Case::Prn);
        assert_eq!(generate(&partial), "halalá");
    }

    #[test]
    fn slot_vii_shortcut_moves_the_affix_into_vv() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.slot_vii_affixes = Some(vec![Affix::standard(AffixType::One, 4, "r")]);
        assert_eq!(generate(&partial), "lalira");
        partial.shortcut = Some(Shortcut::Auto);
        assert_eq!(generate(&partial), "ailala");
    }

    #[test]
    fn slot_viii_shortcut_replaces_ca() {
        let mut partial = PartialFormative::new(FormativeType::UnframedVerbal, "l");
        partial.mood = Some(Mood::Sub);
        assert_eq!(generate(&partial), "lalahlá");
        partial.shortcut = Some(Shortcut::Viii);
        assert_eq!(generate(&partial), "lahlá");
    }

    #[test]
    fn explicit_shortcuts_must_apply() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.shortcut = Some(Shortcut::Vii);
        assert!(matches!(
            formative_to_ithkuil(&partial),
            Err(IthkuilError::InvalidShortcut { .. })
        ));
        partial.shortcut = Some(Shortcut::Viii);
        assert!(formative_to_ithkuil(&partial).is_err());
        partial.shortcut = Some(Shortcut::IvVi);
        partial.specification = Some(Specification::Obj);
        assert!(formative_to_ithkuil(&partial).is_err());
    }

    #[test]
    fn auto_shortcut_prefers_viii_over_iv_vi() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.case_scope = Some(CaseScope::Cca);
        partial.shortcut = Some(Shortcut::Auto);
        assert_eq!(generate(&partial), "lahla");
    }

    #[test]
    fn iv_vi_shortcut_encodes_perspective_and_essence() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.shortcut = Some(Shortcut::IvVi);
        partial.stem = Some(Stem::Two);
        partial.ca = Some(Ca {
            perspective: Perspective::G,
            essence: Essence::Rpv,
            ..Ca::default()
        });
        assert_eq!(generate(&partial), "weola");
    }

    #[test]
    fn iv_vi_shortcut_folds_proximal_extension() {
        let mut partial = PartialFormative::new(FormativeType::Nominal, "l");
        partial.shortcut = Some(Shortcut::IvVi);
        partial.ca = Some(Ca {
            extension: Extension::Prx,
            ..Ca::default()
        });
        assert_eq!(generate(&partial), "yala");

        partial.ca = Some(Ca {
            extension: Extension::Prx,
            essence: Essence::Rpv,
            ..Ca::default()
        });
        assert_eq!(generate(&partial), "yaola");

        partial.ca = Some(Ca {
            extension: Extension::Prx,
            perspective: Perspective::G,
            ..Ca::default()
        });
        assert!(matches!(
            formative_to_ithkuil(&partial),
            Err(IthkuilError::InvalidShortcut { .. })
        ));
        partial.shortcut = Some(Shortcut::Auto);
        assert_eq!(generate(&partial), "ladra");
    }

    #[test]
    fn affixual_roots_reject_other_specifications() {
        let mut partial = PartialFormative::new(
            FormativeType::Nominal,
            Root::Affixual {
                cs: Consonant::from("c"),
                degree: 1,
            },
        );
        partial.specification = Some(Specification::Cte);
        assert!(formative_to_ithkuil(&partial).is_err());
    }

    #[test]
    fn numeric_roots_need_a_lexicon() {
        let partial = PartialFormative::new(FormativeType::Nominal, Root::Numeric(3));
        assert!(matches!(
            formative_to_ithkuil(&partial),
            Err(IthkuilError::Lexicon(_))
        ));
    }

    #[test]
    fn roots_must_be_consonants() {
        let partial = PartialFormative::new(FormativeType::Nominal, "la");
        assert!(formative_to_ithkuil(&partial).is_err());
    }
}
