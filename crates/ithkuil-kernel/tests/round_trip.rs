//! Integration tests: deterministic sweeps over whole categories.
//!
//! Every word generated here must parse back to the same values and
//! regenerate byte for byte.

use ithkuil_kernel::ca::ca_to_slot_form;
use ithkuil_kernel::category::{Aspect, Effect, Level, Phase, Valence};
use ithkuil_kernel::phonotactics::{
    CONSONANTS, is_legal_consonant_form, is_legal_word_final_consonant_form,
    is_legal_word_initial_consonant_form,
};
use ithkuil_kernel::{
    Affix, AffixType, Ca, Case, CaseScope, ConcatenationType, Context, Essence, Extension,
    Formative, FormativeType, Function, IllocutionValidation, IthkuilError, Mood,
    PartialFormative, Perspective, Referent, Shortcut, Specification, Stem, Version, Vn,
    fill_defaults, formative_to_ithkuil, parse_formative,
};

/// The consonants a word opens and closes with.
fn edge_clusters(word: &str) -> (String, String) {
    let initial: String = word.chars().take_while(|&c| CONSONANTS.contains(c)).collect();
    let mut last: Vec<char> = word.chars().rev().take_while(|&c| CONSONANTS.contains(c)).collect();
    last.reverse();
    (initial, last.into_iter().collect())
}

fn round_trip(partial: &PartialFormative) -> Formative {
    let word = formative_to_ithkuil(partial)
        .unwrap_or_else(|e| panic!("failed to generate {partial:?}: {e}"));
    let (initial, last) = edge_clusters(&word);
    assert!(is_legal_word_initial_consonant_form(&initial), "{word} opens with {initial}");
    assert!(is_legal_word_final_consonant_form(&last), "{word} closes with {last}");
    let parsed = parse_formative(&word)
        .unwrap_or_else(|e| panic!("failed to parse {word}: {e}"))
        .unwrap_or_else(|| panic!("{word} was not recognized"));
    let again = formative_to_ithkuil(&PartialFormative::from(&parsed))
        .unwrap_or_else(|e| panic!("failed to regenerate {word}: {e}"));
    assert_eq!(again, word, "{partial:?}");
    parsed
}

fn nominal() -> PartialFormative {
    PartialFormative::new(FormativeType::Nominal, "k")
}

fn every_vn() -> Vec<Vn> {
    let mut values = Vec::new();
    values.extend(Valence::ALL.iter().copied().map(Vn::Valence));
    values.extend(Phase::ALL.iter().copied().map(Vn::Phase));
    values.extend(Effect::ALL.iter().copied().map(Vn::Effect));
    values.extend(Level::ALL.iter().copied().map(Vn::Level));
    values.extend(Aspect::ALL.iter().copied().map(Vn::Aspect));
    values
}

#[test]
fn every_ca_complex_plain_and_geminated() {
    for ca in Ca::all() {
        let mut partial = nominal();
        partial.ca = Some(ca);
        assert_eq!(round_trip(&partial).ca, ca);

        partial.slot_v_affixes = Some(vec![Affix::standard(AffixType::One, 1, "c")]);
        let parsed = round_trip(&partial);
        assert_eq!(parsed.ca, ca);
        assert_eq!(parsed.slot_v_affixes.len(), 1);
    }
}

#[test]
fn every_ca_slot_form_is_pronounceable() {
    for ca in Ca::all() {
        let form = ca_to_slot_form(&ca);
        assert!(is_legal_consonant_form(&form), "{ca:?} is written {form}");
    }
}

#[test]
fn every_case_in_every_case_bearing_form() {
    for &case in Case::ALL {
        let mut partial = nominal();
        partial.case = Some(case);
        for concatenation_type in [None, Some(ConcatenationType::One), Some(ConcatenationType::Two)]
        {
            partial.concatenation_type = concatenation_type;
            let expected = fill_defaults(&partial).unwrap().kind;
            assert_eq!(round_trip(&partial).kind, expected);
        }

        let mut framed = PartialFormative::new(FormativeType::FramedVerbal, "k");
        framed.case = Some(case);
        let expected = fill_defaults(&framed).unwrap().kind;
        assert_eq!(round_trip(&framed).kind, expected);
    }
}

#[test]
fn every_illocution_validation_under_every_mood() {
    for &illocution_validation in IllocutionValidation::ALL {
        for &mood in Mood::ALL {
            let mut partial = PartialFormative::new(FormativeType::UnframedVerbal, "k");
            partial.mood = Some(mood);
            partial.illocution_validation = Some(illocution_validation);
            let expected = fill_defaults(&partial).unwrap().kind;
            assert_eq!(round_trip(&partial).kind, expected);
        }
    }
}

#[test]
fn every_vn_with_every_mood_and_case_scope() {
    for vn in every_vn() {
        for &mood in Mood::ALL {
            let mut partial = PartialFormative::new(FormativeType::UnframedVerbal, "k");
            partial.vn = Some(vn);
            partial.mood = Some(mood);
            let parsed = round_trip(&partial);
            assert_eq!(parsed.vn, vn);
        }
        for &case_scope in CaseScope::ALL {
            let mut partial = nominal();
            partial.vn = Some(vn);
            partial.case_scope = Some(case_scope);
            let parsed = round_trip(&partial);
            assert_eq!(parsed.vn, vn);
            assert_eq!(parsed.kind.mood_or_case_scope(), case_scope.into());
        }
    }
}

#[test]
fn every_vr_stem_and_version() {
    for &function in Function::ALL {
        for &specification in Specification::ALL {
            for &context in Context::ALL {
                for &stem in Stem::ALL {
                    for &version in Version::ALL {
                        let mut partial = nominal();
                        partial.function = Some(function);
                        partial.specification = Some(specification);
                        partial.context = Some(context);
                        partial.stem = Some(stem);
                        partial.version = Some(version);
                        let parsed = round_trip(&partial);
                        assert_eq!(
                            (parsed.function, parsed.specification, parsed.context),
                            (function, specification, context)
                        );
                        assert_eq!((parsed.stem, parsed.version), (stem, version));
                    }
                }
            }
        }
    }
}

#[test]
fn cc_shortcut_for_every_foldable_ca() {
    let mut folded = 0;
    for &perspective in Perspective::ALL {
        for &extension in Extension::ALL {
            for &essence in Essence::ALL {
                let ca = Ca {
                    extension,
                    perspective,
                    essence,
                    ..Ca::default()
                };
                let mut partial = nominal();
                partial.shortcut = Some(Shortcut::IvVi);
                partial.ca = Some(ca);
                match formative_to_ithkuil(&partial) {
                    Ok(_) => folded += 1,
                    Err(IthkuilError::InvalidShortcut { .. }) => continue,
                    Err(e) => panic!("unexpected error for {ca:?}: {e}"),
                }
                for &stem in Stem::ALL {
                    for &version in Version::ALL {
                        partial.stem = Some(stem);
                        partial.version = Some(version);
                        let parsed = round_trip(&partial);
                        assert_eq!(parsed.shortcut, Shortcut::IvVi);
                        assert_eq!(parsed.ca, ca);
                    }
                }
            }
        }
    }
    assert_eq!(folded, 8);
}

#[test]
fn standard_affixes_of_every_type_and_degree() {
    for &kind in AffixType::ALL {
        for degree in 0..=9 {
            for cs in ["c", "kl"] {
                let affix = Affix::standard(kind, degree, cs);
                let mut partial = nominal();
                partial.slot_vii_affixes = Some(vec![affix.clone()]);
                assert_eq!(round_trip(&partial).slot_vii_affixes, vec![affix]);
            }
        }
    }
}

#[test]
fn case_accessor_and_stacking_affixes() {
    for &case in Case::ALL {
        let mut affixes = vec![Affix::CaseStacking { case }];
        for &kind in AffixType::ALL {
            for is_inverse in [false, true] {
                affixes.push(Affix::CaseAccessor {
                    case,
                    kind,
                    is_inverse,
                });
            }
        }
        for affix in affixes {
            let mut partial = nominal();
            partial.slot_vii_affixes = Some(vec![affix.clone()]);
            assert_eq!(round_trip(&partial).slot_vii_affixes, vec![affix]);
        }
    }
}

#[test]
fn referential_affixes_for_every_referent() {
    for &referent in Referent::ALL {
        for &case in &Case::ALL[..9] {
            let affix = Affix::Referential {
                referents: vec![referent],
                perspective: Perspective::M,
                case,
            };
            let mut partial = nominal();
            partial.slot_vii_affixes = Some(vec![affix.clone()]);
            assert_eq!(round_trip(&partial).slot_vii_affixes, vec![affix]);
        }
    }
    for &perspective in Perspective::ALL {
        let affix = Affix::Referential {
            referents: vec![Referent::P2mBen],
            perspective,
            case: Case::Erg,
        };
        let mut partial = nominal();
        partial.slot_vii_affixes = Some(vec![affix.clone()]);
        assert_eq!(round_trip(&partial).slot_vii_affixes, vec![affix]);
    }
}
