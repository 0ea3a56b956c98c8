//! Integration tests: literal formatives and the words they must produce.
//!
//! Each case is a partial formative in JSON. The generated word is pinned
//! with an inline snapshot, then parsed and generated again to check that
//! the word survives the trip unchanged.

use ithkuil_kernel::{
    Formative, PartialFormative, PartialWord, Word, formative_to_ithkuil, parse_formative,
    parse_word, word_to_ithkuil,
};

fn generate(json: &str) -> String {
    let partial: PartialFormative = serde_json::from_str(json)
        .unwrap_or_else(|e| panic!("failed to parse formative {json}: {e}"));
    formative_to_ithkuil(&partial).unwrap_or_else(|e| panic!("failed to generate {json}: {e}"))
}

fn assert_reparses(word: &str) {
    let parsed = parse_word(word)
        .unwrap_or_else(|e| panic!("failed to parse {word}: {e}"))
        .unwrap_or_else(|| panic!("{word} was not recognized"));
    assert!(matches!(parsed, Word::Formative(_)), "{word} parsed as {parsed:?}");
    let again = word_to_ithkuil(&PartialWord::from(&parsed))
        .unwrap_or_else(|e| panic!("failed to regenerate {word}: {e}"));
    assert_eq!(again, word);
}

#[test]
fn concatenated_formative_with_affixes_on_both_sides() {
    let word = generate(
        r#"{
            "type": "UNF/C",
            "root": "c",
            "specification": "CTE",
            "vn": "PCL",
            "slotVAffixes": [
                {"type": 2, "degree": 6, "cs": "p"},
                {"type": 3, "degree": 3, "cs": "kl"}
            ],
            "slotVIIAffixes": [{"ca": {"configuration": "MSS"}}],
            "concatenationType": 2,
            "case": "TSP",
            "caseScope": "CCS"
        }"#,
    );
    insta::assert_snapshot!(word, @"hwa'cäpoukliollüötëuhrwöë");
    assert_reparses(&word);
}

#[test]
fn framed_verbal_with_full_ca() {
    let word = generate(
        r#"{
            "type": "FRM",
            "root": "c",
            "version": "CPT",
            "vn": "3:DET",
            "ca": {
                "affiliation": "COA",
                "configuration": "DPX",
                "extension": "PRX",
                "perspective": "A",
                "essence": "NRM"
            }
        }"#,
    );
    insta::assert_snapshot!(word, @"äcarstyúoha");
    assert_reparses(&word);
}

#[test]
fn personal_reference_root() {
    let word = generate(
        r#"{
            "type": "FRM",
            "root": ["1m:BEN", "2m:DET"],
            "ca": {"essence": "RPV"},
            "context": "FNC",
            "vn": "SLF:BEN"
        }"#,
    );
    insta::assert_snapshot!(word, @"aežraitļíöha");
    assert_reparses(&word);
}

#[test]
fn affixual_root_with_referential_affix() {
    let word = generate(
        r#"{
            "type": "UNF/C",
            "root": {"cs": "c", "degree": 3},
            "slotVIIAffixes": [{"referents": ["1m:DET"], "case": "IND"}],
            "vn": "CNT"
        }"#,
    );
    insta::assert_snapshot!(word, @"ëiceloařouwa");
    assert_reparses(&word);
}

#[test]
fn automatic_shortcut_folds_ca_into_slot_one() {
    let word = generate(
        r#"{
            "type": "UNF/C",
            "root": "l",
            "shortcut": true,
            "version": "CPT",
            "stem": 2,
            "slotVAffixes": [{"type": 1, "degree": 4, "cs": "r"}]
        }"#,
    );
    insta::assert_snapshot!(word, @"wili'ra");
    assert_reparses(&word);
}

#[test]
fn parsed_shortcut_formative_keeps_every_field() {
    let formative: Formative = parse_formative("wili'ra").unwrap().unwrap();
    insta::assert_json_snapshot!(formative, @r#"
    {
      "type": "UNF/C",
      "caseScope": "CCN",
      "case": "THM",
      "root": "l",
      "version": "CPT",
      "stem": 2,
      "function": "STA",
      "specification": "BSC",
      "context": "EXS",
      "slotVAffixes": [
        {
          "type": 1,
          "degree": 4,
          "cs": "r"
        }
      ],
      "ca": {
        "affiliation": "CSL",
        "configuration": "UPX",
        "extension": "DEL",
        "perspective": "M",
        "essence": "NRM"
      },
      "slotVIIAffixes": [],
      "vn": "MNO",
      "shortcut": "IV/VI"
    }
    "#);
}

#[test]
fn parsed_personal_reference_root_lists_its_referents() {
    let formative = parse_formative("aežraitļíöha").unwrap().unwrap();
    let root = serde_json::to_value(&formative.root).unwrap();
    assert_eq!(root, serde_json::json!(["2m:DET", "1m:BEN"]));
}

#[test]
fn generation_is_deterministic() {
    let json = r#"{"type":"UNF/C","root":"c","vn":"PCL","caseScope":"CCS"}"#;
    assert_eq!(generate(json), generate(json));
}
