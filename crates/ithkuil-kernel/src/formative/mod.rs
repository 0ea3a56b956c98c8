//! Formatives: the content words.
//!
//! A formative is assembled from ten ordered slots. [`PartialFormative`] is
//! the input shape, with everything except `type` and `root` optional;
//! [`Formative`] is the same word with every default filled in, and is what
//! the parser produces.

mod generate;
mod parse;

pub use generate::{formative_to_ithkuil, formative_to_ithkuil_with};
pub use parse::{parse_formative, parse_formative_with_stress};

use crate::affix::Affix;
use crate::ca::{Ca, Essence, Extension, Perspective};
use crate::category::{
    Case, CaseScope, ConcatenationType, Context, Function, IllocutionValidation, Mood,
    MoodOrCaseScope, Specification, Stem, Version, Vn,
};
use crate::error::{IthkuilError, Result};
use crate::lexicon::Consonant;
use crate::referent::Referent;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum FormativeType {
        /// Unframed nominal formative.
        Nominal => "UNF/C",
        /// Unframed verbal formative.
        UnframedVerbal => "UNF/K",
        /// Framed verbal formative.
        FramedVerbal => "FRM",
    }
}

/// Slot III.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Root {
    Text(String),
    Numeric(u64),
    /// An affix used as a root: its consonant, with its degree in Slot IV.
    Affixual { cs: Consonant, degree: u8 },
    /// A personal-reference root.
    Referents(Vec<Referent>),
}

impl From<&str> for Root {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Which slot compressions a formative may (or did) use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shortcut {
    #[default]
    None,
    /// Whichever shortcuts apply, in priority order.
    Auto,
    /// Slots IV and VI folded into Slots I and II.
    IvVi,
    /// The last Slot VII affix folded into Slot II.
    Vii,
    /// Slot VIII folded into Slot VI.
    Viii,
    ViiAndViii,
}

impl Shortcut {
    pub fn as_tag(self) -> Option<&'static str> {
        match self {
            Self::None | Self::Auto => None,
            Self::IvVi => Some("IV/VI"),
            Self::Vii => Some("VII"),
            Self::Viii => Some("VIII"),
            Self::ViiAndViii => Some("VII+VIII"),
        }
    }

    pub fn allows_vii(self) -> bool {
        matches!(self, Self::Auto | Self::Vii | Self::ViiAndViii)
    }

    pub fn allows_viii(self) -> bool {
        matches!(self, Self::Auto | Self::Viii | Self::ViiAndViii)
    }

    pub fn allows_iv_vi(self) -> bool {
        matches!(self, Self::Auto | Self::IvVi)
    }

    /// A shortcut named outright, which must apply.
    pub fn is_explicit(self) -> bool {
        self.as_tag().is_some()
    }

    fn from_parts(vii: bool, viii: bool) -> Self {
        match (vii, viii) {
            (true, true) => Self::ViiAndViii,
            (true, false) => Self::Vii,
            (false, true) => Self::Viii,
            (false, false) => Self::None,
        }
    }
}

impl Serialize for Shortcut {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_bool(false),
            Self::Auto => serializer.serialize_bool(true),
            other => serializer.serialize_str(other.as_tag().unwrap_or_default()),
        }
    }
}

impl<'de> Deserialize<'de> for Shortcut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Tag(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(Self::None),
            Repr::Flag(true) => Ok(Self::Auto),
            Repr::Tag(tag) => match tag.as_str() {
                "IV/VI" => Ok(Self::IvVi),
                "VII" => Ok(Self::Vii),
                "VIII" => Ok(Self::Viii),
                "VII+VIII" => Ok(Self::ViiAndViii),
                other => Err(de::Error::custom(format!("unknown shortcut `{other}`"))),
            },
        }
    }
}

/// The `w`/`y` part of Slot I when Slots IV and VI are folded into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CcShortcut {
    W,
    Y,
}

/// Slot I: concatenation type, and the shortcut letter when Slots IV and VI
/// are folded into it.
const CC_FORMS: [(Option<ConcatenationType>, Option<CcShortcut>, &str); 9] = [
    (None, None, ""),
    (None, Some(CcShortcut::W), "w"),
    (None, Some(CcShortcut::Y), "y"),
    (Some(ConcatenationType::One), None, "h"),
    (Some(ConcatenationType::One), Some(CcShortcut::W), "hl"),
    (Some(ConcatenationType::One), Some(CcShortcut::Y), "hm"),
    (Some(ConcatenationType::Two), None, "hw"),
    (Some(ConcatenationType::Two), Some(CcShortcut::W), "hr"),
    (Some(ConcatenationType::Two), Some(CcShortcut::Y), "hn"),
];

/// Ca values a plain root can fold into Slots I and II, with the Vv series
/// and Cc letter spelling each.
const IV_VI_SHORTCUTS: [(Essence, Perspective, Extension, u8, CcShortcut); 8] = [
    (Essence::Nrm, Perspective::M, Extension::Del, 1, CcShortcut::W),
    (Essence::Nrm, Perspective::G, Extension::Del, 2, CcShortcut::W),
    (Essence::Nrm, Perspective::N, Extension::Del, 3, CcShortcut::W),
    (Essence::Rpv, Perspective::G, Extension::Del, 4, CcShortcut::W),
    (Essence::Nrm, Perspective::M, Extension::Prx, 1, CcShortcut::Y),
    (Essence::Rpv, Perspective::M, Extension::Del, 2, CcShortcut::Y),
    (Essence::Nrm, Perspective::A, Extension::Del, 3, CcShortcut::Y),
    (Essence::Rpv, Perspective::M, Extension::Prx, 4, CcShortcut::Y),
];

fn iv_vi_shortcut_for(ca: &Ca) -> Option<(u8, CcShortcut)> {
    IV_VI_SHORTCUTS
        .iter()
        .map(|&(essence, perspective, extension, series, cc)| {
            let folded = Ca {
                extension,
                perspective,
                essence,
                ..Ca::default()
            };
            (folded, series, cc)
        })
        .find(|(folded, _, _)| folded == ca)
        .map(|(_, series, cc)| (series, cc))
}

/// Inverse of [`iv_vi_shortcut_for`]: the Ca spelled by a Vv series and Cc
/// letter after a plain root.
fn iv_vi_shortcut_ca(series: u8, cc: CcShortcut) -> Option<Ca> {
    IV_VI_SHORTCUTS
        .iter()
        .find(|(_, _, _, s, c)| (*s, *c) == (series, cc))
        .map(|(essence, perspective, extension, _, _)| Ca {
            extension: *extension,
            perspective: *perspective,
            essence: *essence,
            ..Ca::default()
        })
}

/// A personal-reference root folds only essence, under perspective M and
/// extension DEL.
fn referential_cc(essence: Essence) -> CcShortcut {
    match essence {
        Essence::Nrm => CcShortcut::W,
        Essence::Rpv => CcShortcut::Y,
    }
}

fn referential_essence(cc: CcShortcut) -> Essence {
    match cc {
        CcShortcut::W => Essence::Nrm,
        CcShortcut::Y => Essence::Rpv,
    }
}

fn cc_to_ithkuil(
    concatenation_type: Option<ConcatenationType>,
    shortcut: Option<CcShortcut>,
) -> &'static str {
    CC_FORMS
        .iter()
        .find(|(c, s, _)| *c == concatenation_type && *s == shortcut)
        .map(|(_, _, cc)| *cc)
        .unwrap_or_default()
}

/// Inverse of [`cc_to_ithkuil`] for a non-empty Slot I.
fn parse_cc(text: &str) -> Option<(Option<ConcatenationType>, Option<CcShortcut>)> {
    CC_FORMS
        .iter()
        .skip(1)
        .find(|(_, _, cc)| *cc == text)
        .map(|(c, s, _)| (*c, *s))
}

/// A formative as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFormative {
    #[serde(rename = "type")]
    pub kind: FormativeType,
    pub root: Root,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<Stem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<Function>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<Specification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(default, rename = "slotVAffixes", skip_serializing_if = "Option::is_none")]
    pub slot_v_affixes: Option<Vec<Affix>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<Ca>,
    #[serde(default, rename = "slotVIIAffixes", skip_serializing_if = "Option::is_none")]
    pub slot_vii_affixes: Option<Vec<Affix>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vn: Option<Vn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<Shortcut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concatenation_type: Option<ConcatenationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_scope: Option<CaseScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illocution_validation: Option<IllocutionValidation>,
}

impl PartialFormative {
    /// A formative of the given type and root with nothing else specified.
    pub fn new(kind: FormativeType, root: impl Into<Root>) -> Self {
        Self {
            kind,
            root: root.into(),
            version: None,
            stem: None,
            function: None,
            specification: None,
            context: None,
            slot_v_affixes: None,
            ca: None,
            slot_vii_affixes: None,
            vn: None,
            shortcut: None,
            concatenation_type: None,
            case_scope: None,
            case: None,
            mood: None,
            illocution_validation: None,
        }
    }
}

/// The fields that belong to one formative type only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormativeKind {
    #[serde(rename = "UNF/C")]
    Nominal {
        #[serde(
            default,
            rename = "concatenationType",
            skip_serializing_if = "Option::is_none"
        )]
        concatenation_type: Option<ConcatenationType>,
        #[serde(rename = "caseScope")]
        case_scope: CaseScope,
        case: Case,
    },
    #[serde(rename = "UNF/K")]
    UnframedVerbal {
        mood: Mood,
        #[serde(rename = "illocutionValidation")]
        illocution_validation: IllocutionValidation,
    },
    #[serde(rename = "FRM")]
    FramedVerbal {
        #[serde(rename = "caseScope")]
        case_scope: CaseScope,
        case: Case,
    },
}

impl FormativeKind {
    pub fn formative_type(&self) -> FormativeType {
        match self {
            Self::Nominal { .. } => FormativeType::Nominal,
            Self::UnframedVerbal { .. } => FormativeType::UnframedVerbal,
            Self::FramedVerbal { .. } => FormativeType::FramedVerbal,
        }
    }

    /// The value Slot VIII's consonant carries for this type.
    pub fn mood_or_case_scope(&self) -> MoodOrCaseScope {
        match self {
            Self::Nominal { case_scope, .. } | Self::FramedVerbal { case_scope, .. } => {
                MoodOrCaseScope::CaseScope(*case_scope)
            }
            Self::UnframedVerbal { mood, .. } => MoodOrCaseScope::Mood(*mood),
        }
    }

    pub fn concatenation_type(&self) -> Option<ConcatenationType> {
        match self {
            Self::Nominal {
                concatenation_type, ..
            } => *concatenation_type,
            _ => None,
        }
    }
}

/// A formative with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formative {
    #[serde(flatten)]
    pub kind: FormativeKind,
    pub root: Root,
    pub version: Version,
    pub stem: Stem,
    pub function: Function,
    pub specification: Specification,
    pub context: Context,
    #[serde(rename = "slotVAffixes")]
    pub slot_v_affixes: Vec<Affix>,
    pub ca: Ca,
    #[serde(rename = "slotVIIAffixes")]
    pub slot_vii_affixes: Vec<Affix>,
    pub vn: Vn,
    pub shortcut: Shortcut,
}

fn reject_field<T>(value: &Option<T>, field: &'static str, kind: FormativeType) -> Result<()> {
    if value.is_some() {
        return Err(IthkuilError::invalid(
            field,
            format!("not allowed on a {kind} formative"),
        ));
    }
    Ok(())
}

/// Fills in defaults, rejecting fields that belong to another type.
pub fn fill_defaults(partial: &PartialFormative) -> Result<Formative> {
    let kind = partial.kind;
    let formative_kind = match kind {
        FormativeType::Nominal => {
            reject_field(&partial.mood, "mood", kind)?;
            reject_field(&partial.illocution_validation, "illocutionValidation", kind)?;
            FormativeKind::Nominal {
                concatenation_type: partial.concatenation_type,
                case_scope: partial.case_scope.unwrap_or_default(),
                case: partial.case.unwrap_or_default(),
            }
        }
        FormativeType::UnframedVerbal => {
            reject_field(&partial.concatenation_type, "concatenationType", kind)?;
            reject_field(&partial.case_scope, "caseScope", kind)?;
            reject_field(&partial.case, "case", kind)?;
            FormativeKind::UnframedVerbal {
                mood: partial.mood.unwrap_or_default(),
                illocution_validation: partial.illocution_validation.unwrap_or_default(),
            }
        }
        FormativeType::FramedVerbal => {
            reject_field(&partial.concatenation_type, "concatenationType", kind)?;
            reject_field(&partial.mood, "mood", kind)?;
            reject_field(&partial.illocution_validation, "illocutionValidation", kind)?;
            FormativeKind::FramedVerbal {
                case_scope: partial.case_scope.unwrap_or_default(),
                case: partial.case.unwrap_or_default(),
            }
        }
    };

    Ok(Formative {
        kind: formative_kind,
        root: partial.root.clone(),
        version: partial.version.unwrap_or_default(),
        stem: partial.stem.unwrap_or_default(),
        function: partial.function.unwrap_or_default(),
        specification: partial.specification.unwrap_or_default(),
        context: partial.context.unwrap_or_default(),
        slot_v_affixes: partial.slot_v_affixes.clone().unwrap_or_default(),
        ca: partial.ca.unwrap_or_default(),
        slot_vii_affixes: partial.slot_vii_affixes.clone().unwrap_or_default(),
        vn: partial.vn.unwrap_or_default(),
        shortcut: partial.shortcut.unwrap_or_default(),
    })
}

impl From<&Formative> for PartialFormative {
    fn from(formative: &Formative) -> Self {
        let mut partial = PartialFormative::new(
            formative.kind.formative_type(),
            formative.root.clone(),
        );
        partial.version = Some(formative.version);
        partial.stem = Some(formative.stem);
        partial.function = Some(formative.function);
        partial.specification = Some(formative.specification);
        partial.context = Some(formative.context);
        partial.slot_v_affixes = Some(formative.slot_v_affixes.clone());
        partial.ca = Some(formative.ca);
        partial.slot_vii_affixes = Some(formative.slot_vii_affixes.clone());
        partial.vn = Some(formative.vn);
        partial.shortcut = Some(formative.shortcut);
        match formative.kind {
            FormativeKind::Nominal {
                concatenation_type,
                case_scope,
                case,
            } => {
                partial.concatenation_type = concatenation_type;
                partial.case_scope = Some(case_scope);
                partial.case = Some(case);
            }
            FormativeKind::UnframedVerbal {
                mood,
                illocution_validation,
            } => {
                partial.mood = Some(mood);
                partial.illocution_validation = Some(illocution_validation);
            }
            FormativeKind::FramedVerbal { case_scope, case } => {
                partial.case_scope = Some(case_scope);
                partial.case = Some(case);
            }
        }
        partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_vi_table_reads_back_every_entry() {
        for ca in Ca::all() {
            if let Some((series, cc)) = iv_vi_shortcut_for(&ca) {
                assert_eq!(iv_vi_shortcut_ca(series, cc), Some(ca));
            }
        }
        let proximal = Ca {
            extension: Extension::Prx,
            ..Ca::default()
        };
        assert_eq!(iv_vi_shortcut_for(&proximal), Some((1, CcShortcut::Y)));
        let distal_agglomerative = Ca {
            perspective: Perspective::A,
            essence: Essence::Rpv,
            ..Ca::default()
        };
        assert_eq!(iv_vi_shortcut_for(&distal_agglomerative), None);
    }

    #[test]
    fn partial_formatives_need_only_type_and_root() {
        let partial: PartialFormative =
            serde_json::from_str(r#"{"type":"UNF/C","root":"c"}"#).unwrap();
        let formative = fill_defaults(&partial).unwrap();
        assert_eq!(formative.kind.formative_type(), FormativeType::Nominal);
        assert_eq!(formative.vn, Vn::default());
        assert_eq!(formative.shortcut, Shortcut::None);
    }

    #[test]
    fn missing_root_is_rejected() {
        assert!(serde_json::from_str::<PartialFormative>(r#"{"type":"FRM"}"#).is_err());
    }

    #[test]
    fn fields_of_other_types_are_rejected() {
        let mut partial = PartialFormative::new(FormativeType::UnframedVerbal, "c");
        partial.case = Some(Case::Erg);
        assert!(matches!(
            fill_defaults(&partial),
            Err(IthkuilError::InvalidField { field: "case", .. })
        ));
    }

    #[test]
    fn roots_deserialize_by_shape() {
        let root: Root = serde_json::from_str("\"kl\"").unwrap();
        assert_eq!(root, Root::from("kl"));
        let root: Root = serde_json::from_str("12").unwrap();
        assert_eq!(root, Root::Numeric(12));
        let root: Root = serde_json::from_str(r#"{"cs":"c","degree":3}"#).unwrap();
        assert_eq!(
            root,
            Root::Affixual {
                cs: Consonant::from("c"),
                degree: 3
            }
        );
        let root: Root = serde_json::from_str(r#"["1m:BEN","2m:DET"]"#).unwrap();
        assert_eq!(root, Root::Referents(vec![Referent::P1mBen, Referent::P2mDet]));
    }

    #[test]
    fn shortcut_accepts_flags_and_tags() {
        let values: Vec<Shortcut> =
            serde_json::from_str(r#"[false, true, "IV/VI", "VII", "VIII", "VII+VIII"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Shortcut::None,
                Shortcut::Auto,
                Shortcut::IvVi,
                Shortcut::Vii,
                Shortcut::Viii,
                Shortcut::ViiAndViii
            ]
        );
        assert_eq!(serde_json::to_string(&Shortcut::IvVi).unwrap(), "\"IV/VI\"");
        assert!(serde_json::from_str::<Shortcut>("\"IX\"").is_err());
    }

    #[test]
    fn filled_formatives_serialize_with_a_type_tag() {
        let partial = PartialFormative::new(FormativeType::FramedVerbal, "c");
        let value = serde_json::to_value(fill_defaults(&partial).unwrap()).unwrap();
        assert_eq!(value["type"], "FRM");
        assert_eq!(value["caseScope"], "CCN");
        assert_eq!(value["slotVAffixes"], serde_json::json!([]));
        let back: Formative = serde_json::from_value(value).unwrap();
        assert_eq!(back.kind.formative_type(), FormativeType::FramedVerbal);
    }
}
