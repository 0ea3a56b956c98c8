//! The Ca-complex: affiliation, configuration, extension, perspective and
//! essence, written as one consonant cluster in Slot VI.
//!
//! Encoding concatenates the four sub-forms and then rewrites the clusters
//! that concatenation can produce (`pp` becomes `mp`, `rr` becomes `ns`,
//! `gm` after another consonant becomes `x`, and so on). Decoding inverts
//! the whole table: all 3,840 complexes are encoded once and indexed by
//! surface form, plain and geminated.

use crate::error::{IthkuilError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

tag_enum! {
    pub enum Affiliation {
        Csl => "CSL",
        Aso => "ASO",
        Coa => "COA",
        Var => "VAR",
    }
}

tag_enum! {
    pub enum Configuration {
        Upx => "UPX",
        Dpx => "DPX",
        Mss => "MSS", Msc => "MSC", Msf => "MSF",
        Mds => "MDS", Mdc => "MDC", Mdf => "MDF",
        Mfs => "MFS", Mfc => "MFC", Mff => "MFF",
        Dss => "DSS", Dsc => "DSC", Dsf => "DSF",
        Dds => "DDS", Ddc => "DDC", Ddf => "DDF",
        Dfs => "DFS", Dfc => "DFC", Dff => "DFF",
    }
}

tag_enum! {
    pub enum Extension {
        Del => "DEL",
        Prx => "PRX",
        Icp => "ICP",
        Atv => "ATV",
        Gra => "GRA",
        Dpl => "DPL",
    }
}

tag_enum! {
    pub enum Perspective {
        M => "M",
        G => "G",
        N => "N",
        A => "A",
    }
}

tag_enum! {
    pub enum Essence {
        Nrm => "NRM",
        Rpv => "RPV",
    }
}

impl Default for Affiliation {
    fn default() -> Self {
        Self::Csl
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::Upx
    }
}

impl Default for Extension {
    fn default() -> Self {
        Self::Del
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::M
    }
}

impl Default for Essence {
    fn default() -> Self {
        Self::Nrm
    }
}

/// A Ca-complex. Missing fields deserialize to their defaults
/// (CSL, UPX, DEL, M, NRM), so partial input needs no separate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ca {
    pub affiliation: Affiliation,
    pub configuration: Configuration,
    pub extension: Extension,
    pub perspective: Perspective,
    pub essence: Essence,
}

/// Slot VI spelling of the default complex.
pub const DEFAULT_CA_FORM: &str = "l";

const AFFILIATION: [&str; 4] = ["", "l", "r", "ř"];
const AFFILIATION_STANDALONE: [&str; 4] = ["", "nļ", "rļ", "ň"];

#[rustfmt::skip]
const CONFIGURATION: [&str; 20] = [
    "", "s", "t", "k", "p", "ţ", "f", "ç", "z", "ž", "ẓ",
    "c", "ks", "ps", "ţs", "fs", "š", "č", "kš", "pš",
];

const EXTENSION: [&str; 6] = ["", "t", "k", "p", "g", "b"];
const EXTENSION_AFTER_UPX: [&str; 6] = ["", "d", "g", "b", "gz", "bz"];

/// `[perspective][essence]` when nothing else is written.
const PERSPECTIVE_ESSENCE_STANDALONE: [[&str; 2]; 4] =
    [["l", "tļ"], ["r", "ř"], ["v", "m"], ["j", "n"]];

/// `[perspective][essence]` after another Ca consonant.
const PERSPECTIVE_ESSENCE: [[&str; 2]; 4] = [["", "l"], ["r", "ř"], ["w", "m"], ["y", "n"]];

/// Cluster rewrites in application order. `${1}` keeps the letter in front
/// of the match.
const ALLOMORPHS: [(&str, &str); 19] = [
    ("pp", "mp"),
    ("tt", "nt"),
    ("kk", "nk"),
    ("ll", "pļ"),
    ("pb", "mb"),
    ("kg", "ng"),
    ("çy", "nd"),
    ("rr", "ns"),
    ("rř", "nš"),
    ("řr", "ňs"),
    ("řř", "ňš"),
    ("(.)gm", "${1}x"),
    ("(.)gn", "${1}ň"),
    ("nň", "ňn"),
    ("(.)çx", "${1}xw"),
    ("(.)bm", "${1}v"),
    ("(.)bn", "${1}ḑ"),
    ("fv", "vw"),
    ("ţḑ", "ḑy"),
];

/// Stop pairs that geminate by changing shape.
const GEMINATES: [(&str, &str); 6] = [
    ("pt", "bbḑ"),
    ("pk", "bbv"),
    ("kt", "ggḑ"),
    ("kp", "ggv"),
    ("tk", "ḑvv"),
    ("tp", "ddv"),
];

const SIBILANTS: &str = "sšzžçcčẓj";
const LIQUIDS_AND_NASALS: &str = "lrřļmnň";
const FRICATIVES: &str = "ţḑfvx";
const STOPS: &str = "ptkbdg";
/// What a stop may be followed by and still be doubled in place.
const AFTER_STOP: &str = "lrřļwysšzžçcčẓjţḑfvx";

impl Ca {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Every complex, in table order.
    pub fn all() -> impl Iterator<Item = Ca> {
        Affiliation::ALL.iter().flat_map(|&affiliation| {
            Configuration::ALL.iter().flat_map(move |&configuration| {
                Extension::ALL.iter().flat_map(move |&extension| {
                    Perspective::ALL.iter().flat_map(move |&perspective| {
                        Essence::ALL.iter().map(move |&essence| Ca {
                            affiliation,
                            configuration,
                            extension,
                            perspective,
                            essence,
                        })
                    })
                })
            })
        })
    }
}

fn ends_in_stop(text: &str) -> bool {
    matches!(text.chars().last(), Some('k' | 'p' | 't'))
}

/// The complex's consonant cluster; empty for the default complex.
pub fn ca_to_ithkuil(ca: &Ca) -> String {
    if ca.is_default() {
        return String::new();
    }
    let configuration = CONFIGURATION[ca.configuration.index()];
    let extension = if ca.configuration == Configuration::Upx {
        EXTENSION_AFTER_UPX[ca.extension.index()]
    } else {
        EXTENSION[ca.extension.index()]
    };
    let rest_is_default = configuration.is_empty()
        && extension.is_empty()
        && ca.perspective == Perspective::M
        && ca.essence == Essence::Nrm;
    let affiliation = if rest_is_default {
        AFFILIATION_STANDALONE[ca.affiliation.index()]
    } else {
        AFFILIATION[ca.affiliation.index()]
    };
    if rest_is_default {
        return affiliation.to_string();
    }

    let head = format!("{affiliation}{configuration}{extension}");
    let (p, e) = (ca.perspective.index(), ca.essence.index());
    let tail = if head.is_empty() {
        PERSPECTIVE_ESSENCE_STANDALONE[p][e]
    } else {
        match (ca.perspective, ca.essence, ends_in_stop(&head)) {
            (Perspective::N, Essence::Rpv, true) => "h",
            (Perspective::A, Essence::Rpv, true) => "ç",
            _ => PERSPECTIVE_ESSENCE[p][e],
        }
    };
    make_allomorphic_substitutions(&format!("{head}{tail}"))
}

/// Slot VI spelling: like [`ca_to_ithkuil`] but never empty.
pub fn ca_to_slot_form(ca: &Ca) -> String {
    let text = ca_to_ithkuil(ca);
    if text.is_empty() {
        DEFAULT_CA_FORM.to_string()
    } else {
        text
    }
}

fn allomorph_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        ALLOMORPHS
            .iter()
            .map(|&(pattern, to)| {
                (
                    Regex::new(pattern).expect("allomorph regex must compile"),
                    to,
                )
            })
            .collect()
    })
}

/// Applies the cluster rewrites in order; later rules see earlier output.
pub fn make_allomorphic_substitutions(text: &str) -> String {
    allomorph_rules()
        .iter()
        .fold(text.to_string(), |acc, (pattern, to)| {
            pattern.replace_all(&acc, *to).into_owned()
        })
}

/// Result of doubling a Ca cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geminated {
    pub text: String,
    /// Set when no gemination rule applied and the first letter was simply
    /// repeated.
    pub is_unprincipled: bool,
}

/// Doubles a Ca cluster for use after Slot V affixes.
///
/// A lone consonant doubles. Stop pairs change shape. A leading sibilant,
/// liquid, nasal or fricative doubles in place, as does a stop before
/// anything but another stop or a nasal. Anything else repeats its first
/// letter and is marked unprincipled.
pub fn attempt_gemination(text: &str) -> Geminated {
    let principled = |text: String| Geminated {
        text,
        is_unprincipled: false,
    };
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return principled(String::new());
    };
    let Some(second) = chars.next() else {
        return principled(format!("{first}{first}"));
    };
    if let Some((from, to)) = GEMINATES.iter().find(|(from, _)| text.starts_with(from)) {
        return principled(format!("{to}{}", &text[from.len()..]));
    }
    let doubles_in_place = SIBILANTS.contains(first)
        || LIQUIDS_AND_NASALS.contains(first)
        || FRICATIVES.contains(first)
        || (STOPS.contains(first) && AFTER_STOP.contains(second));
    if doubles_in_place {
        return principled(format!("{first}{text}"));
    }
    Geminated {
        text: format!("{first}{text}"),
        is_unprincipled: true,
    }
}

/// Slot VI spelling after Slot V affixes.
pub fn geminated_ca_to_ithkuil(ca: &Ca) -> String {
    let form = ca_to_slot_form(ca);
    let geminated = attempt_gemination(&form);
    if geminated.is_unprincipled {
        tracing::warn!(
            target: "ithkuil::ca",
            ca = %form,
            geminated = %geminated.text,
            "no gemination rule applies; repeating the first letter"
        );
    }
    geminated.text
}

struct CaTables {
    plain: HashMap<String, Ca>,
    geminated: HashMap<String, Ca>,
}

fn tables() -> &'static CaTables {
    static TABLES: OnceLock<CaTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut plain = HashMap::new();
        let mut geminated = HashMap::new();
        for ca in Ca::all() {
            let form = ca_to_slot_form(&ca);
            geminated
                .entry(attempt_gemination(&form).text)
                .or_insert(ca);
            plain.entry(form).or_insert(ca);
        }
        CaTables { plain, geminated }
    })
}

/// Reads an ungeminated Slot VI cluster.
pub fn parse_ca(text: &str) -> Result<Ca> {
    tables()
        .plain
        .get(text)
        .copied()
        .ok_or_else(|| IthkuilError::InvalidConsonantForm {
            slot: "Ca",
            value: text.to_string(),
        })
}

/// Reads a geminated Slot VI cluster.
pub fn parse_geminated_ca(text: &str) -> Result<Ca> {
    tables()
        .geminated
        .get(text)
        .copied()
        .ok_or_else(|| IthkuilError::InvalidConsonantForm {
            slot: "geminated Ca",
            value: text.to_string(),
        })
}

/// Whether a cluster contains two identical adjacent letters.
pub fn is_geminated(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).any(|pair| pair[0] == pair[1])
}
