//! Personal referents and referent lists.
//!
//! A referent is a person/number class paired with an effect. Each has a
//! one- or two-letter consonant; a list of referents is written as one
//! cluster, reordered if needed so that the cluster is pronounceable.

use crate::ca::is_geminated;
use crate::error::{IthkuilError, Result};
use crate::phonotactics::{is_legal_consonant_form, is_legal_word_initial_consonant_form};

tag_enum! {
    pub enum Referent {
        P1mNeu => "1m:NEU", P1mBen => "1m:BEN", P1mDet => "1m:DET",
        P2mNeu => "2m:NEU", P2mBen => "2m:BEN", P2mDet => "2m:DET",
        P2pNeu => "2p:NEU", P2pBen => "2p:BEN", P2pDet => "2p:DET",
        MaNeu => "ma:NEU", MaBen => "ma:BEN", MaDet => "ma:DET",
        PaNeu => "pa:NEU", PaBen => "pa:BEN", PaDet => "pa:DET",
        MiNeu => "mi:NEU", MiBen => "mi:BEN", MiDet => "mi:DET",
        PiNeu => "pi:NEU", PiBen => "pi:BEN", PiDet => "pi:DET",
        MxNeu => "Mx:NEU", MxBen => "Mx:BEN", MxDet => "Mx:DET",
        RdpNeu => "Rdp:NEU", RdpBen => "Rdp:BEN", RdpDet => "Rdp:DET",
        ObvNeu => "Obv:NEU", ObvBen => "Obv:BEN", ObvDet => "Obv:DET",
        PvsNeu => "PVS:NEU", PvsBen => "PVS:BEN", PvsDet => "PVS:DET",
    }
}

#[rustfmt::skip]
const STANDALONE: [&str; 33] = [
    "l", "r", "ř",
    "s", "š", "ž",
    "n", "t", "d",
    "m", "p", "b",
    "ň", "k", "g",
    "z", "ţ", "ḑ",
    "ẓ", "f", "v",
    "c", "č", "j",
    "th", "ph", "kh",
    "ll", "rr", "řř",
    "mm", "nn", "ňň",
];

/// Where a referent list is written. Affixes use `h`-final forms for the
/// obviative and provisional referents so that no affix contains a double
/// letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentForm {
    /// A word of its own; may fall back to an epenthetic `ë`.
    Standalone,
    /// A personal-reference root in Slot III.
    Root,
    /// The consonant of a referential affix.
    Affix,
}

impl Referent {
    pub fn to_ithkuil(self, form: ReferentForm) -> &'static str {
        let index = self.index();
        match (form, index) {
            (ReferentForm::Affix, 27) => "lh",
            (ReferentForm::Affix, 28) => "rh",
            (ReferentForm::Affix, 29) => "řh",
            (ReferentForm::Affix, 30) => "mh",
            (ReferentForm::Affix, 31) => "nh",
            (ReferentForm::Affix, 32) => "ňh",
            _ => STANDALONE[index],
        }
    }
}

/// Orders of `items`, identity first.
fn permutations(items: &[Referent]) -> Vec<Vec<Referent>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (index, &head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}

/// Above this many referents only the given order is tried.
const MAX_PERMUTED: usize = 6;

/// Writes a referent list as one consonant cluster. Orders that may begin a
/// word win, then any pronounceable order; the given order is tried first
/// within each rank.
pub fn referent_list_to_ithkuil(referents: &[Referent], form: ReferentForm) -> Result<String> {
    if referents.is_empty() {
        return Err(IthkuilError::invalid("referents", "list is empty"));
    }
    for (index, referent) in referents.iter().enumerate() {
        if referents[..index].contains(referent) {
            return Err(IthkuilError::invalid(
                "referents",
                format!("{referent} appears twice"),
            ));
        }
    }

    let orders = if referents.len() > MAX_PERMUTED {
        vec![referents.to_vec()]
    } else {
        permutations(referents)
    };
    let clusters: Vec<String> = orders
        .iter()
        .map(|order| order.iter().map(|r| r.to_ithkuil(form)).collect::<String>())
        .filter(|cluster| form != ReferentForm::Affix || !is_geminated(cluster))
        .collect();

    if let Some(cluster) = clusters
        .iter()
        .find(|c| is_legal_word_initial_consonant_form(c))
        .or_else(|| clusters.iter().find(|c| is_legal_consonant_form(c)))
    {
        return Ok(cluster.clone());
    }

    match form {
        ReferentForm::Standalone => {
            let first = referents[0].to_ithkuil(form);
            let rest: String = referents[1..].iter().map(|r| r.to_ithkuil(form)).collect();
            Ok(format!("{first}ë{rest}"))
        }
        ReferentForm::Root | ReferentForm::Affix => Err(IthkuilError::invalid(
            "referents",
            format!(
                "no order of [{}] forms a pronounceable cluster",
                referents
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )),
    }
}

/// Splits a cluster into referents, longest consonant first.
pub fn parse_referent_list(text: &str, form: ReferentForm) -> Result<Vec<Referent>> {
    let mut rest = text;
    let mut referents = Vec::new();
    while !rest.is_empty() {
        let next = Referent::ALL
            .iter()
            .copied()
            .filter(|r| rest.starts_with(r.to_ithkuil(form)))
            .max_by_key(|r| r.to_ithkuil(form).chars().count())
            .ok_or_else(|| IthkuilError::InvalidConsonantForm {
                slot: "referent list",
                value: text.to_string(),
            })?;
        referents.push(next);
        rest = &rest[next.to_ithkuil(form).len()..];
    }
    if referents.is_empty() {
        return Err(IthkuilError::InvalidConsonantForm {
            slot: "referent list",
            value: text.to_string(),
        });
    }
    Ok(referents)
}
