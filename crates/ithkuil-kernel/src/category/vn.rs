use crate::error::{IthkuilError, Result};
use crate::vowel_form::VowelForm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

tag_enum! {
    pub enum Valence {
        Mno => "MNO", Prl => "PRL", Cro => "CRO", Rcp => "RCP", Cpl => "CPL",
        Dup => "DUP", Dem => "DEM", Cng => "CNG", Pti => "PTI",
    }
}

tag_enum! {
    pub enum Phase {
        Pun => "PUN", Itr => "ITR", Rep => "REP", Itm => "ITM", Rct => "RCT",
        Fre => "FRE", Frg => "FRG", Vac => "VAC", Flc => "FLC",
    }
}

tag_enum! {
    pub enum Effect {
        Ben1 => "1:BEN", Ben2 => "2:BEN", Ben3 => "3:BEN", BenSlf => "SLF:BEN",
        Unk => "UNK",
        DetSlf => "SLF:DET", Det3 => "3:DET", Det2 => "2:DET", Det1 => "1:DET",
    }
}

tag_enum! {
    pub enum Level {
        Min => "MIN", Sbe => "SBE", Ifr => "IFR", Dfc => "DFC", Equ => "EQU",
        Sur => "SUR", Spl => "SPL", Spq => "SPQ", Max => "MAX",
    }
}

tag_enum! {
    pub enum Aspect {
        Rtr => "RTR", Prs => "PRS", Hab => "HAB", Prg => "PRG", Imm => "IMM",
        Pcs => "PCS", Reg => "REG", Smm => "SMM", Atp => "ATP",
        Rsm => "RSM", Css => "CSS", Pau => "PAU", Rgr => "RGR", Pcl => "PCL",
        Cnt => "CNT", Ics => "ICS", Exp => "EXP", Irp => "IRP",
        Pmp => "PMP", Clm => "CLM", Dlt => "DLT", Tmp => "TMP", Xpd => "XPD",
        Lim => "LIM", Epd => "EPD", Ptc => "PTC", Ppr => "PPR",
        Dcl => "DCL", Ccl => "CCL", Cul => "CUL", Imd => "IMD", Trd => "TRD",
        Tns => "TNS", Itc => "ITC", Mtv => "MTV", Sqn => "SQN",
    }
}

/// Slot VIII's vowel. The five categories are disjoint, so a bare tag
/// identifies both the category and the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Vn {
    Valence(Valence),
    Phase(Phase),
    Effect(Effect),
    Level(Level),
    Aspect(Aspect),
}

impl Default for Vn {
    fn default() -> Self {
        Self::Valence(Valence::Mno)
    }
}

impl Vn {
    pub fn is_default(self) -> bool {
        self == Self::default()
    }

    pub fn is_aspect(self) -> bool {
        matches!(self, Self::Aspect(_))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valence(value) => value.as_str(),
            Self::Phase(value) => value.as_str(),
            Self::Effect(value) => value.as_str(),
            Self::Level(value) => value.as_str(),
            Self::Aspect(value) => value.as_str(),
        }
    }

    pub fn to_vowel(self) -> VowelForm {
        let (series, index) = match self {
            Self::Valence(value) => (1, value.index()),
            Self::Phase(value) => (2, value.index()),
            Self::Effect(value) => (3, value.index()),
            Self::Level(value) => (4, value.index()),
            Self::Aspect(value) => {
                let index = value.index();
                ((index / 9) as u8 + 1, index % 9)
            }
        };
        VowelForm::new(series, index as u8 + 1)
    }

    /// Reads Vn given whether its Cn was aspectual.
    pub fn from_vowel(form: VowelForm, is_aspectual: bool) -> Result<Self> {
        if !(1..=9).contains(&form.degree) || form.has_glottal_stop {
            return Err(IthkuilError::malformed(
                "Vn",
                format!("`{}` is not a Vn", form.to_text(false)),
            ));
        }
        let offset = usize::from(form.degree) - 1;
        let series = usize::from(form.sequence);
        let missing = || IthkuilError::malformed("Vn", "vowel out of range");
        if is_aspectual {
            return Aspect::from_index((series - 1) * 9 + offset)
                .map(Self::Aspect)
                .ok_or_else(missing);
        }
        match series {
            1 => Valence::from_index(offset).map(Self::Valence),
            2 => Phase::from_index(offset).map(Self::Phase),
            3 => Effect::from_index(offset).map(Self::Effect),
            4 => Level::from_index(offset).map(Self::Level),
            _ => None,
        }
        .ok_or_else(missing)
    }
}

impl fmt::Display for Vn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vn {
    type Err = IthkuilError;

    fn from_str(s: &str) -> Result<Self> {
        Valence::from_str(s)
            .map(Self::Valence)
            .or_else(|_| Phase::from_str(s).map(Self::Phase))
            .or_else(|_| Effect::from_str(s).map(Self::Effect))
            .or_else(|_| Level::from_str(s).map(Self::Level))
            .or_else(|_| Aspect::from_str(s).map(Self::Aspect))
            .map_err(|_| IthkuilError::UnknownTag {
                kind: "Vn",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Vn {
    type Error = IthkuilError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Vn> for String {
    fn from(value: Vn) -> String {
        value.as_str().to_string()
    }
}
