use crate::error::{IthkuilError, Result};
use crate::vowel_form::VowelForm;

tag_enum! {
    /// The 68 cases, in table order. The first 36 are written with a plain
    /// Vc; the rest reuse the vowels of the first 32 (degree 5 skipped) and
    /// are told apart by a glottal stop or, in concatenated formatives, by
    /// ultimate stress.
    pub enum Case {
        Thm => "THM", Ins => "INS", Abs => "ABS", Aff => "AFF", Stm => "STM",
        Eff => "EFF", Erg => "ERG", Dat => "DAT", Ind => "IND",
        Pos => "POS", Prp => "PRP", Gen => "GEN", Att => "ATT", Pdc => "PDC",
        Itp => "ITP", Ogn => "OGN", Idp => "IDP", Par => "PAR",
        Apl => "APL", Pur => "PUR", Tra => "TRA", Dfr => "DFR", Crs => "CRS",
        Tsp => "TSP", Cmm => "CMM", Cmp => "CMP", Csd => "CSD",
        Fun => "FUN", Tfm => "TFM", Cla => "CLA", Rsl => "RSL", Csm => "CSM",
        Con => "CON", Avr => "AVR", Cvs => "CVS", Sit => "SIT",
        Prn => "PRN", Dsp => "DSP", Cor => "COR", Cps => "CPS", Com => "COM",
        Utl => "UTL", Prd => "PRD", Rlt => "RLT",
        Act => "ACT", Asi => "ASI", Ess => "ESS", Trm => "TRM", Sel => "SEL",
        Cfm => "CFM", Dep => "DEP", Voc => "VOC",
        Loc => "LOC", Atd => "ATD", All => "ALL", Abl => "ABL", Ori => "ORI",
        Irl => "IRL", Inv => "INV", Nav => "NAV",
        Cnr => "CNR", Ass => "ASS", Per => "PER", Pro => "PRO", Pcv => "PCV",
        Pcr => "PCR", Elp => "ELP", Plm => "PLM",
    }
}

impl Default for Case {
    fn default() -> Self {
        Self::Thm
    }
}

impl Case {
    /// Cases written with a shared vowel and an extra marker.
    pub fn is_offset(self) -> bool {
        self.index() >= 36
    }
}

/// The bare Vc of a case; offset cases come back without their glottal
/// stop, which the caller places.
pub fn case_vowel(case: Case) -> VowelForm {
    let index = case.index();
    if index < 36 {
        return VowelForm::new((index / 9) as u8 + 1, (index % 9) as u8 + 1);
    }
    let shifted = index - 36;
    let mut degree = (shifted % 8) as u8 + 1;
    if degree >= 5 {
        degree += 1;
    }
    VowelForm::new((shifted / 8) as u8 + 1, degree)
}

/// Reads a Vc. `is_offset` says whether the word marks the shifted half of
/// the table (glottal stop or concatenated ultimate stress).
pub fn case_from_vowel(form: VowelForm, is_offset: bool) -> Result<Case> {
    let series = usize::from(form.sequence) - 1;
    let degree = usize::from(form.degree);
    let index = if is_offset {
        match degree {
            1..=4 => 36 + series * 8 + degree - 1,
            6..=9 => 36 + series * 8 + degree - 2,
            _ => {
                return Err(IthkuilError::malformed(
                    "Vc",
                    format!("degree {degree} does not mark a case"),
                ));
            }
        }
    } else {
        match degree {
            1..=9 => series * 9 + degree - 1,
            _ => {
                return Err(IthkuilError::malformed(
                    "Vc",
                    format!("degree {degree} does not mark a case"),
                ));
            }
        }
    };
    Case::from_index(index).ok_or_else(|| {
        IthkuilError::malformed("Vc", format!("no case at table position {index}"))
    })
}
