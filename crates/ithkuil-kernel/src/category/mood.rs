//! Mood and case-scope share Slot VIII's consonant (Cn). Which one a Cn
//! means depends on the formative: verbal formatives carry a mood, nominal
//! and framed ones a case-scope.

use crate::error::{IthkuilError, Result};

tag_enum! {
    pub enum Mood {
        Fac => "FAC",
        Sub => "SUB",
        Asm => "ASM",
        Spc => "SPC",
        Cou => "COU",
        Hyp => "HYP",
    }
}

tag_enum! {
    pub enum CaseScope {
        Ccn => "CCN",
        Cca => "CCA",
        Ccs => "CCS",
        Ccq => "CCQ",
        Ccp => "CCP",
        Ccv => "CCV",
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::Fac
    }
}

impl Default for CaseScope {
    fn default() -> Self {
        Self::Ccn
    }
}

const NON_ASPECTUAL: [&str; 6] = ["h", "hl", "hr", "hm", "hn", "hň"];
const ASPECTUAL: [&str; 6] = ["w", "hw", "hrw", "hmw", "hnw", "hňw"];

/// One of the six Cn values, before it is read as a mood or a case-scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodOrCaseScope {
    Mood(Mood),
    CaseScope(CaseScope),
}

impl MoodOrCaseScope {
    pub fn index(self) -> usize {
        match self {
            Self::Mood(mood) => mood.index(),
            Self::CaseScope(scope) => scope.index(),
        }
    }

    /// FAC and CCN, which need no Cn of their own.
    pub fn is_default(self) -> bool {
        self.index() == 0
    }

    /// Cn spelling. Aspects take the `w` series.
    pub fn to_cn(self, is_aspectual: bool) -> &'static str {
        if is_aspectual {
            ASPECTUAL[self.index()]
        } else {
            NON_ASPECTUAL[self.index()]
        }
    }

    /// Stand-in for Slot VI when Slot VIII is folded into it. `None` for
    /// FAC and CCN.
    pub fn to_shortcut_ca(self) -> Option<&'static str> {
        if self.is_default() {
            None
        } else {
            Some(NON_ASPECTUAL[self.index()])
        }
    }
}

impl From<Mood> for MoodOrCaseScope {
    fn from(mood: Mood) -> Self {
        Self::Mood(mood)
    }
}

impl From<CaseScope> for MoodOrCaseScope {
    fn from(scope: CaseScope) -> Self {
        Self::CaseScope(scope)
    }
}

/// A decoded Cn: its table position and whether it was aspectual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cn {
    pub index: usize,
    pub is_aspectual: bool,
}

impl Cn {
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(index) = NON_ASPECTUAL.iter().position(|&cn| cn == text) {
            return Some(Self {
                index,
                is_aspectual: false,
            });
        }
        ASPECTUAL.iter().position(|&cn| cn == text).map(|index| Self {
            index,
            is_aspectual: true,
        })
    }

    /// A Cn standing in Slot VI; only the five non-default, non-aspectual
    /// values qualify.
    pub fn parse_shortcut_ca(text: &str) -> Option<Self> {
        Self::parse(text).filter(|cn| !cn.is_aspectual && cn.index != 0)
    }

    pub fn as_mood(self) -> Result<Mood> {
        Mood::from_index(self.index)
            .ok_or_else(|| IthkuilError::malformed("Cn", format!("no mood at {}", self.index)))
    }

    pub fn as_case_scope(self) -> Result<CaseScope> {
        CaseScope::from_index(self.index).ok_or_else(|| {
            IthkuilError::malformed("Cn", format!("no case-scope at {}", self.index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_have_no_shortcut_form() {
        assert_eq!(MoodOrCaseScope::from(Mood::Fac).to_shortcut_ca(), None);
        assert_eq!(MoodOrCaseScope::from(CaseScope::Ccn).to_shortcut_ca(), None);
        assert_eq!(MoodOrCaseScope::from(CaseScope::Ccs).to_shortcut_ca(), Some("hr"));
    }

    #[test]
    fn cn_round_trips_both_series() {
        for &mood in Mood::ALL {
            for is_aspectual in [false, true] {
                let cn = MoodOrCaseScope::from(mood).to_cn(is_aspectual);
                let parsed = Cn::parse(cn).unwrap();
                assert_eq!(parsed.is_aspectual, is_aspectual);
                assert_eq!(parsed.as_mood().unwrap(), mood);
            }
        }
    }

    #[test]
    fn shortcut_ca_excludes_default_and_aspectual_forms() {
        assert!(Cn::parse_shortcut_ca("h").is_none());
        assert!(Cn::parse_shortcut_ca("hw").is_none());
        assert_eq!(Cn::parse_shortcut_ca("hň").unwrap().as_case_scope().unwrap(), CaseScope::Ccv);
    }
}
