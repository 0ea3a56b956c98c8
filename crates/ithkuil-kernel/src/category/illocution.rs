use crate::error::{IthkuilError, Result};
use crate::vowel_form::VowelForm;

tag_enum! {
    /// Slot IX of an unframed verbal formative. Assertive illocution is
    /// written through its validation; the other illocutions stand alone.
    pub enum IllocutionValidation {
        Obs => "OBS", Rec => "REC", Pup => "PUP", Rpr => "RPR", Usp => "USP",
        Ima => "IMA", Cvn => "CVN", Itu => "ITU", Inf => "INF",
        Dir => "DIR", Dec => "DEC", Irg => "IRG", Ver => "VER",
        Adm => "ADM", Pot => "POT", Hor => "HOR", Cnj => "CNJ",
    }
}

impl Default for IllocutionValidation {
    fn default() -> Self {
        Self::Obs
    }
}

impl IllocutionValidation {
    pub fn is_assertive(self) -> bool {
        self.index() < 9
    }

    pub fn to_vowel(self) -> VowelForm {
        let index = self.index();
        if self.is_assertive() {
            return VowelForm::new(1, index as u8 + 1);
        }
        let offset = (index - 9) as u8;
        VowelForm::new(2, if offset < 4 { offset + 1 } else { offset + 2 })
    }

    pub fn from_vowel(form: VowelForm) -> Result<Self> {
        let index = match (form.sequence, form.degree) {
            (1, degree @ 1..=9) => usize::from(degree) - 1,
            (2, degree @ 1..=4) => 9 + usize::from(degree) - 1,
            (2, degree @ 6..=9) => 9 + usize::from(degree) - 2,
            _ => {
                return Err(IthkuilError::malformed(
                    "Vk",
                    format!("`{}` is not an illocution or validation", form.to_text(false)),
                ));
            }
        };
        Self::from_index(index)
            .ok_or_else(|| IthkuilError::malformed("Vk", format!("position {index}")))
    }
}
