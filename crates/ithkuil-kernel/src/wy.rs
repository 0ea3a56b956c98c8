//! Morphemes whose spelling depends on the preceding letter.
//!
//! Several Series 3 vowels change shape after `w` or `y` (`ia` becomes `uä`
//! after `y`, `uo` becomes `öä` after `w`). A [`WithWyAlternative`] carries
//! all three spellings until the text in front of it is known.

use std::fmt;
use std::ops::Add;

/// Three parallel spellings of one morpheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WithWyAlternative {
    /// Spelling after anything other than `w` or `y`.
    pub default_value: String,
    /// Spelling after `w`.
    pub value_after_w: String,
    /// Spelling after `y`.
    pub value_after_y: String,
}

impl WithWyAlternative {
    pub const EMPTY: WithWyAlternative = WithWyAlternative {
        default_value: String::new(),
        value_after_w: String::new(),
        value_after_y: String::new(),
    };

    pub fn new(
        default_value: impl Into<String>,
        value_after_w: impl Into<String>,
        value_after_y: impl Into<String>,
    ) -> Self {
        Self {
            default_value: default_value.into(),
            value_after_w: value_after_w.into(),
            value_after_y: value_after_y.into(),
        }
    }

    /// A morpheme spelled the same everywhere.
    pub fn of(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            default_value: text.clone(),
            value_after_w: text.clone(),
            value_after_y: text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.default_value.is_empty() && self.value_after_w.is_empty() && self.value_after_y.is_empty()
    }

    /// The spelling selected by the last letter of `previous`.
    pub fn with_previous_text(&self, previous: &str) -> &str {
        match previous.chars().last() {
            Some('w') => &self.value_after_w,
            Some('y') => &self.value_after_y,
            _ => &self.default_value,
        }
    }

    /// Applies `f` to each spelling independently.
    pub fn map(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            default_value: f(&self.default_value),
            value_after_w: f(&self.value_after_w),
            value_after_y: f(&self.value_after_y),
        }
    }

    /// Prefixes a fixed text to every spelling. The prefix becomes the
    /// context for this morpheme, so the morpheme is resolved against it.
    pub fn after(prefix: &str, next: &WithWyAlternative) -> Self {
        Self::of(format!("{prefix}{}", next.with_previous_text(prefix)))
    }

    fn resolved_after(&self, lead: char) -> &str {
        match lead {
            'w' => &self.value_after_w,
            'y' => &self.value_after_y,
            _ => &self.default_value,
        }
    }
}

impl Add for &WithWyAlternative {
    type Output = WithWyAlternative;

    /// Concatenation. Each of the three variants of the result is computed
    /// independently: the right operand sees the left operand's own variant
    /// (or, if that variant is empty, the context the left operand assumed).
    fn add(self, rhs: &WithWyAlternative) -> WithWyAlternative {
        let join = |lead: char| {
            let left = self.resolved_after(lead);
            let context = match left.chars().last() {
                Some(last) => last,
                None => lead,
            };
            format!("{left}{}", rhs.resolved_after(context))
        };
        WithWyAlternative {
            default_value: join('\0'),
            value_after_w: join('w'),
            value_after_y: join('y'),
        }
    }
}

impl Add for WithWyAlternative {
    type Output = WithWyAlternative;

    fn add(self, rhs: WithWyAlternative) -> WithWyAlternative {
        &self + &rhs
    }
}

impl From<&str> for WithWyAlternative {
    fn from(text: &str) -> Self {
        Self::of(text)
    }
}

impl From<String> for WithWyAlternative {
    fn from(text: String) -> Self {
        Self::of(text)
    }
}

impl fmt::Display for WithWyAlternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default_value)
    }
}
