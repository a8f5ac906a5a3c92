//! Sets of characters a field accepts.

use std::collections::BTreeSet;
use unicode_general_category::{get_general_category, GeneralCategory};

/// The characters a pincode field will accept on insert.
///
/// Membership is tested one Unicode scalar at a time.
///
/// ```rust
/// use bubbletea_pincode::pincode::CharacterSet;
///
/// assert!(CharacterSet::Alphanumeric.contains('z'));
/// assert!(!CharacterSet::Digits.contains('z'));
///
/// let hex: CharacterSet = "0123456789abcdef".into();
/// assert!(hex.contains('c'));
/// assert!(!hex.contains('g'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// Letters, marks and numbers from any script, by Unicode general
    /// category (L*, M* and N*).
    #[default]
    Alphanumeric,
    /// ASCII decimal digits only.
    Digits,
    /// An explicit list of characters.
    Custom(BTreeSet<char>),
}

impl CharacterSet {
    /// Reports whether `ch` is a member of this set.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            CharacterSet::Alphanumeric => is_letter_mark_or_number(ch),
            CharacterSet::Digits => ch.is_ascii_digit(),
            CharacterSet::Custom(chars) => chars.contains(&ch),
        }
    }

    /// Reports whether every character of `runes` is a member.
    pub fn contains_all(&self, runes: &[char]) -> bool {
        runes.iter().all(|&c| self.contains(c))
    }
}

fn is_letter_mark_or_number(ch: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(ch),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        CharacterSet::Custom(iter.into_iter().collect())
    }
}

impl From<&str> for CharacterSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}
