//! Per-slot glyph lookup.

/// Answers which glyph, if any, occupies a slot.
///
/// A source borrows the field's text and placeholder and holds no state of
/// its own, so it can be rebuilt for every render and queried any number of
/// times. Indices count Unicode scalars.
///
/// ```rust
/// use bubbletea_pincode::pincode::CharacterSource;
///
/// let text: Vec<char> = "12".chars().collect();
/// let placeholder: Vec<char> = "----".chars().collect();
/// let source = CharacterSource::new(Some(&text[..]), Some(&placeholder[..]), true, '•');
///
/// assert_eq!(source.character_at(0), Some('•'));
/// assert_eq!(source.character_at(2), Some('-'));
/// assert_eq!(source.character_at(4), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CharacterSource<'a> {
    text: &'a [char],
    placeholder: &'a [char],
    secure: bool,
    mask: char,
}

impl<'a> CharacterSource<'a> {
    /// Creates a source. Absent text or placeholder count as zero length.
    pub fn new(
        text: Option<&'a [char]>,
        placeholder: Option<&'a [char]>,
        secure: bool,
        mask: char,
    ) -> Self {
        Self {
            text: text.unwrap_or_default(),
            placeholder: placeholder.unwrap_or_default(),
            secure,
            mask,
        }
    }

    /// Glyph at slot `i`.
    ///
    /// Entered characters win over the placeholder and are replaced by the
    /// mask in secure mode. Placeholder characters are never masked.
    pub fn character_at(&self, i: usize) -> Option<char> {
        if i < self.text.len() {
            Some(if self.secure { self.mask } else { self.text[i] })
        } else {
            self.placeholder.get(i).copied()
        }
    }

    /// Number of entered characters.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Reports whether slot `i` is past the entered text.
    pub fn is_placeholder(&self, i: usize) -> bool {
        i >= self.text.len()
    }
}
