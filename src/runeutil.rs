//! Character helpers shared by input components.
//!
//! Line-break handling follows the Unicode notion of a newline rather than
//! just `'\n'`: carriage return, vertical tab, form feed, NEL and the
//! line/paragraph separators all count, so a pasted `"\r\n"` behaves the same
//! as a pressed Enter key.

/// Reports whether `ch` is a line-break character.
///
/// ```rust
/// use bubbletea_pincode::runeutil::is_line_break;
///
/// assert!(is_line_break('\n'));
/// assert!(is_line_break('\u{2028}'));
/// assert!(!is_line_break(' '));
/// ```
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\u{000A}'..='\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Reports whether `runes` is non-empty and made only of line breaks.
///
/// Used to tell a "return" signal apart from text that merely contains one.
pub fn is_only_line_breaks(runes: &[char]) -> bool {
    !runes.is_empty() && runes.iter().all(|&c| is_line_break(c))
}

/// Reports whether `runes` contains any line break.
pub fn contains_line_break(runes: &[char]) -> bool {
    runes.iter().any(|&c| is_line_break(c))
}

/// Collects `s` into scalars, dropping line breaks and keeping at most
/// `limit` of the remaining characters.
///
/// ```rust
/// use bubbletea_pincode::runeutil::sanitize_value;
///
/// assert_eq!(sanitize_value("12\n34\r\n56", 5), vec!['1', '2', '3', '4', '5']);
/// ```
pub fn sanitize_value(s: &str, limit: usize) -> Vec<char> {
    s.chars().filter(|&c| !is_line_break(c)).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_set() {
        for ch in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}'] {
            assert!(is_line_break(ch), "{:?} should be a line break", ch);
        }
        for ch in ['a', '1', ' ', '\t', '•'] {
            assert!(!is_line_break(ch), "{:?} should not be a line break", ch);
        }
    }

    #[test]
    fn test_only_line_breaks() {
        assert!(is_only_line_breaks(&['\r', '\n']));
        assert!(!is_only_line_breaks(&['\n', 'a']));
        assert!(!is_only_line_breaks(&[]));
        assert!(contains_line_break(&['a', '\n']));
        assert!(!contains_line_break(&['a', 'b']));
    }

    #[test]
    fn test_sanitize_counts_scalars_not_bytes() {
        assert_eq!(sanitize_value("ééé", 2), vec!['é', 'é']);
        assert_eq!(sanitize_value("", 4), Vec::<char>::new());
    }
}
