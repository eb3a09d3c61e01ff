//! Grapheme helpers shared by the resolver and the five-grid calculator.
//!
//! All text is brought to NFC before it is split, so precomposed and
//! decomposed spellings of the same visible character agree.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Canonical composed form of `text`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Extended grapheme clusters of the NFC form of `text`.
#[must_use]
pub fn graphemes(text: &str) -> Vec<String> {
    normalize(text)
        .graphemes(true)
        .map(str::to_owned)
        .collect()
}

/// Number of graphemes after normalization.
#[must_use]
pub fn grapheme_len(text: &str) -> usize {
    normalize(text).graphemes(true).count()
}

#[must_use]
pub fn first_grapheme(text: &str) -> Option<String> {
    normalize(text).graphemes(true).next().map(str::to_owned)
}

#[must_use]
pub fn last_grapheme(text: &str) -> Option<String> {
    normalize(text).graphemes(true).next_back().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_composes_dakuten() {
        // "か" + combining voiced mark composes to "が"
        assert_eq!(normalize("\u{304B}\u{3099}"), "\u{304C}");
    }

    #[test]
    fn test_boundary_graphemes() {
        assert_eq!(first_grapheme("太郎").as_deref(), Some("太"));
        assert_eq!(last_grapheme("田中").as_deref(), Some("中"));
        assert_eq!(first_grapheme(""), None);
        assert_eq!(last_grapheme(""), None);
    }

    #[test]
    fn test_single_grapheme_is_both_ends() {
        assert_eq!(first_grapheme("林").as_deref(), Some("林"));
        assert_eq!(last_grapheme("林").as_deref(), Some("林"));
    }

    #[test]
    fn test_combining_sequence_is_one_grapheme() {
        assert_eq!(grapheme_len("e\u{0301}"), 1);
        // variation selector stays attached to its base
        assert_eq!(grapheme_len("葛\u{E0100}"), 1);
    }
}
