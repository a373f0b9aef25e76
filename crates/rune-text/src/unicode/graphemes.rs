use unicode_segmentation::UnicodeSegmentation;

/// Split text into user-perceived characters (extended grapheme clusters).
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ascii_graphemes() {
        assert_eq!(graphemes("abc"), vec!["a", "b", "c"]);
        assert_eq!(grapheme_count("abc"), 3);
    }

    #[test]
    fn combining_mark_stays_with_base() {
        let text = "a\u{0301}9"; // a + COMBINING ACUTE, then a digit
        assert_eq!(graphemes(text), vec!["a\u{0301}", "9"]);
    }

    #[test]
    fn emoji_zwj_sequence_is_single_cluster() {
        // Family: man, woman, girl, boy (uses ZWJ sequences)
        let text = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(graphemes(text), vec![text]);
        assert_eq!(grapheme_count(text), 1);
    }

    #[test]
    fn empty_text_has_no_clusters() {
        assert!(graphemes("").is_empty());
        assert_eq!(grapheme_count(""), 0);
    }
}
