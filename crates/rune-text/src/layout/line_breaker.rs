use unicode_linebreak::linebreaks;

/// Byte offsets of all UAX-14 line break opportunities in `text`, each
/// pointing just past the break, via the `unicode-linebreak` crate.
///
/// Mandatory and allowed breaks are returned alike; end of text is
/// always the last entry for non-empty input.
pub fn compute_line_breaks(text: &str) -> Vec<usize> {
    linebreaks(text).map(|(offset, _)| offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_after_spaces() {
        assert_eq!(compute_line_breaks("total 1024 items"), vec![6, 11, 16]);
    }

    #[test]
    fn digits_are_not_split() {
        assert_eq!(compute_line_breaks("12345"), vec![5]);
    }
}
