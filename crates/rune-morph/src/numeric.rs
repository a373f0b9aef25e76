//! Detection of decimal digit runs within a line.

/// A maximal run of decimal digits, in grapheme offsets (`end` exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRun {
    pub start: usize,
    pub end: usize,
}

impl NumericRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Whether a grapheme cluster is exactly one ASCII digit.
///
/// Clusters such as keycaps (`1\u{20E3}`) are not digits.
pub fn is_decimal_digit(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}

/// Find all maximal digit runs, ordered by start offset.
///
/// Signs, separators and decimal points end a run: `-1,000.5` has the
/// runs `1`, `000` and `5`.
pub fn scan_numeric_runs<S: AsRef<str>>(graphemes: &[S]) -> Vec<NumericRun> {
    let mut runs = Vec::new();
    let mut start = None;

    for (idx, g) in graphemes.iter().enumerate() {
        match (is_decimal_digit(g.as_ref()), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                runs.push(NumericRun { start: s, end: idx });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(NumericRun {
            start: s,
            end: graphemes.len(),
        });
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(start: usize, end: usize) -> NumericRun {
        NumericRun { start, end }
    }

    #[test]
    fn no_digits_no_runs() {
        assert!(scan_numeric_runs(&["a", "b", " "]).is_empty());
        assert!(scan_numeric_runs::<&str>(&[]).is_empty());
    }

    #[test]
    fn runs_are_maximal_and_ordered() {
        let line = ["x", "1", "2", " ", "3", "4", "5"];
        assert_eq!(scan_numeric_runs(&line), vec![run(1, 3), run(4, 7)]);
        assert_eq!(scan_numeric_runs(&line)[1].len(), 3);
    }

    #[test]
    fn punctuation_splits_runs() {
        let line = ["-", "1", ",", "0", "0", "0", ".", "5"];
        assert_eq!(
            scan_numeric_runs(&line),
            vec![run(1, 2), run(3, 6), run(7, 8)]
        );
    }

    #[test]
    fn only_ascii_single_char_digits_count() {
        assert!(is_decimal_digit("7"));
        assert!(!is_decimal_digit("1\u{20E3}"));
        assert!(!is_decimal_digit("\u{0663}")); // ARABIC-INDIC DIGIT THREE
        assert!(!is_decimal_digit(""));
    }
}
