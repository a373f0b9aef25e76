//! Per-line alignment of old and new grapheme sequences.
//!
//! Characters pair up by position. When both lines contain numbers and the
//! line lengths differ, digit runs are paired in order and the shorter run
//! of each pair receives placeholders at its start, so a growing number
//! (`99 → 100`) gains its new digit on the left instead of shifting every
//! digit one slot over. Remaining length differences are closed with
//! trailing placeholders.

use std::cmp::Ordering;

use crate::numeric::{scan_numeric_runs, NumericRun};
use crate::slot::CharacterSlot;

/// Insert `count` placeholders before the grapheme at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Insertion {
    offset: usize,
    count: usize,
}

/// Placeholder insertions for both sides, in ascending offset order.
#[derive(Debug, Default, PartialEq, Eq)]
struct InsertionPlan {
    old: Vec<Insertion>,
    new: Vec<Insertion>,
}

impl InsertionPlan {
    /// Pair runs in order; runs past the shorter list stay unrefined.
    fn for_runs(old_runs: &[NumericRun], new_runs: &[NumericRun]) -> Self {
        let mut plan = Self::default();
        for (old_run, new_run) in old_runs.iter().zip(new_runs) {
            match old_run.len().cmp(&new_run.len()) {
                Ordering::Greater => plan.new.push(Insertion {
                    offset: new_run.start,
                    count: old_run.len() - new_run.len(),
                }),
                Ordering::Less => plan.old.push(Insertion {
                    offset: old_run.start,
                    count: new_run.len() - old_run.len(),
                }),
                Ordering::Equal => {}
            }
        }
        plan
    }
}

/// Build the slot sequence for one side in a single pass.
fn materialize<S: AsRef<str>>(graphemes: &[S], insertions: &[Insertion]) -> Vec<CharacterSlot> {
    let extra: usize = insertions.iter().map(|i| i.count).sum();
    let mut slots = Vec::with_capacity(graphemes.len() + extra);
    let mut pending = insertions.iter().peekable();

    for (idx, g) in graphemes.iter().enumerate() {
        while let Some(ins) = pending.next_if(|ins| ins.offset <= idx) {
            slots.extend(std::iter::repeat_n(CharacterSlot::Placeholder, ins.count));
        }
        slots.push(CharacterSlot::from(g.as_ref()));
    }
    for ins in pending {
        slots.extend(std::iter::repeat_n(CharacterSlot::Placeholder, ins.count));
    }

    slots
}

/// Close any remaining length difference at the end of the lines.
///
/// The longer side sheds a trailing placeholder when it has one; otherwise
/// the shorter side gains one. Concrete graphemes are never removed.
fn equalize(old: &mut Vec<CharacterSlot>, new: &mut Vec<CharacterSlot>) {
    while old.len() != new.len() {
        let (longer, shorter) = if old.len() > new.len() {
            (&mut *old, &mut *new)
        } else {
            (&mut *new, &mut *old)
        };
        if longer.last().is_some_and(CharacterSlot::is_placeholder) {
            longer.pop();
        } else {
            shorter.push(CharacterSlot::Placeholder);
        }
    }
}

/// Align one old line with one new line.
///
/// Returns `(old_slots, new_slots)` of equal length where slot `i` of the
/// old line transitions into slot `i` of the new line.
///
/// # Panics
/// Panics if the sequences end up with different lengths, which would be
/// a bug in this module.
pub fn align_line<S: AsRef<str>>(old: &[S], new: &[S]) -> (Vec<CharacterSlot>, Vec<CharacterSlot>) {
    let plan = if old.len() != new.len() {
        let old_runs = scan_numeric_runs(old);
        let new_runs = scan_numeric_runs(new);
        if old_runs.is_empty() || new_runs.is_empty() {
            InsertionPlan::default()
        } else {
            InsertionPlan::for_runs(&old_runs, &new_runs)
        }
    } else {
        InsertionPlan::default()
    };

    let mut old_slots = materialize(old, &plan.old);
    let mut new_slots = materialize(new, &plan.new);
    equalize(&mut old_slots, &mut new_slots);

    assert_eq!(
        old_slots.len(),
        new_slots.len(),
        "aligned slot sequences must have equal length"
    );
    (old_slots, new_slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rune_text::unicode::graphemes;

    const P: Option<&str> = None;

    fn slots(values: &[Option<&str>]) -> Vec<CharacterSlot> {
        values
            .iter()
            .map(|v| match v {
                Some(g) => CharacterSlot::from(*g),
                None => CharacterSlot::Placeholder,
            })
            .collect()
    }

    fn align(old: &str, new: &str) -> (Vec<CharacterSlot>, Vec<CharacterSlot>) {
        align_line(&graphemes(old), &graphemes(new))
    }

    #[test]
    fn digit_growth_pads_old_run_start() {
        let (old, new) = align("9", "10");
        assert_eq!(old, slots(&[P, Some("9")]));
        assert_eq!(new, slots(&[Some("1"), Some("0")]));
    }

    #[test]
    fn digit_shrink_pads_new_run_start() {
        let (old, new) = align("100", "9");
        assert_eq!(old, slots(&[Some("1"), Some("0"), Some("0")]));
        assert_eq!(new, slots(&[P, P, Some("9")]));
    }

    #[test]
    fn no_digits_aligns_positionally() {
        let (old, new) = align("abc", "abcdef");
        assert_eq!(old, slots(&[Some("a"), Some("b"), Some("c"), P, P, P]));
        assert_eq!(
            new,
            slots(&[Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f")])
        );
    }

    #[test]
    fn identical_lines_have_no_placeholders() {
        let (old, new) = align("total: 42", "total: 42");
        assert_eq!(old, new);
        assert!(old.iter().all(|s| !s.is_placeholder()));
    }

    #[test]
    fn every_run_pair_is_refined() {
        let (old, new) = align("1 of 9", "10 of 10");
        assert_eq!(
            old,
            slots(&[P, Some("1"), Some(" "), Some("o"), Some("f"), Some(" "), P, Some("9")])
        );
        assert_eq!(new.len(), 8);
        assert!(new.iter().all(|s| !s.is_placeholder()));
    }

    #[test]
    fn unmatched_runs_align_positionally() {
        let (old, new) = align("1 2 3", "10 2");
        assert_eq!(
            old,
            slots(&[P, Some("1"), Some(" "), Some("2"), Some(" "), Some("3")])
        );
        assert_eq!(
            new,
            slots(&[Some("1"), Some("0"), Some(" "), Some("2"), P, P])
        );
    }

    #[test]
    fn equal_lengths_skip_numeric_refinement() {
        let (old, new) = align("12a", "1ab");
        assert_eq!(old, slots(&[Some("1"), Some("2"), Some("a")]));
        assert_eq!(new, slots(&[Some("1"), Some("a"), Some("b")]));
    }

    #[test]
    fn digits_on_one_side_only_align_positionally() {
        let (old, new) = align("n/a", "1024");
        assert_eq!(old, slots(&[Some("n"), Some("/"), Some("a"), P]));
        assert_eq!(new.len(), 4);
    }

    #[test]
    fn trailing_text_after_growing_number() {
        let (old, new) = align("x 99", "x 100y");
        assert_eq!(
            old,
            slots(&[Some("x"), Some(" "), P, Some("9"), Some("9"), P])
        );
        assert_eq!(new.len(), 6);
    }

    #[test]
    fn grapheme_clusters_occupy_one_slot() {
        let (old, new) = align("e\u{0301} 9", "e\u{0301} 10");
        assert_eq!(old, slots(&[Some("e\u{0301}"), Some(" "), P, Some("9")]));
        assert_eq!(new[0], CharacterSlot::from("e\u{0301}"));
    }

    #[test]
    fn empty_lines() {
        let (old, new) = align("", "");
        assert!(old.is_empty() && new.is_empty());

        let (old, new) = align("", "42");
        assert_eq!(old, slots(&[P, P]));
        assert_eq!(new, slots(&[Some("4"), Some("2")]));
    }

    #[test]
    fn lengths_always_match() {
        let pairs = [
            ("", "1"),
            ("9", "10"),
            ("999 items", "1000 items"),
            ("v1.2.3", "v1.10.0-rc1"),
            ("$1,000,000", "$999"),
            ("a1b22c333", "a4444b5c"),
            ("12:59", "1:00"),
            ("no numbers", "still none here"),
        ];
        for (old, new) in pairs {
            let (o, n) = align(old, new);
            assert_eq!(o.len(), n.len(), "{old:?} -> {new:?}");
            let (o, n) = align(new, old);
            assert_eq!(o.len(), n.len(), "{new:?} -> {old:?}");
        }
    }

    #[test]
    fn concrete_graphemes_are_preserved() {
        let (old, new) = align("$1,000,000", "$999");
        let concrete: String = old.iter().filter_map(CharacterSlot::as_str).collect();
        assert_eq!(concrete, "$1,000,000");
        let concrete: String = new.iter().filter_map(CharacterSlot::as_str).collect();
        assert_eq!(concrete, "$999");
    }

    #[test]
    fn equalize_drops_trailing_placeholder_first() {
        let mut old = slots(&[Some("a"), P]);
        let mut new = slots(&[Some("b")]);
        equalize(&mut old, &mut new);
        assert_eq!(old, slots(&[Some("a")]));
        assert_eq!(new, slots(&[Some("b")]));
    }

    #[test]
    fn plan_pairs_runs_in_order() {
        let old = [NumericRun { start: 0, end: 1 }, NumericRun { start: 4, end: 7 }];
        let new = [NumericRun { start: 0, end: 3 }];
        let plan = InsertionPlan::for_runs(&old, &new);
        assert_eq!(plan.old, vec![Insertion { offset: 0, count: 2 }]);
        assert!(plan.new.is_empty());
    }
}
