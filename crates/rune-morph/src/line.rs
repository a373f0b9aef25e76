use rune_text::{LineMetrics, TextLayout};

use crate::align::align_line;
use crate::diff::DiffStats;
use crate::slot::CharacterSlot;

/// One old line paired with one new line, aligned slot by slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub old_metrics: Option<LineMetrics>,
    pub new_metrics: Option<LineMetrics>,
    /// Same length as `new_slots`; slot `i` transitions into `new_slots[i]`.
    pub old_slots: Vec<CharacterSlot>,
    pub new_slots: Vec<CharacterSlot>,
}

impl Line {
    pub fn align<S: AsRef<str>>(
        old_metrics: Option<LineMetrics>,
        new_metrics: Option<LineMetrics>,
        old: &[S],
        new: &[S],
    ) -> Self {
        let (old_slots, new_slots) = align_line(old, new);
        Self {
            old_metrics,
            new_metrics,
            old_slots,
            new_slots,
        }
    }

    pub fn len(&self) -> usize {
        self.old_slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_slots.is_empty()
    }

    pub fn diff_stats(&self) -> DiffStats {
        DiffStats::of(&self.old_slots, &self.new_slots)
    }

    pub fn diff_count(&self) -> usize {
        self.diff_stats().diff_count
    }

    pub fn placeholder_diff_count(&self) -> usize {
        self.diff_stats().placeholder_diff_count
    }

    /// Old/new slot pairs in index order.
    pub fn slot_pairs(&self) -> impl Iterator<Item = (&CharacterSlot, &CharacterSlot)> {
        self.old_slots.iter().zip(&self.new_slots)
    }
}

/// Pair old and new lines by index and align each pair.
///
/// Only `min(old lines, new lines)` pairs are produced; trailing lines
/// present on one side only are left to the render surface.
pub fn align_layouts(old: &TextLayout, new: &TextLayout) -> Vec<Line> {
    let count = old.line_count().min(new.line_count());
    (0..count)
        .map(|i| {
            Line::align(
                old.lines().get(i).cloned(),
                new.lines().get(i).cloned(),
                &old.line_graphemes(i),
                &new.line_graphemes(i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rune_text::{FixedAdvanceLayout, LayoutConstraints, LayoutEngine, TextStyle};

    fn layout(text: &str) -> TextLayout {
        FixedAdvanceLayout::default().layout(
            text,
            &TextStyle::default(),
            &LayoutConstraints::UNCONSTRAINED,
        )
    }

    #[test]
    fn identical_text_has_no_diffs() {
        let text = layout("Balance\n$1,024.00");
        let lines = align_layouts(&text, &text);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.diff_count(), 0);
            assert!(line.old_slots.iter().all(|s| !s.is_placeholder()));
        }
    }

    #[test]
    fn lines_are_independent() {
        let old = layout("Score\n99");
        let new = layout("Score\n100");
        let lines = align_layouts(&old, &new);
        assert_eq!(lines[0].diff_count(), 0);
        assert_eq!(lines[1].diff_count(), 3);
        assert_eq!(lines[1].placeholder_diff_count(), 1);
    }

    #[test]
    fn unmatched_lines_are_not_aligned() {
        let old = layout("a\nb\nc");
        let new = layout("a");
        let lines = align_layouts(&old, &new);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].old_metrics.is_some());
        assert!(lines[0].new_metrics.is_some());
    }

    #[test]
    fn metrics_follow_their_line() {
        let old = layout("1\n22");
        let new = layout("1\n333");
        let lines = align_layouts(&old, &new);
        let second = &lines[1];
        assert_eq!(second.old_metrics.as_ref().map(|m| m.line_number), Some(1));
        assert_eq!(second.new_metrics.as_ref().map(|m| m.text_range.clone()), Some(2..5));
        assert_eq!(second.len(), 3);
    }
}
