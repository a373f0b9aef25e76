//! Counting how much of an aligned line changes.

use std::iter::Sum;
use std::ops::Add;

use crate::line::Line;
use crate::slot::CharacterSlot;

/// Slot-wise differences of one aligned line (or several, summed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Indices where the old and new slot differ.
    pub diff_count: usize,
    /// Differences where either side is a placeholder.
    pub placeholder_diff_count: usize,
}

impl DiffStats {
    /// Compare two index-aligned slot sequences.
    pub fn of(old: &[CharacterSlot], new: &[CharacterSlot]) -> Self {
        old.iter()
            .zip(new)
            .filter(|(o, n)| o != n)
            .fold(Self::default(), |mut acc, (o, n)| {
                acc.diff_count += 1;
                if o.is_placeholder() || n.is_placeholder() {
                    acc.placeholder_diff_count += 1;
                }
                acc
            })
    }

    /// Weight used to size the animation: placeholder differences count twice.
    pub fn weight(&self) -> usize {
        self.diff_count + self.placeholder_diff_count
    }
}

impl Add for DiffStats {
    type Output = DiffStats;

    fn add(self, rhs: Self) -> Self {
        Self {
            diff_count: self.diff_count + rhs.diff_count,
            placeholder_diff_count: self.placeholder_diff_count + rhs.placeholder_diff_count,
        }
    }
}

impl Sum for DiffStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Sum of `diff_count + placeholder_diff_count` over all lines.
pub fn total_diff_weight(lines: &[Line]) -> usize {
    lines.iter().map(Line::diff_stats).sum::<DiffStats>().weight()
}
