//! Sizing the animation from the amount of change.
//!
//! Every differing slot gets the full base duration, and each successive
//! differing slot starts `stagger_delay` later. The total duration grows
//! with the diff weight so the last slot still finishes on time.

use crate::diff::total_diff_weight;
use crate::line::Line;

/// Base duration used when none is configured.
pub const DEFAULT_BASE_DURATION_MS: f32 = 150.0;

/// Stagger delay as a fraction of the base duration.
pub const STAGGER_RATIO: f32 = 0.18;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub base_duration_ms: f32,
    pub stagger_delay_ms: f32,
    pub total_diff_weight: usize,
    pub total_duration_ms: f32,
}

impl Timeline {
    pub fn new(base_duration_ms: f32, total_diff_weight: usize) -> Self {
        let stagger_delay_ms = base_duration_ms * STAGGER_RATIO;
        // The first difference is covered by the base duration.
        let extra_steps = total_diff_weight.saturating_sub(1);
        Self {
            base_duration_ms,
            stagger_delay_ms,
            total_diff_weight,
            total_duration_ms: base_duration_ms + stagger_delay_ms * extra_steps as f32,
        }
    }

    pub fn for_lines(base_duration_ms: f32, lines: &[Line]) -> Self {
        Self::new(base_duration_ms, total_diff_weight(lines))
    }

    /// Stagger delay relative to the total duration.
    pub fn delay_fraction(&self) -> f32 {
        self.stagger_delay_ms / self.total_duration_ms
    }

    /// Base duration relative to the total duration.
    pub fn duration_fraction(&self) -> f32 {
        self.base_duration_ms / self.total_duration_ms
    }

    /// Local progress of the differing slot with the given stagger index.
    pub fn slot_progress(&self, progress: f32, stagger_index: usize) -> f32 {
        local_progress(
            progress,
            self.delay_fraction(),
            self.duration_fraction(),
            stagger_index,
        )
    }
}

/// Map global progress in `[0, 1]` to a slot's own progress in `[0, 1]`.
///
/// The slot starts at `stagger_index * delay_fraction` and runs for
/// `duration_fraction` of the global timeline.
pub fn local_progress(
    progress: f32,
    delay_fraction: f32,
    duration_fraction: f32,
    stagger_index: usize,
) -> f32 {
    if progress >= 1.0 || duration_fraction <= 0.0 {
        return if progress >= 1.0 { 1.0 } else { 0.0 };
    }
    let start = stagger_index as f32 * delay_fraction;
    ((progress - start) / duration_fraction).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn small_changes_take_the_base_duration() {
        assert_eq!(Timeline::new(150.0, 0).total_duration_ms, 150.0);
        assert_eq!(Timeline::new(150.0, 1).total_duration_ms, 150.0);
    }

    #[test]
    fn each_extra_weight_adds_one_stagger() {
        let timeline = Timeline::new(150.0, 3);
        assert!(approx_eq(timeline.stagger_delay_ms, 27.0));
        assert!(approx_eq(timeline.total_duration_ms, 204.0));
    }

    #[test]
    fn duration_is_monotonic_in_weight() {
        let mut previous = 0.0;
        for weight in 0..64 {
            let total = Timeline::new(200.0, weight).total_duration_ms;
            assert!(total >= previous);
            assert!(total >= 200.0);
            previous = total;
        }
    }

    #[test]
    fn fractions_are_relative_to_total() {
        let timeline = Timeline::new(100.0, 11);
        // 100 + 18 * 10 = 280
        assert!(approx_eq(timeline.total_duration_ms, 280.0));
        assert!(approx_eq(timeline.delay_fraction(), 18.0 / 280.0));
        assert!(approx_eq(timeline.duration_fraction(), 100.0 / 280.0));
    }

    #[test]
    fn single_slot_follows_global_progress() {
        let timeline = Timeline::new(150.0, 1);
        assert!(approx_eq(timeline.slot_progress(0.0, 0), 0.0));
        assert!(approx_eq(timeline.slot_progress(0.5, 0), 0.5));
        assert!(approx_eq(timeline.slot_progress(1.0, 0), 1.0));
    }

    #[test]
    fn later_slots_start_later() {
        let timeline = Timeline::new(100.0, 3);
        let p = 0.3;
        let first = timeline.slot_progress(p, 0);
        let second = timeline.slot_progress(p, 1);
        let third = timeline.slot_progress(p, 2);
        assert!(first > second && second > third);
        assert_eq!(timeline.slot_progress(0.0, 2), 0.0);
    }

    #[test]
    fn last_slot_finishes_by_the_end() {
        let timeline = Timeline::new(150.0, 5);
        let end_of_last = 4.0 * timeline.delay_fraction() + timeline.duration_fraction();
        assert!(end_of_last <= 1.0 + EPSILON);
        assert_eq!(timeline.slot_progress(1.0, 4), 1.0);
    }
}
