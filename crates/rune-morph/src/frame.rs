//! Per-frame snapshot handed to the render surface.

use rune_text::{Size, TextLayout};

use crate::easing::Curve;
use crate::line::Line;
use crate::slot::CharacterSlot;
use crate::timeline::local_progress;

/// Everything a render surface needs to draw one frame.
///
/// The snapshot borrows the morph, so it stays consistent while drawing.
#[derive(Debug, Clone, Copy)]
pub struct MorphFrame<'a> {
    pub lines: &'a [Line],
    /// Global progress in `[0, 1]`.
    pub progress: f32,
    pub delay_fraction: f32,
    pub duration_fraction: f32,
    pub old_layout_size: Size,
    pub new_layout_size: Size,
    /// Full layouts, including lines that exist on one side only.
    pub old_layout: &'a TextLayout,
    pub new_layout: &'a TextLayout,
    pub curve: Curve,
}

/// One slot of one line at the current progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotFrame<'a> {
    pub line_index: usize,
    pub slot_index: usize,
    pub old: &'a CharacterSlot,
    pub new: &'a CharacterSlot,
    /// Position in the stagger order; `None` when the slot is unchanged.
    pub stagger_index: Option<usize>,
    /// Eased local progress; 1 for unchanged slots.
    pub progress: f32,
}

impl SlotFrame<'_> {
    pub fn is_changed(&self) -> bool {
        self.stagger_index.is_some()
    }
}

impl<'a> MorphFrame<'a> {
    /// All slots in line-major, slot-major order.
    ///
    /// Differing slots are numbered in that same order to stagger their
    /// start times.
    pub fn slots(&self) -> impl Iterator<Item = SlotFrame<'a>> {
        let (progress, delay, duration, curve) = (
            self.progress,
            self.delay_fraction,
            self.duration_fraction,
            self.curve,
        );
        let lines = self.lines;
        let mut next_stagger = 0usize;

        lines
            .iter()
            .enumerate()
            .flat_map(|(line_index, line)| {
                line.slot_pairs()
                    .enumerate()
                    .map(move |(slot_index, (old, new))| (line_index, slot_index, old, new))
            })
            .map(move |(line_index, slot_index, old, new)| {
                let stagger_index = (old != new).then(|| {
                    let index = next_stagger;
                    next_stagger += 1;
                    index
                });
                let progress = match stagger_index {
                    Some(index) => curve.evaluate(local_progress(progress, delay, duration, index)),
                    None => 1.0,
                };
                SlotFrame {
                    line_index,
                    slot_index,
                    old,
                    new,
                    stagger_index,
                    progress,
                }
            })
    }

    /// Whether every slot has reached its new value.
    pub fn is_settled(&self) -> bool {
        self.slots().all(|slot| slot.progress >= 1.0)
    }
}

/// Draws frames. Glyph placement, opacity and slide interpolation are up to
/// the implementation.
pub trait RenderSurface {
    type Error;

    fn draw(&mut self, frame: &MorphFrame<'_>) -> Result<(), Self::Error>;
}
