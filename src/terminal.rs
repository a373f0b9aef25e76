use std::io::{self, Write};

use rune_morph::{MorphFrame, RenderSurface};

/// Prints each frame as plain text rows.
///
/// A changed slot shows its old grapheme until its local progress passes
/// the halfway point, then its new one. Lines present on one side only are
/// printed as-is from the matching layout.
pub struct TerminalSurface<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    type Error = io::Error;

    fn draw(&mut self, frame: &MorphFrame<'_>) -> io::Result<()> {
        let mut rows = vec![String::new(); frame.lines.len()];
        for slot in frame.slots() {
            let shown = if slot.is_changed() && slot.progress < 0.5 {
                slot.old
            } else {
                slot.new
            };
            rows[slot.line_index].push_str(shown.as_str().unwrap_or(" "));
        }

        let trailing = if frame.progress < 0.5 {
            frame.old_layout
        } else {
            frame.new_layout
        };
        for i in frame.lines.len()..trailing.line_count() {
            rows.push(trailing.line_text(i).unwrap_or_default().to_owned());
        }

        writeln!(self.out, "frame {:>3}  progress {:.2}", self.frames, frame.progress)?;
        for row in rows {
            writeln!(self.out, "  | {row}")?;
        }
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rune_morph::{Curve, MorphOptions, TextMorph};
    use rune_text::FixedAdvanceLayout;

    #[test]
    fn prints_old_text_first() {
        let mut morph =
            TextMorph::new(FixedAdvanceLayout::default(), MorphOptions::default(), "9").unwrap();
        morph.set_text("10");

        let mut surface = TerminalSurface::new(Vec::new());
        morph.render(&mut surface).unwrap();

        let output = String::from_utf8(surface.out).unwrap();
        assert_eq!(output, "frame   0  progress 0.00\n  |  9\n");
    }

    #[test]
    fn earlier_changed_slots_flip_first() {
        let options = MorphOptions::default().with_easing(Curve::Linear);
        let mut morph = TextMorph::new(FixedAdvanceLayout::default(), options, "11x").unwrap();
        morph.set_text("22x");
        // Half of 150ms + 27ms of stagger.
        morph.tick(88.5);

        let mut surface = TerminalSurface::new(Vec::new());
        morph.render(&mut surface).unwrap();

        let output = String::from_utf8(surface.out).unwrap();
        assert_eq!(output, "frame   0  progress 0.50\n  | 21x\n");
    }
}
