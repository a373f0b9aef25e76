use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::font::{FontMetrics, ScaledFontMetrics};
use crate::layout::line_breaker::compute_line_breaks;
use crate::layout::{LayoutConstraints, LayoutEngine, LineMetrics, TextLayout, TextStyle, WrapMode};
use crate::unicode::grapheme_count;

/// Deterministic layout engine where every grapheme cluster advances by
/// the same amount.
///
/// Logical paragraphs are split on `'\n'`; wrapping decisions are made per
/// paragraph using Unicode line breaking, falling back to grapheme
/// boundaries when a single word exceeds the available width.
#[derive(Debug, Clone, Default)]
pub struct FixedAdvanceLayout {
    metrics: FontMetrics,
}

impl FixedAdvanceLayout {
    pub fn new(metrics: FontMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}

impl LayoutEngine for FixedAdvanceLayout {
    fn layout(&self, text: &str, style: &TextStyle, constraints: &LayoutConstraints) -> TextLayout {
        let scaled = self.metrics.scale_to_pixels(style.font_size);
        let mut sink = LineSink::new(text, scaled, style, constraints.max_width);

        let mut para_start = 0usize;
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                sink.layout_paragraph(para_start..idx, constraints.wrap);
                para_start = idx + ch.len_utf8();
            }
        }
        sink.layout_paragraph(para_start..text.len(), constraints.wrap);

        TextLayout::from_lines(text, sink.lines, sink.exceeded)
    }
}

/// Accumulates lines for one layout pass.
struct LineSink<'a> {
    text: &'a str,
    scaled: ScaledFontMetrics,
    letter_spacing: f32,
    line_height: f32,
    baseline_offset: f32,
    max_width: Option<f32>,
    y: f32,
    exceeded: bool,
    lines: Vec<LineMetrics>,
}

impl<'a> LineSink<'a> {
    fn new(
        text: &'a str,
        scaled: ScaledFontMetrics,
        style: &TextStyle,
        max_width: Option<f32>,
    ) -> Self {
        let line_height = match style.line_height {
            Some(multiplier) => multiplier * scaled.font_size,
            None => scaled.line_height(),
        };
        let half_leading = (line_height - scaled.ascent - scaled.descent) / 2.0;
        Self {
            text,
            scaled,
            letter_spacing: style.letter_spacing,
            line_height,
            baseline_offset: half_leading + scaled.ascent,
            max_width,
            y: 0.0,
            exceeded: false,
            lines: Vec::new(),
        }
    }

    /// Width of a segment, ignoring trailing whitespace.
    fn width_of(&self, range: Range<usize>) -> f32 {
        let count = grapheme_count(self.text[range].trim_end());
        count as f32 * (self.scaled.advance + self.letter_spacing)
    }

    fn push(&mut self, range: Range<usize>, hard_break: bool) {
        let width = self.width_of(range.clone());
        if self.max_width.is_some_and(|max| width > max) {
            self.exceeded = true;
        }
        self.lines.push(LineMetrics {
            line_number: self.lines.len(),
            text_range: range,
            hard_break,
            left: 0.0,
            width,
            height: self.line_height,
            ascent: self.scaled.ascent,
            descent: self.scaled.descent,
            baseline: self.y + self.baseline_offset,
        });
        self.y += self.line_height;
    }

    fn layout_paragraph(&mut self, range: Range<usize>, wrap: WrapMode) {
        let max_width = match (self.max_width, wrap) {
            (Some(max), WrapMode::BreakWord | WrapMode::BreakAll) => max,
            _ => {
                self.push(range, true);
                return;
            }
        };

        let text = self.text;
        let paragraph = &text[range.clone()];
        if paragraph.is_empty() {
            self.push(range, true);
            return;
        }

        let breaks = match wrap {
            WrapMode::BreakWord => compute_line_breaks(paragraph),
            _ => Vec::new(),
        };

        let base = range.start;
        let mut local_start = 0usize;
        while local_start < paragraph.len() {
            // Greedily pick the last break opportunity that fits.
            let mut best_end = None;
            for &offset in breaks.iter().filter(|&&o| o > local_start) {
                if self.width_of(base + local_start..base + offset) <= max_width {
                    best_end = Some(offset);
                } else {
                    break;
                }
            }

            // Fall back to grapheme boundaries.
            if best_end.is_none() {
                for (idx, g) in paragraph[local_start..].grapheme_indices(true) {
                    let local_end = local_start + idx + g.len();
                    if self.width_of(base + local_start..base + local_end) <= max_width {
                        best_end = Some(local_end);
                    } else {
                        break;
                    }
                }
            }

            // As a last resort, force at least one grapheme.
            let local_end = match best_end {
                Some(end) => end,
                None => match paragraph[local_start..].graphemes(true).next() {
                    Some(g) => local_start + g.len(),
                    None => break,
                },
            };

            let hard_break = local_end >= paragraph.len();
            self.push(base + local_start..base + local_end, hard_break);
            local_start = local_end;
        }
    }
}
