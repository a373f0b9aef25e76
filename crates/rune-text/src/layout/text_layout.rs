use crate::layout::{LineMetrics, PrefixSums, Size};
use crate::unicode::graphemes;

/// Complete layout of a paragraph: the source text, its lines in
/// top-to-bottom order and the overall size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Source text.
    text: String,
    /// All lines in visual/top-to-bottom order.
    lines: Vec<LineMetrics>,
    /// Prefix sums over graphemes and bytes for fast lookups.
    prefix_sums: PrefixSums,
    /// Bounding size of all lines.
    size: Size,
    /// Whether some line is wider than the width it was laid out against.
    did_exceed_max_width: bool,
}

impl TextLayout {
    /// Assemble a layout from lines produced by an engine.
    pub fn from_lines(
        text: impl Into<String>,
        lines: Vec<LineMetrics>,
        did_exceed_max_width: bool,
    ) -> Self {
        let text = text.into();
        let width = lines.iter().map(|l| l.left + l.width).fold(0.0f32, f32::max);
        let height = lines.iter().map(|l| l.height).sum();
        let prefix_sums = PrefixSums::new(&text, &lines);
        Self {
            text,
            lines,
            prefix_sums,
            size: Size::new(width, height),
            did_exceed_max_width,
        }
    }

    /// A layout with no lines at all.
    pub fn empty() -> Self {
        Self::from_lines(String::new(), Vec::new(), false)
    }

    /// Underlying source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All lines in this layout.
    pub fn lines(&self) -> &[LineMetrics] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn did_exceed_max_width(&self) -> bool {
        self.did_exceed_max_width
    }

    /// Text covered by a line, without its terminating newline.
    pub fn line_text(&self, line_index: usize) -> Option<&str> {
        self.lines
            .get(line_index)
            .map(|line| &self.text[line.text_range.clone()])
    }

    /// Grapheme clusters of a line in logical order.
    pub fn line_graphemes(&self, line_index: usize) -> Vec<&str> {
        self.line_text(line_index).map(graphemes).unwrap_or_default()
    }

    /// Map a byte offset to the index of the line containing it.
    ///
    /// Offsets on a newline belong to the line that newline terminates.
    pub fn line_at_offset(&self, byte_offset: usize) -> Option<usize> {
        if byte_offset > self.text.len() {
            return None;
        }
        self.prefix_sums.line_at_byte(byte_offset)
    }

    /// Map a layout-wide grapheme offset to the index of its line.
    pub fn line_at_grapheme(&self, grapheme_offset: usize) -> Option<usize> {
        self.prefix_sums.line_at_grapheme(grapheme_offset)
    }

    /// Layout-wide grapheme offset at the start of a line.
    pub fn grapheme_offset_at_line(&self, line_index: usize) -> Option<usize> {
        self.prefix_sums.grapheme_offset_at_line(line_index)
    }
}
