use core::ops::Range;

/// Boundaries and metrics of a single laid out line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMetrics {
    /// Zero-based index of this line within its paragraph.
    pub line_number: usize,
    /// Byte offset range in the source text for this line, excluding
    /// the terminating newline.
    pub text_range: Range<usize>,
    /// Whether the line ends at an explicit newline or at end of text
    /// (as opposed to a soft wrap).
    pub hard_break: bool,
    /// X position of the line start in pixels.
    pub left: f32,
    /// Visual width of the line in pixels.
    pub width: f32,
    /// Total height of the line box in pixels.
    pub height: f32,
    /// Maximum ascent in this line (pixels above baseline).
    pub ascent: f32,
    /// Maximum descent in this line (pixels below baseline).
    pub descent: f32,
    /// Distance from paragraph top to this line's baseline in pixels.
    pub baseline: f32,
}
