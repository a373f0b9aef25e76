use crate::layout::LineMetrics;
use crate::unicode::grapheme_count;

/// Prefix sum array for O(log n) offset-to-line lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixSums {
    /// Cumulative grapheme counts per line (at line start).
    grapheme_offsets: Vec<usize>,
    /// Byte offsets per line (at line start).
    byte_offsets: Vec<usize>,
}

impl PrefixSums {
    /// Build prefix sums from the full text and its lines.
    pub fn new(text: &str, lines: &[LineMetrics]) -> Self {
        let mut grapheme_offsets = Vec::with_capacity(lines.len());
        let mut byte_offsets = Vec::with_capacity(lines.len());
        let mut cursor = 0usize;

        for line in lines {
            grapheme_offsets.push(cursor);
            byte_offsets.push(line.text_range.start);
            cursor += grapheme_count(&text[line.text_range.clone()]);
        }

        Self {
            grapheme_offsets,
            byte_offsets,
        }
    }

    /// Find line index containing a byte offset.
    pub fn line_at_byte(&self, byte_offset: usize) -> Option<usize> {
        Self::search(&self.byte_offsets, byte_offset)
    }

    /// Find line index containing a layout-wide grapheme offset.
    pub fn line_at_grapheme(&self, grapheme_offset: usize) -> Option<usize> {
        Self::search(&self.grapheme_offsets, grapheme_offset)
    }

    /// Get grapheme offset at start of line.
    pub fn grapheme_offset_at_line(&self, line_index: usize) -> Option<usize> {
        self.grapheme_offsets.get(line_index).copied()
    }

    /// Index of the last line starting at or before `offset`.
    ///
    /// Empty lines repeat the grapheme offset of the line after them, so
    /// ties resolve to the last line with that start.
    fn search(starts: &[usize], offset: usize) -> Option<usize> {
        starts.partition_point(|&start| start <= offset).checked_sub(1)
    }
}
