use serde::{Deserialize, Serialize};

/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Horizontal advance of a single grapheme.
    pub advance: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl Default for FontMetrics {
    /// Proportions of a typical monospaced face: 0.6em advance,
    /// 0.8em ascent, 0.2em descent.
    fn default() -> Self {
        Self {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 0.0,
            advance: 600.0,
            units_per_em: 1000,
        }
    }
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            advance: self.advance * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub advance: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_units_per_em() {
        let scaled = FontMetrics::default().scale_to_pixels(10.0);
        assert_eq!(scaled.ascent, 8.0);
        assert_eq!(scaled.descent, 2.0);
        assert_eq!(scaled.advance, 6.0);
        assert_eq!(scaled.line_height(), 10.0);
    }

    #[test]
    fn zero_units_per_em_is_unscaled() {
        let metrics = FontMetrics {
            units_per_em: 0,
            ..FontMetrics::default()
        };
        assert_eq!(metrics.scale_to_pixels(12.0).ascent, 800.0);
    }
}
