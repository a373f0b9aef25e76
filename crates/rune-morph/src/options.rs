use serde::{Deserialize, Serialize};

use rune_text::{LayoutConstraints, Overflow, TextStyle};

use crate::easing::Curve;
use crate::error::{MorphError, Result};
use crate::timeline::DEFAULT_BASE_DURATION_MS;

/// Configuration of a [`TextMorph`](crate::TextMorph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphOptions {
    /// Duration of a single slot transition in milliseconds. Defaults to
    /// [`DEFAULT_BASE_DURATION_MS`] when unset.
    pub base_duration_ms: Option<f32>,
    /// Curve applied to each slot's local progress.
    pub easing: Curve,
    /// Passed through to the layout engine.
    pub style: TextStyle,
    pub soft_wrap: bool,
    pub overflow: Overflow,
    /// Available width in pixels; `None` is unbounded.
    pub max_width: Option<f32>,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            base_duration_ms: None,
            easing: Curve::default(),
            style: TextStyle::default(),
            soft_wrap: true,
            overflow: Overflow::default(),
            max_width: None,
        }
    }
}

impl MorphOptions {
    pub fn with_base_duration_ms(mut self, duration_ms: f32) -> Self {
        self.base_duration_ms = Some(duration_ms);
        self
    }

    pub fn with_easing(mut self, easing: Curve) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_max_width(mut self, max_width: Option<f32>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn base_duration_ms(&self) -> f32 {
        self.base_duration_ms.unwrap_or(DEFAULT_BASE_DURATION_MS)
    }

    /// Width constraints handed to the layout engine.
    pub fn constraints(&self) -> LayoutConstraints {
        LayoutConstraints::resolve(self.soft_wrap, self.overflow, self.max_width)
    }

    pub fn validate(&self) -> Result<()> {
        let duration = self.base_duration_ms();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(MorphError::InvalidDuration(duration));
        }
        let font_size = self.style.font_size;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(MorphError::InvalidFontSize(font_size));
        }
        if let Some(width) = self.max_width {
            if !width.is_finite() || width < 0.0 {
                return Err(MorphError::InvalidMaxWidth(width));
            }
        }
        self.easing.validate()
    }
}
