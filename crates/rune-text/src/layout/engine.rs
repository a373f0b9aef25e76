//! The layout seam consumed by character-level transitions.
//!
//! A [`LayoutEngine`] turns a string plus style and width constraints into
//! a [`TextLayout`]: per-line byte boundaries and line metrics. Engines must
//! be deterministic; identical inputs produce identical layouts.

use serde::{Deserialize, Serialize};

use crate::layout::{TextLayout, WrapMode};

/// Style passed through to the layout engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font size in logical pixels (px per em).
    pub font_size: f32,
    /// Line height as a multiple of the font size. `None` uses the
    /// font's natural ascent + descent + line gap.
    pub line_height: Option<f32>,
    /// Extra horizontal space added after every grapheme, in pixels.
    pub letter_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: None,
            letter_spacing: 0.0,
        }
    }
}

/// How visual overflow past the available width is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    #[default]
    Clip,
    Fade,
    Ellipsis,
    Visible,
}

/// Width constraints for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraints {
    /// Maximum line width in pixels; `None` is unconstrained.
    pub max_width: Option<f32>,
    /// Wrapping strategy applied when `max_width` is set.
    pub wrap: WrapMode,
}

impl LayoutConstraints {
    pub const UNCONSTRAINED: LayoutConstraints = LayoutConstraints {
        max_width: None,
        wrap: WrapMode::NoWrap,
    };

    /// Resolve the constraints for a paragraph.
    ///
    /// Width is only unconstrained when soft wrapping is off and overflow
    /// is not ellipsis-style; otherwise the available width applies.
    pub fn resolve(soft_wrap: bool, overflow: Overflow, available_width: Option<f32>) -> Self {
        let wrap = if soft_wrap {
            WrapMode::BreakWord
        } else {
            WrapMode::NoWrap
        };
        let max_width = if !soft_wrap && overflow != Overflow::Ellipsis {
            None
        } else {
            available_width
        };
        Self { max_width, wrap }
    }
}

/// Text layout capability: string + style + constraints to line boundaries
/// and metrics.
pub trait LayoutEngine {
    fn layout(&self, text: &str, style: &TextStyle, constraints: &LayoutConstraints) -> TextLayout;
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for &E {
    fn layout(&self, text: &str, style: &TextStyle, constraints: &LayoutConstraints) -> TextLayout {
        (**self).layout(text, style, constraints)
    }
}
