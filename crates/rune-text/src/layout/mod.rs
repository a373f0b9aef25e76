pub mod engine;
pub mod fixed_advance;
pub mod line_breaker;
pub mod line_metrics;
pub mod prefix_sums;
pub mod text_layout;

use serde::{Deserialize, Serialize};

pub use engine::{LayoutConstraints, LayoutEngine, Overflow, TextStyle};
pub use fixed_advance::FixedAdvanceLayout;
pub use line_metrics::LineMetrics;
pub use prefix_sums::PrefixSums;
pub use text_layout::TextLayout;

/// Line wrapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Do not perform automatic wrapping (only explicit newlines).
    NoWrap,
    /// Wrap at word boundaries where possible, falling back to
    /// grapheme boundaries for long words.
    BreakWord,
    /// Allow breaking between all grapheme clusters (aggressive).
    BreakAll,
}

/// Width and height of a laid out paragraph in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
