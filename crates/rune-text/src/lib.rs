//! rune-text: line layout for character-level text transitions.
//!
//! - grapheme cluster segmentation (combining marks, emoji/ZWJ)
//! - UAX-14 line break opportunities
//! - the [`LayoutEngine`] seam plus a deterministic fixed-advance engine
//!   that produces per-line boundaries and metrics

pub mod font;
pub mod layout;
pub mod unicode;

pub use font::{FontMetrics, ScaledFontMetrics};

pub use layout::{
    FixedAdvanceLayout, LayoutConstraints, LayoutEngine, LineMetrics, Overflow, Size, TextLayout,
    TextStyle, WrapMode,
};
