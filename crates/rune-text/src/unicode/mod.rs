//! Unicode utilities for rune-text.
//!
//! Grapheme cluster segmentation over extended grapheme clusters
//! (including combining marks and emoji/ZWJ sequences).

pub mod graphemes;

pub use graphemes::{grapheme_count, graphemes};
