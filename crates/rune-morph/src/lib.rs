//! rune-morph: character-level text transitions.
//!
//! Instead of cross-fading a whole string, a change from an old to a new
//! text value is animated per grapheme cluster:
//!
//! ```text
//! TextMorph (Idle / Animating)
//!   ├── LayoutEngine            old/new text → lines + metrics
//!   ├── align                   per-line slot sequences, numeric runs padded
//!   ├── diff                    differing / placeholder slot counts
//!   ├── Timeline                total duration + per-slot stagger
//!   └── AnimationController     normalized progress 0 → 1
//!
//! MorphFrame ──► RenderSurface
//! ```
//!
//! Numbers whose digit count changes (`99 → 100`) get placeholder slots at
//! the start of the digit run so the new digit slides in at the correct
//! place instead of every digit re-flowing.

pub mod align;
pub mod controller;
pub mod diff;
pub mod easing;
pub mod error;
pub mod frame;
pub mod line;
pub mod morph;
pub mod numeric;
pub mod options;
pub mod slot;
pub mod timeline;

pub use align::align_line;
pub use controller::{AnimationController, AnimationStatus};
pub use diff::{total_diff_weight, DiffStats};
pub use easing::Curve;
pub use error::{MorphError, Result};
pub use frame::{MorphFrame, RenderSurface, SlotFrame};
pub use line::{align_layouts, Line};
pub use morph::{MorphState, TextMorph};
pub use numeric::{scan_numeric_runs, NumericRun};
pub use options::MorphOptions;
pub use slot::CharacterSlot;
pub use timeline::{Timeline, DEFAULT_BASE_DURATION_MS, STAGGER_RATIO};
