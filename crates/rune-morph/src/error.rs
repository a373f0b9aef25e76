//! Error types for text morphing.

use thiserror::Error;

/// Result type for morph operations.
pub type Result<T> = std::result::Result<T, MorphError>;

/// Options rejected when a morph is constructed or reconfigured.
///
/// Alignment itself never fails: the only invariant it can break (old and
/// new slot sequences of different length) is a defect and panics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphError {
    /// Base duration is not a positive, finite number of milliseconds.
    #[error("invalid base duration: {0}ms")]
    InvalidDuration(f32),

    /// Font size is not a positive, finite number of pixels.
    #[error("invalid font size: {0}px")]
    InvalidFontSize(f32),

    /// Available width is negative or not finite.
    #[error("invalid max width: {0}px")]
    InvalidMaxWidth(f32),

    /// Bezier control point x values must lie in `[0, 1]`.
    #[error("invalid easing curve: x1={x1}, x2={x2} (expected values in [0, 1])")]
    InvalidCurve { x1: f32, x2: f32 },
}
