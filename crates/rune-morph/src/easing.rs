//! Easing curves applied to each slot's local progress.
//!
//! ```
//! use rune_morph::Curve;
//!
//! let eased = Curve::EaseOut.evaluate(0.5);
//! assert!(eased > 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Curve {
    /// No easing.
    Linear,

    /// `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    #[default]
    Ease,

    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// `cubic-bezier(0.4, 0, 0.2, 1)`, the material standard curve.
    FastOutSlowIn,

    /// Custom cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Curve {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    /// Create a custom cubic bezier curve.
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(bezier_x_in_range(x1, x2), "Bezier x values must be in [0, 1]");
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Check a curve that did not go through [`Curve::cubic_bezier`],
    /// e.g. one deserialized from config.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::CubicBezier { x1, x2, .. } if !bezier_x_in_range(x1, x2) => {
                Err(MorphError::InvalidCurve { x1, x2 })
            }
            _ => Ok(()),
        }
    }
}

fn bezier_x_in_range(x1: f32, x2: f32) -> bool {
    (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2)
}

/// Evaluate a cubic bezier curve at progress `progress`.
///
/// Newton-Raphson finds the curve parameter whose x matches the progress,
/// then y is evaluated at that parameter.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_y(y1, y2, t)
}

fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_x(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³
#[inline]
fn bezier_x(x1: f32, x2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

#[inline]
fn bezier_y(y1: f32, y2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

/// dx/dt = 3(1-t)²·x1 + 6(1-t)t·(x2-x1) + 3t²·(1-x2)
#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn endpoints_are_fixed() {
        for curve in [
            Curve::Linear,
            Curve::Ease,
            Curve::EaseIn,
            Curve::EaseOut,
            Curve::EaseInOut,
            Curve::FastOutSlowIn,
        ] {
            assert!(approx_eq(curve.evaluate(0.0), 0.0), "{curve:?}");
            assert!(approx_eq(curve.evaluate(1.0), 1.0), "{curve:?}");
        }
    }

    #[test]
    fn ease_in_starts_slow_ease_out_starts_fast() {
        assert!(Curve::EaseIn.evaluate(0.25) < 0.25);
        assert!(Curve::EaseOut.evaluate(0.25) > 0.25);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let ease = Curve::EaseInOut;
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(0.25) + ease.evaluate(0.75), 1.0));
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let curve = Curve::cubic_bezier(0.0, 0.0, 1.0, 1.0);
        assert!(approx_eq(curve.evaluate(0.3), 0.3));
    }

    #[test]
    fn input_is_clamped() {
        assert!(approx_eq(Curve::Ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(Curve::Ease.evaluate(1.5), 1.0));
    }

    #[test]
    fn deserializes_from_tagged_table() {
        let curve: Curve = toml::from_str("type = \"fast_out_slow_in\"").unwrap();
        assert_eq!(curve, Curve::FastOutSlowIn);
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn invalid_bezier_x() {
        Curve::cubic_bezier(-0.1, 0.0, 0.5, 1.0);
    }
}
