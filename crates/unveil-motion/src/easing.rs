//! Easing curves for timeline playback.
//!
//! Reveal tweens use the polynomial family almost exclusively: `QuadOut`
//! for ordinary deceleration, `CubicOut` for the heavier entrance moves,
//! and the `InOut` flavors for anything that both starts and ends at rest
//! (loader fades, drifting decorations). `CubicBezier` covers custom
//! curves and `Steps` drives discrete readouts such as the loading
//! percentage label.
//!
//! # Usage
//!
//! ```
//! use unveil_motion::easing::Easing;
//!
//! let ease = Easing::CubicOut;
//! let progress = ease.evaluate(0.5); // eased progress at 50%
//!
//! let custom = Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0);
//! let progress = custom.evaluate(0.5);
//! ```

use serde::{Deserialize, Serialize};

/// Where the jump happens in a stepped curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPosition {
    /// Jump at the start of each interval.
    Start,
    /// Jump at the end of each interval.
    End,
}

impl Default for StepPosition {
    fn default() -> Self {
        Self::End
    }
}

/// Easing curve mapping linear progress (0.0 to 1.0) to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// No easing.
    Linear,

    /// Quadratic acceleration from rest.
    QuadIn,

    /// Quadratic deceleration to rest. The default for reveal tweens.
    QuadOut,

    /// Quadratic ease on both ends, fast middle.
    QuadInOut,

    /// Cubic acceleration from rest.
    CubicIn,

    /// Cubic deceleration to rest. Used by the heavier entrance moves.
    CubicOut,

    /// Cubic ease on both ends.
    CubicInOut,

    /// Custom cubic bezier curve with control points (x1, y1) and (x2, y2).
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Discrete jumps. `count` is the number of intervals (must be >= 1).
    Steps { count: u32, position: StepPosition },
}

impl Default for Easing {
    fn default() -> Self {
        Self::QuadOut
    }
}

impl Easing {
    /// Evaluate the curve at the given progress.
    ///
    /// # Arguments
    /// * `t` - Progress value from 0.0 to 1.0 (clamped)
    ///
    /// # Returns
    /// Eased progress (may leave 0.0-1.0 for overshooting bezier curves)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
            Self::Steps { count, position } => stepped(*count, *position, t),
        }
    }

    /// Create a custom cubic bezier curve.
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Create a stepped curve.
    ///
    /// # Panics
    /// Panics if `count` is 0.
    pub fn steps(count: u32, position: StepPosition) -> Self {
        assert!(count >= 1, "Steps must be at least 1");
        Self::Steps { count, position }
    }
}

/// Evaluate a cubic bezier timing curve at the given progress.
///
/// Finds the curve parameter whose x coordinate matches the input progress
/// (Newton-Raphson, falling back to bisection on flat segments), then
/// returns the y coordinate at that parameter.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_curve_x(x1, x2, progress);
    curve_axis(y1, y2, t)
}

/// Solve for the parameter t whose x coordinate equals `target_x`.
fn solve_curve_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;

    for _ in 0..8 {
        let err = curve_axis(x1, x2, t) - target_x;
        if err.abs() < 1e-6 {
            return t;
        }

        let slope = curve_axis_derivative(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }

        t = (t - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled on a near-flat segment; x(t) is monotone for
    // x1, x2 in [0, 1], so bisection always lands.
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..24 {
        t = 0.5 * (lo + hi);
        if curve_axis(x1, x2, t) < target_x {
            lo = t;
        } else {
            hi = t;
        }
    }

    t
}

/// One axis of the curve at parameter t:
/// `b(t) = 3(1-t)^2 t c1 + 3(1-t) t^2 c2 + t^3`.
#[inline]
fn curve_axis(c1: f32, c2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let mt = 1.0 - t;

    3.0 * mt * mt * t * c1 + 3.0 * mt * t2 * c2 + t2 * t
}

/// Derivative of one axis with respect to t.
#[inline]
fn curve_axis_derivative(c1: f32, c2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * c1 + 6.0 * mt * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

/// Evaluate a stepped curve.
fn stepped(count: u32, position: StepPosition, t: f32) -> f32 {
    if count == 0 {
        return t;
    }

    let count_f = count as f32;

    match position {
        StepPosition::Start => ((t * count_f).ceil() / count_f).min(1.0),
        StepPosition::End => ((t * count_f).floor() / count_f).min(1.0),
    }
}
