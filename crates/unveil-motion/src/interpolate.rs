//! Linear interpolation between sampled values.

use crate::types::{VisualProperty, VisualSnapshot};

/// Types that can be blended between two endpoints.
pub trait Interpolate {
    /// Interpolate from `self` toward `other` at progress `t` in [0, 1].
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t as f64
    }
}

impl Interpolate for VisualSnapshot {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = *self;
        for property in VisualProperty::ALL {
            out.set(property, self.get(property).lerp(&other.get(property), t));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_f32() {
        assert!((0.0f32.lerp(&10.0, 0.5) - 5.0).abs() < 1e-6);
        assert!((10.0f32.lerp(&0.0, 0.25) - 7.5).abs() < 1e-6);
        assert!((3.0f32.lerp(&3.0, 0.7) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_f64() {
        assert!((1.0f64.lerp(&2.0, 0.5) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(2.0f32.lerp(&8.0, 0.0), 2.0);
        assert_eq!(2.0f32.lerp(&8.0, 1.0), 8.0);
    }

    #[test]
    fn test_lerp_snapshot() {
        let hidden = VisualSnapshot {
            opacity: 0.0,
            translate_y: 50.0,
            ..Default::default()
        };
        let shown = VisualSnapshot::default();

        let mid = hidden.lerp(&shown, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.translate_y - 25.0).abs() < 1e-6);
        assert!((mid.scale - 1.0).abs() < 1e-6);
    }
}
