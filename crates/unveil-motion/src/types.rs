//! Core types shared across the motion engine.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::interpolate::Interpolate;

/// Identifies an animated element.
///
/// Handles are plain strings so callers can mint them from section and
/// slot names ("hero-title", "project-card-3") without a central id
/// authority. Equality is textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a timeline instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimelineId(u64);

impl TimelineId {
    /// Generate the next unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The visual properties a timeline can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualProperty {
    /// Opacity, 0.0 (transparent) to 1.0 (opaque).
    Opacity,
    /// Horizontal offset from the element's resting position, in pixels.
    TranslateX,
    /// Vertical offset from the element's resting position, in pixels.
    TranslateY,
    /// Uniform scale factor, 1.0 is natural size.
    Scale,
    /// Gaussian blur radius in pixels.
    Blur,
    /// Width as a percentage of the element's natural width.
    Width,
}

impl VisualProperty {
    pub const ALL: [VisualProperty; 6] = [
        VisualProperty::Opacity,
        VisualProperty::TranslateX,
        VisualProperty::TranslateY,
        VisualProperty::Scale,
        VisualProperty::Blur,
        VisualProperty::Width,
    ];
}

/// Endpoints of one property track within a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertySpan {
    pub from: f32,
    pub to: f32,
}

impl PropertySpan {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// Value at the given eased progress.
    pub fn at(&self, eased: f32) -> f32 {
        self.from.lerp(&self.to, eased)
    }
}

/// Playback direction of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayDirection {
    Forward,
    Reverse,
}

impl PlayDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Playback state of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Created, never played. Declared properties hold their start values.
    Idle,
    /// Advancing every frame.
    Running,
    /// Reached the end of its run in the last played direction.
    Finished,
    /// Stopped mid-run; values stay frozen where they were.
    Cancelled,
}

impl PlaybackState {
    /// Whether the timeline consumes frame time.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Sampled visual state of one element.
///
/// Defaults describe an element at rest: fully opaque, unmoved, unscaled,
/// unblurred, full width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualSnapshot {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub blur: f32,
    pub width: f32,
}

impl Default for VisualSnapshot {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            blur: 0.0,
            width: 100.0,
        }
    }
}

impl VisualSnapshot {
    pub fn get(&self, property: VisualProperty) -> f32 {
        match property {
            VisualProperty::Opacity => self.opacity,
            VisualProperty::TranslateX => self.translate_x,
            VisualProperty::TranslateY => self.translate_y,
            VisualProperty::Scale => self.scale,
            VisualProperty::Blur => self.blur,
            VisualProperty::Width => self.width,
        }
    }

    pub fn set(&mut self, property: VisualProperty, value: f32) {
        match property {
            VisualProperty::Opacity => self.opacity = value,
            VisualProperty::TranslateX => self.translate_x = value,
            VisualProperty::TranslateY => self.translate_y = value,
            VisualProperty::Scale => self.scale = value,
            VisualProperty::Blur => self.blur = value,
            VisualProperty::Width => self.width = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_id_unique() {
        let a = TimelineId::next();
        let b = TimelineId::next();
        let c = TimelineId::next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.value() < b.value());
    }

    #[test]
    fn test_element_id_display() {
        let id = ElementId::from("hero-title");
        assert_eq!(id.as_str(), "hero-title");
        assert_eq!(format!("{}", id), "hero-title");
    }

    #[test]
    fn test_span_endpoints() {
        let span = PropertySpan::new(50.0, 0.0);
        assert!((span.at(0.0) - 50.0).abs() < 1e-6);
        assert!((span.at(0.5) - 25.0).abs() < 1e-6);
        assert!((span.at(1.0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_defaults() {
        let snap = VisualSnapshot::default();
        assert_eq!(snap.get(VisualProperty::Opacity), 1.0);
        assert_eq!(snap.get(VisualProperty::TranslateY), 0.0);
        assert_eq!(snap.get(VisualProperty::Scale), 1.0);
        assert_eq!(snap.get(VisualProperty::Width), 100.0);
    }

    #[test]
    fn test_snapshot_set_get() {
        let mut snap = VisualSnapshot::default();
        snap.set(VisualProperty::Blur, 10.0);
        snap.set(VisualProperty::Opacity, 0.0);
        assert_eq!(snap.get(VisualProperty::Blur), 10.0);
        assert_eq!(snap.get(VisualProperty::Opacity), 0.0);
        assert_eq!(snap.get(VisualProperty::Scale), 1.0);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(PlayDirection::Forward.flipped(), PlayDirection::Reverse);
        assert_eq!(PlayDirection::Reverse.flipped(), PlayDirection::Forward);
    }

    #[test]
    fn test_state_activity() {
        assert!(PlaybackState::Running.is_active());
        assert!(!PlaybackState::Idle.is_active());
        assert!(!PlaybackState::Finished.is_active());
        assert!(!PlaybackState::Cancelled.is_active());
    }
}
