//! Property timelines: ordered steps, staggered targets, reversible playback.
//!
//! A [`TimelineSpec`] is the declarative description (what moves, from
//! where to where, over how long). A [`Timeline`] is one playable instance
//! of a spec: it tracks a position along the spec's duration and advances
//! or rewinds it frame by frame. Reversal keeps the current position, so
//! values never jump when a running timeline is turned around.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::types::{
    ElementId, PlayDirection, PlaybackState, PropertySpan, TimelineId, VisualProperty,
    VisualSnapshot,
};

/// Where a step starts relative to the rest of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepOffset {
    /// Start when the last inserted content ends (the default).
    AfterPrevious,
    /// Start relative to the current end of the timeline. Negative values
    /// overlap the preceding steps; resolved starts clamp at zero.
    Relative { ms: f32 },
    /// Start at a fixed time from the beginning of the timeline.
    At { ms: f32 },
}

impl Default for StepOffset {
    fn default() -> Self {
        Self::AfterPrevious
    }
}

fn default_step_duration() -> f32 {
    500.0
}

/// One step of a timeline: a group of targets sharing tracks, a duration,
/// an easing curve, and an optional per-target stagger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Targets in explicit order; stagger indices follow this order.
    pub targets: Vec<ElementId>,
    /// Property endpoints shared by every target of the step.
    #[serde(default)]
    pub tracks: HashMap<VisualProperty, PropertySpan>,
    #[serde(default = "default_step_duration")]
    pub duration_ms: f32,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub offset: StepOffset,
    /// Delay between consecutive targets' starts.
    #[serde(default)]
    pub stagger_ms: f32,
    /// Resolved start time, filled in when the step joins a spec.
    #[serde(default)]
    pub start_ms: f32,
}

impl TimelineStep {
    pub fn new<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ElementId>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            tracks: HashMap::new(),
            duration_ms: default_step_duration(),
            easing: Easing::default(),
            offset: StepOffset::default(),
            stagger_ms: 0.0,
            start_ms: 0.0,
        }
    }

    /// Set the per-target duration.
    ///
    /// # Panics
    /// Panics if `ms` is negative.
    pub fn duration_ms(mut self, ms: f32) -> Self {
        assert!(ms >= 0.0, "Step duration must not be negative");
        self.duration_ms = ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn offset(mut self, offset: StepOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Set the delay between consecutive targets.
    ///
    /// # Panics
    /// Panics if `ms` is negative.
    pub fn stagger_ms(mut self, ms: f32) -> Self {
        assert!(ms >= 0.0, "Stagger must not be negative");
        self.stagger_ms = ms;
        self
    }

    /// Add a property track running from `from` to `to`.
    pub fn track(mut self, property: VisualProperty, from: f32, to: f32) -> Self {
        self.tracks.insert(property, PropertySpan::new(from, to));
        self
    }

    /// Index of `element` in this step's target list.
    pub fn target_index(&self, element: &ElementId) -> Option<usize> {
        self.targets.iter().position(|t| t == element)
    }

    /// Start time of the target at `index`, offset by the stagger.
    pub fn target_start_ms(&self, index: usize) -> f32 {
        self.start_ms + index as f32 * self.stagger_ms
    }

    /// Time this step occupies: duration plus the stagger fan-out.
    pub fn span_ms(&self) -> f32 {
        let fan_out = self.stagger_ms * self.targets.len().saturating_sub(1) as f32;
        self.duration_ms + fan_out
    }
}

/// Declarative description of a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
    pub name: String,
    /// Dead time before the first step, traversed in both directions.
    #[serde(default)]
    pub delay_ms: f32,
    #[serde(default)]
    pub steps: Vec<TimelineStep>,
}

impl TimelineSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay_ms: 0.0,
            steps: Vec::new(),
        }
    }

    /// Set the initial delay.
    ///
    /// # Panics
    /// Panics if `ms` is negative.
    pub fn delay_ms(mut self, ms: f32) -> Self {
        assert!(ms >= 0.0, "Delay must not be negative");
        self.delay_ms = ms;
        self
    }

    /// Append a step, resolving its start time against the current end of
    /// the timeline.
    ///
    /// # Panics
    /// Panics if the step has no targets.
    pub fn step(mut self, mut step: TimelineStep) -> Self {
        assert!(!step.targets.is_empty(), "Step requires at least one target");

        let end = self.content_duration_ms();
        step.start_ms = match step.offset {
            StepOffset::AfterPrevious => end,
            StepOffset::Relative { ms } => (end + ms).max(0.0),
            StepOffset::At { ms } => ms.max(0.0),
        };
        self.steps.push(step);
        self
    }

    /// Scale every time quantity by `factor`. A factor of zero collapses
    /// the timeline so playback settles on its end values in one frame.
    ///
    /// # Panics
    /// Panics if `factor` is negative.
    pub fn scaled(mut self, factor: f32) -> Self {
        assert!(factor >= 0.0, "Time scale must not be negative");
        self.delay_ms *= factor;
        for step in &mut self.steps {
            step.duration_ms *= factor;
            step.stagger_ms *= factor;
            step.start_ms *= factor;
        }
        self
    }

    /// Duration of the step content, ignoring the initial delay. The
    /// maximum over steps of start plus span, never negative.
    pub fn content_duration_ms(&self) -> f32 {
        self.steps
            .iter()
            .map(|s| s.start_ms + s.span_ms())
            .fold(0.0, f32::max)
    }

    /// Full run length including the initial delay.
    pub fn total_duration_ms(&self) -> f32 {
        self.delay_ms + self.content_duration_ms()
    }

    /// Whether any step targets `element`.
    pub fn declares(&self, element: &ElementId) -> bool {
        self.steps
            .iter()
            .any(|s| s.target_index(element).is_some())
    }
}

/// A playable instance of a [`TimelineSpec`].
///
/// The timeline holds a position in `[0, total_duration_ms]`. Forward
/// playback moves the position toward the total, reverse playback toward
/// zero; sampling always reads whatever the current position says, so a
/// direction change mid-run stays continuous.
#[derive(Debug, Clone)]
pub struct Timeline {
    id: TimelineId,
    spec: TimelineSpec,
    direction: PlayDirection,
    state: PlaybackState,
    position_ms: f32,
}

impl Timeline {
    pub fn new(spec: TimelineSpec) -> Self {
        Self {
            id: TimelineId::next(),
            spec,
            direction: PlayDirection::Forward,
            state: PlaybackState::Idle,
            position_ms: 0.0,
        }
    }

    pub fn id(&self) -> TimelineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &TimelineSpec {
        &self.spec
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn total_duration_ms(&self) -> f32 {
        self.spec.total_duration_ms()
    }

    /// Fraction of the run the position has covered, 0.0 at the start
    /// values and 1.0 at the end values.
    pub fn progress(&self) -> f32 {
        let total = self.total_duration_ms();
        if total <= 0.0 {
            return match (self.state, self.direction) {
                (PlaybackState::Finished, PlayDirection::Forward) => 1.0,
                _ => 0.0,
            };
        }
        (self.position_ms / total).clamp(0.0, 1.0)
    }

    /// Start or redirect playback.
    ///
    /// Playing the direction that is already running, or that already
    /// finished, is a no-op. Redirecting a running timeline keeps the
    /// current position so sampled values stay continuous.
    ///
    /// Returns true if playback state changed.
    pub fn play(&mut self, direction: PlayDirection) -> bool {
        match self.state {
            PlaybackState::Running if self.direction == direction => false,
            PlaybackState::Finished if self.direction == direction => false,
            _ => {
                if self.state == PlaybackState::Idle {
                    self.position_ms = match direction {
                        PlayDirection::Forward => 0.0,
                        PlayDirection::Reverse => self.total_duration_ms(),
                    };
                }
                self.direction = direction;
                self.state = PlaybackState::Running;
                true
            }
        }
    }

    /// Stop playback where it stands. Sampled values stay frozen at the
    /// current position. Returns true if a run was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Cancelled;
            true
        } else {
            false
        }
    }

    /// Advance the position by `delta_ms` in the current direction.
    ///
    /// Returns true while the timeline still consumes frame time. The
    /// transition to [`PlaybackState::Finished`] happens inside the call
    /// that reaches the end.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }

        let total = self.total_duration_ms();
        match self.direction {
            PlayDirection::Forward => {
                self.position_ms = (self.position_ms + delta_ms).min(total);
                if self.position_ms >= total {
                    self.state = PlaybackState::Finished;
                }
            }
            PlayDirection::Reverse => {
                self.position_ms = (self.position_ms - delta_ms).max(0.0);
                if self.position_ms <= 0.0 {
                    self.state = PlaybackState::Finished;
                }
            }
        }

        self.state.is_active()
    }

    /// Current value of one declared property of `element`, or None when
    /// no step of the spec drives that property for that element.
    ///
    /// Declared properties are defined over the whole run: before a step's
    /// window they sample at the step's start value, after it at the end
    /// value. When several steps drive the same property the later step
    /// wins.
    pub fn sample(&self, element: &ElementId, property: VisualProperty) -> Option<f32> {
        let mut value = None;
        self.fold_tracks(element, |prop, v| {
            if prop == property {
                value = Some(v);
            }
        });
        value
    }

    /// Apply every declared property of `element` onto `snapshot`,
    /// leaving undeclared properties untouched.
    pub fn snapshot_into(&self, element: &ElementId, snapshot: &mut VisualSnapshot) {
        self.fold_tracks(element, |prop, v| snapshot.set(prop, v));
    }

    /// Whether the spec drives `element` at all.
    pub fn declares(&self, element: &ElementId) -> bool {
        self.spec.declares(element)
    }

    fn fold_tracks(&self, element: &ElementId, mut visit: impl FnMut(VisualProperty, f32)) {
        let content_time = (self.position_ms - self.spec.delay_ms).max(0.0);

        for step in &self.spec.steps {
            let Some(index) = step.target_index(element) else {
                continue;
            };

            let start = step.target_start_ms(index);
            let local = if step.duration_ms <= 0.0 {
                if content_time >= start { 1.0 } else { 0.0 }
            } else {
                ((content_time - start) / step.duration_ms).clamp(0.0, 1.0)
            };
            let eased = step.easing.evaluate(local);

            for (prop, span) in &step.tracks {
                visit(*prop, span.at(eased));
            }
        }
    }
}
