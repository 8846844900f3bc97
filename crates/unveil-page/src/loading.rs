//! Entrance loading sequence.
//!
//! The loader is a fixed timeline, not a reveal: text in, progress bar to
//! full width, a short hold, then the whole screen fades away. Completion
//! fires a gate exactly once; the page mounts its sections behind it.

use unveil_motion::{
    Easing, ElementId, PlayDirection, PlaybackState, StepOffset, Timeline, TimelineSpec,
    TimelineStep, VisualProperty,
};

pub const LOADING_SCREEN: &str = "loading-screen";
pub const LOADING_TEXT: &str = "loading-text";
pub const LOADING_BAR: &str = "loading-bar";

fn loading_spec() -> TimelineSpec {
    TimelineSpec::new("loading")
        .step(
            TimelineStep::new([LOADING_TEXT])
                .duration_ms(1000.0)
                .easing(Easing::CubicOut)
                .track(VisualProperty::Opacity, 0.0, 1.0)
                .track(VisualProperty::TranslateY, 30.0, 0.0),
        )
        .step(
            TimelineStep::new([LOADING_BAR])
                .duration_ms(2500.0)
                .easing(Easing::CubicOut)
                .offset(StepOffset::Relative { ms: -500.0 })
                .track(VisualProperty::Width, 0.0, 100.0),
        )
        // 500ms hold before the fade out.
        .step(
            TimelineStep::new([LOADING_SCREEN])
                .duration_ms(800.0)
                .easing(Easing::CubicInOut)
                .offset(StepOffset::Relative { ms: 500.0 })
                .track(VisualProperty::Opacity, 1.0, 0.0)
                .track(VisualProperty::Scale, 1.0, 0.95),
        )
}

/// Plays the loader once and latches its completion.
#[derive(Debug)]
pub struct LoadingSequence {
    timeline: Timeline,
    gate_fired: bool,
}

impl LoadingSequence {
    /// Build the loader, scaled by the global time factor, and start it.
    pub fn new(time_scale: f32) -> Self {
        let mut timeline = Timeline::new(loading_spec().scaled(time_scale));
        timeline.play(PlayDirection::Forward);
        Self {
            timeline,
            gate_fired: false,
        }
    }

    /// Advance the loader. Returns true exactly once, on the frame the
    /// sequence completes.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        self.timeline.update(delta_ms);
        if self.timeline.state() == PlaybackState::Finished && !self.gate_fired {
            self.gate_fired = true;
            return true;
        }
        false
    }

    pub fn is_complete(&self) -> bool {
        self.gate_fired
    }

    /// Progress readout for the bar, 0 to 100.
    pub fn percent(&self) -> u8 {
        let width = self
            .timeline
            .sample(&ElementId::from(LOADING_BAR), VisualProperty::Width)
            .unwrap_or(0.0);
        width.round().clamp(0.0, 100.0) as u8
    }

    pub fn sample(&self, element: &ElementId, property: VisualProperty) -> Option<f32> {
        self.timeline.sample(element, property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_totals_4300ms() {
        assert_eq!(loading_spec().total_duration_ms(), 4300.0);
    }

    #[test]
    fn test_gate_fires_exactly_once() {
        let mut loading = LoadingSequence::new(1.0);

        let mut fired = 0;
        for _ in 0..300 {
            if loading.update(16.7) {
                fired += 1;
            }
        }

        assert_eq!(fired, 1);
        assert!(loading.is_complete());
        assert_eq!(loading.percent(), 100);
    }

    #[test]
    fn test_bar_rises_after_text_overlap() {
        let mut loading = LoadingSequence::new(1.0);
        let bar = ElementId::from(LOADING_BAR);

        // The bar holds at zero until 500ms, then rises.
        loading.update(400.0);
        assert_eq!(loading.sample(&bar, VisualProperty::Width), Some(0.0));
        assert_eq!(loading.percent(), 0);

        loading.update(1000.0);
        let width = loading.sample(&bar, VisualProperty::Width).unwrap();
        assert!(width > 0.0 && width < 100.0);
    }

    #[test]
    fn test_screen_fades_at_the_end() {
        let mut loading = LoadingSequence::new(1.0);
        let screen = ElementId::from(LOADING_SCREEN);

        // Before its step the screen holds at full opacity.
        loading.update(2000.0);
        assert_eq!(loading.sample(&screen, VisualProperty::Opacity), Some(1.0));

        loading.update(3000.0);
        assert!(loading.is_complete());
        assert_eq!(loading.sample(&screen, VisualProperty::Opacity), Some(0.0));
        assert_eq!(loading.sample(&screen, VisualProperty::Scale), Some(0.95));
    }

    #[test]
    fn test_zero_scale_completes_immediately() {
        let mut loading = LoadingSequence::new(0.0);
        assert!(loading.update(16.7));
        assert!(loading.is_complete());
    }
}
