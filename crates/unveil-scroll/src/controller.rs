//! Per-element reveal state machine.
//!
//! A controller owns one timeline and walks it through the reveal
//! lifecycle in response to viewport crossings:
//!
//! ```text
//!            enter                    timeline finished
//!   Idle ────────────► Entering ─────────────────────► Entered
//!    ▲                     │                               │
//!    │                     │ exit (interrupt)              │ exit
//!    │                     ▼                               ▼
//!    └───────────────── Exiting ◄──────────────────────────┘
//!        timeline finished
//! ```
//!
//! Reverse playback always resumes from the timeline's current position,
//! so an interrupted enter walks back through the exact values it already
//! showed. An enter crossing that arrives while the exit play is still
//! running is dropped; the element returns to its start values first and
//! re-enters on the next crossing.
//!
//! `dispose` is terminal and idempotent. A disposed controller ignores
//! crossings and ticks, and emits nothing beyond its single
//! [`RevealEvent::Disposed`].

use serde::{Deserialize, Serialize};
use unveil_motion::{
    ElementId, PlayDirection, PlaybackState, Timeline, TimelineId, VisualProperty, VisualSnapshot,
};

use crate::events::{EventQueue, RevealEvent, TimelineEvent};
use crate::observer::{CrossingKind, CrossingThresholds, SubscriptionId};

/// Where an element sits in its reveal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// At start values, waiting for an enter crossing.
    Idle,
    /// Enter timeline playing forward.
    Entering,
    /// Enter timeline finished; element fully revealed.
    Entered,
    /// Timeline playing in reverse back toward start values.
    Exiting,
    /// Terminal. The controller no longer reacts to anything.
    Disposed,
}

/// Tuning for visibility-triggered reveals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction at which the enter play starts.
    pub enter_threshold: f32,
    /// Visible fraction below which the exit play starts.
    pub exit_threshold: f32,
    /// When false the reveal runs once and ignores later crossings.
    pub replay_on_reenter: bool,
}

impl RevealConfig {
    /// Enter and exit at the same visible fraction, replaying on re-entry.
    pub fn at_fraction(fraction: f32) -> Self {
        Self {
            enter_threshold: fraction,
            exit_threshold: fraction,
            replay_on_reenter: true,
        }
    }

    /// Disable replays; the first completed enter is final.
    pub fn once(mut self) -> Self {
        self.replay_on_reenter = false;
        self
    }

    pub fn thresholds(&self) -> CrossingThresholds {
        CrossingThresholds::new(self.enter_threshold, self.exit_threshold)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::at_fraction(0.2)
    }
}

/// What starts a controller's enter play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealTrigger {
    /// Play when the element's visible fraction crosses the thresholds.
    OnVisible(RevealConfig),
    /// Play on the first tick after registration. Any hold-off is the
    /// timeline's own delay.
    OnMount,
}

/// Drives one timeline through the reveal lifecycle.
#[derive(Debug)]
pub struct RevealController {
    element: ElementId,
    trigger: RevealTrigger,
    subscription: Option<SubscriptionId>,
    timeline: Timeline,
    phase: RevealPhase,
}

impl RevealController {
    pub fn new(element: impl Into<ElementId>, timeline: Timeline, trigger: RevealTrigger) -> Self {
        Self {
            element: element.into(),
            trigger,
            subscription: None,
            timeline,
            phase: RevealPhase::Idle,
        }
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn trigger(&self) -> RevealTrigger {
        self.trigger
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn timeline_id(&self) -> TimelineId {
        self.timeline.id()
    }

    /// The observer subscription feeding this controller, if any.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    pub fn attach_subscription(&mut self, subscription: SubscriptionId) {
        self.subscription = Some(subscription);
    }

    /// Whether exit crossings reverse the reveal after it completed.
    pub fn replays(&self) -> bool {
        match self.trigger {
            RevealTrigger::OnVisible(config) => config.replay_on_reenter,
            RevealTrigger::OnMount => false,
        }
    }

    /// Current value of one property driven by this controller's timeline.
    pub fn sample(&self, element: &ElementId, property: VisualProperty) -> Option<f32> {
        self.timeline.sample(element, property)
    }

    /// Apply every driven property of `element` onto `snapshot`.
    pub fn snapshot_into(&self, element: &ElementId, snapshot: &mut VisualSnapshot) {
        self.timeline.snapshot_into(element, snapshot);
    }

    /// React to a threshold crossing reported by the observer.
    pub fn on_crossing(&mut self, kind: CrossingKind, events: &mut EventQueue) {
        match (self.phase, kind) {
            (RevealPhase::Idle, CrossingKind::Enter) => {
                self.start_enter(events);
            }
            (RevealPhase::Entering, CrossingKind::Exit) => {
                // Interrupt: reverse from wherever the enter play got to.
                self.start_exit(events);
            }
            (RevealPhase::Entered, CrossingKind::Exit) if self.replays() => {
                self.start_exit(events);
            }
            // Enter during an exit play is dropped; the reverse run
            // completes first. Everything else has nothing to do.
            _ => {}
        }
    }

    /// Advance the timeline by one frame and resolve phase transitions.
    pub fn tick(&mut self, delta_ms: f32, events: &mut EventQueue) {
        if self.phase == RevealPhase::Disposed {
            return;
        }

        if self.phase == RevealPhase::Idle && matches!(self.trigger, RevealTrigger::OnMount) {
            self.start_enter(events);
        }

        let was_running = self.timeline.state() == PlaybackState::Running;
        self.timeline.update(delta_ms);
        if !was_running || self.timeline.state() != PlaybackState::Finished {
            return;
        }

        match self.phase {
            RevealPhase::Entering => {
                self.phase = RevealPhase::Entered;
                events.push_reveal(RevealEvent::Entered {
                    element: self.element.clone(),
                    timeline: self.timeline.id(),
                });
                self.push_finished(PlayDirection::Forward, events);
            }
            RevealPhase::Exiting => {
                self.phase = RevealPhase::Idle;
                events.push_reveal(RevealEvent::ReturnedToIdle {
                    element: self.element.clone(),
                    timeline: self.timeline.id(),
                });
                self.push_finished(PlayDirection::Reverse, events);
            }
            _ => {}
        }
    }

    /// Hand back the subscription once it can no longer fire anything
    /// useful, so the caller can stop observing. Only one-shot reveals
    /// that reached [`RevealPhase::Entered`] give theirs up.
    pub fn release_subscription(&mut self) -> Option<SubscriptionId> {
        if self.phase == RevealPhase::Entered && !self.replays() {
            self.subscription.take()
        } else {
            None
        }
    }

    /// Tear the controller down. Returns the subscription to unregister,
    /// if one was still attached. Calling again does nothing.
    pub fn dispose(&mut self, events: &mut EventQueue) -> Option<SubscriptionId> {
        if self.phase == RevealPhase::Disposed {
            return None;
        }

        if self.timeline.cancel() {
            events.push_timeline(TimelineEvent::Cancelled {
                timeline: self.timeline.id(),
                element: self.element.clone(),
                name: self.timeline.name().to_string(),
            });
        }
        events.push_reveal(RevealEvent::Disposed {
            element: self.element.clone(),
        });
        self.phase = RevealPhase::Disposed;
        self.subscription.take()
    }

    fn start_enter(&mut self, events: &mut EventQueue) {
        self.phase = RevealPhase::Entering;
        self.timeline.play(PlayDirection::Forward);
        events.push_reveal(RevealEvent::EnterStarted {
            element: self.element.clone(),
            timeline: self.timeline.id(),
        });
    }

    fn start_exit(&mut self, events: &mut EventQueue) {
        self.phase = RevealPhase::Exiting;
        self.timeline.play(PlayDirection::Reverse);
        events.push_reveal(RevealEvent::ExitStarted {
            element: self.element.clone(),
            timeline: self.timeline.id(),
        });
    }

    fn push_finished(&self, direction: PlayDirection, events: &mut EventQueue) {
        events.push_timeline(TimelineEvent::Finished {
            timeline: self.timeline.id(),
            element: self.element.clone(),
            name: self.timeline.name().to_string(),
            direction,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EngineEvent;
    use unveil_motion::{TimelineSpec, TimelineStep};

    fn fade_controller(trigger: RevealTrigger) -> RevealController {
        let spec = TimelineSpec::new("fade-up").step(
            TimelineStep::new(["card"])
                .duration_ms(1000.0)
                .track(VisualProperty::Opacity, 0.0, 1.0)
                .track(VisualProperty::TranslateY, 50.0, 0.0),
        );
        RevealController::new("card", Timeline::new(spec), trigger)
    }

    fn reveal_names(events: &mut EventQueue) -> Vec<&'static str> {
        events
            .drain()
            .filter_map(|event| match event {
                EngineEvent::Reveal(RevealEvent::EnterStarted { .. }) => Some("enter_started"),
                EngineEvent::Reveal(RevealEvent::Entered { .. }) => Some("entered"),
                EngineEvent::Reveal(RevealEvent::ExitStarted { .. }) => Some("exit_started"),
                EngineEvent::Reveal(RevealEvent::ReturnedToIdle { .. }) => {
                    Some("returned_to_idle")
                }
                EngineEvent::Reveal(RevealEvent::Disposed { .. }) => Some("disposed"),
                EngineEvent::Timeline(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_enter_crossing_plays_to_entered() {
        let mut controller = fade_controller(RevealTrigger::OnVisible(RevealConfig::default()));
        let mut events = EventQueue::new();
        let card = ElementId::from("card");

        controller.on_crossing(CrossingKind::Enter, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entering);

        controller.tick(600.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entering);
        controller.tick(500.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entered);

        assert_eq!(reveal_names(&mut events), vec!["enter_started", "entered"]);
        assert_eq!(controller.sample(&card, VisualProperty::Opacity), Some(1.0));
        assert_eq!(controller.sample(&card, VisualProperty::TranslateY), Some(0.0));
    }

    #[test]
    fn test_completion_reports_timeline_finished_forward() {
        let mut controller = fade_controller(RevealTrigger::OnVisible(RevealConfig::default()));
        let mut events = EventQueue::new();

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(1000.0, &mut events);

        let finished: Vec<_> = events
            .drain()
            .filter_map(|event| match event {
                EngineEvent::Timeline(TimelineEvent::Finished { direction, .. }) => {
                    Some(direction)
                }
                _ => None,
            })
            .collect();
        assert_eq!(finished, vec![PlayDirection::Forward]);
    }

    #[test]
    fn test_replay_cycle_repeats() {
        let mut controller = fade_controller(RevealTrigger::OnVisible(RevealConfig::default()));
        let mut events = EventQueue::new();

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(1000.0, &mut events);
        controller.on_crossing(CrossingKind::Exit, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Exiting);
        controller.tick(1000.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Idle);

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(1000.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entered);

        assert_eq!(
            reveal_names(&mut events),
            vec![
                "enter_started",
                "entered",
                "exit_started",
                "returned_to_idle",
                "enter_started",
                "entered",
            ]
        );
    }

    #[test]
    fn test_one_shot_ignores_later_crossings() {
        let config = RevealConfig::default().once();
        let mut controller = fade_controller(RevealTrigger::OnVisible(config));
        controller.attach_subscription(SubscriptionId::next());
        let mut events = EventQueue::new();

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(1000.0, &mut events);
        assert!(controller.release_subscription().is_some());
        events.clear();

        controller.on_crossing(CrossingKind::Exit, &mut events);
        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(16.7, &mut events);

        assert_eq!(controller.phase(), RevealPhase::Entered);
        assert!(events.is_empty());
    }

    #[test]
    fn test_interrupted_enter_reverses_without_snapping() {
        let mut controller = fade_controller(RevealTrigger::OnVisible(RevealConfig::default()));
        let mut events = EventQueue::new();
        let card = ElementId::from("card");

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(400.0, &mut events);
        let before = controller.sample(&card, VisualProperty::Opacity).unwrap();
        assert!(before > 0.0 && before < 1.0);

        controller.on_crossing(CrossingKind::Exit, &mut events);
        let after = controller.sample(&card, VisualProperty::Opacity).unwrap();
        assert_eq!(before, after);

        controller.tick(400.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Idle);
        assert_eq!(controller.sample(&card, VisualProperty::Opacity), Some(0.0));
    }

    #[test]
    fn test_enter_during_exit_is_dropped() {
        let mut controller = fade_controller(RevealTrigger::OnVisible(RevealConfig::default()));
        let mut events = EventQueue::new();

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(1000.0, &mut events);
        controller.on_crossing(CrossingKind::Exit, &mut events);
        controller.tick(300.0, &mut events);
        events.clear();

        controller.on_crossing(CrossingKind::Enter, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Exiting);
        assert!(events.is_empty());

        controller.tick(700.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_mount_trigger_starts_on_first_tick() {
        let spec = TimelineSpec::new("hero-intro").delay_ms(1000.0).step(
            TimelineStep::new(["hero-title"])
                .duration_ms(1200.0)
                .track(VisualProperty::Opacity, 0.0, 1.0),
        );
        let mut controller =
            RevealController::new("hero", Timeline::new(spec), RevealTrigger::OnMount);
        let mut events = EventQueue::new();

        controller.tick(16.7, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entering);
        assert_eq!(reveal_names(&mut events), vec!["enter_started"]);

        controller.tick(2200.0, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entered);
    }

    #[test]
    fn test_dispose_cancels_and_is_idempotent() {
        let mut controller = fade_controller(RevealTrigger::OnVisible(RevealConfig::default()));
        controller.attach_subscription(SubscriptionId::next());
        let mut events = EventQueue::new();

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(300.0, &mut events);
        events.clear();

        let released = controller.dispose(&mut events);
        assert!(released.is_some());
        assert_eq!(controller.phase(), RevealPhase::Disposed);

        let drained: Vec<_> = events.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            EngineEvent::Timeline(TimelineEvent::Cancelled { .. })
        ));
        assert!(drained[1].is_disposed());

        assert!(controller.dispose(&mut events).is_none());
        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(16.7, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_zero_duration_timeline_settles_in_one_tick() {
        let spec = TimelineSpec::new("fade-up")
            .step(
                TimelineStep::new(["card"])
                    .duration_ms(1000.0)
                    .track(VisualProperty::Opacity, 0.0, 1.0),
            )
            .scaled(0.0);
        let mut controller = RevealController::new(
            "card",
            Timeline::new(spec),
            RevealTrigger::OnVisible(RevealConfig::default()),
        );
        let mut events = EventQueue::new();
        let card = ElementId::from("card");

        controller.on_crossing(CrossingKind::Enter, &mut events);
        controller.tick(16.7, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Entered);
        assert_eq!(controller.sample(&card, VisualProperty::Opacity), Some(1.0));

        // The lifecycle still walks back to Idle, but a zero-width
        // timeline keeps sampling at end values: no motion either way.
        controller.on_crossing(CrossingKind::Exit, &mut events);
        controller.tick(16.7, &mut events);
        assert_eq!(controller.phase(), RevealPhase::Idle);
        assert_eq!(controller.sample(&card, VisualProperty::Opacity), Some(1.0));
    }
}
