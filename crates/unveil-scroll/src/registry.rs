//! Central ownership of every reveal on a page.
//!
//! The registry maps element ids to controllers, feeds them crossings
//! from one shared [`ViewportObserver`], and collects their events into
//! a single queue. One `update` call per frame does everything:
//!
//! 1. scan the viewport and route new crossings to their controllers,
//! 2. tick every controller in registration order,
//! 3. advance free-running loop groups.
//!
//! Sampling resolves in registration order with loop groups last, so a
//! loop that drives the same property as a reveal timeline wins once
//! both are active.

use std::collections::HashMap;

use static_assertions::assert_impl_all;
use unveil_motion::{
    ElementId, LoopGroup, Timeline, TimelineId, TimelineSpec, VisualProperty, VisualSnapshot,
};

use crate::controller::{RevealController, RevealPhase, RevealTrigger};
use crate::events::{EngineEvent, EventQueue};
use crate::observer::{Crossing, SubscriptionId, ViewportObserver};
use crate::viewport::{DocumentLayout, Viewport};

/// Owns controllers, the observer, and the event queue.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    controllers: HashMap<ElementId, RevealController>,
    /// Registration order; ticks and sampling walk this.
    order: Vec<ElementId>,
    observer: ViewportObserver,
    subscription_index: HashMap<SubscriptionId, ElementId>,
    loops: Vec<LoopGroup>,
    events: EventQueue,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reveal for `element`. Registering an element that
    /// already has one disposes the old controller first.
    pub fn register(
        &mut self,
        element: impl Into<ElementId>,
        spec: TimelineSpec,
        trigger: RevealTrigger,
    ) -> TimelineId {
        let element = element.into();
        if self.controllers.contains_key(&element) {
            tracing::warn!("replacing reveal registration for {element}");
            self.dispose(&element);
        }

        let mut controller = RevealController::new(element.clone(), Timeline::new(spec), trigger);
        if let RevealTrigger::OnVisible(config) = trigger {
            let subscription = self.observer.observe(element.clone(), config.thresholds());
            controller.attach_subscription(subscription);
            self.subscription_index.insert(subscription, element.clone());
        }

        let id = controller.timeline_id();
        self.order.push(element.clone());
        self.controllers.insert(element, controller);
        id
    }

    /// Add a free-running loop group. Loops start on the next update and
    /// run until [`Self::dispose_all`].
    pub fn add_loop_group(&mut self, group: LoopGroup) {
        self.loops.push(group);
    }

    /// Advance the whole page by one frame.
    pub fn update(&mut self, viewport: &Viewport, layout: &DocumentLayout, delta_ms: f32) {
        self.observer.scan(viewport, layout);
        let crossings: Vec<Crossing> = self.observer.drain_crossings().collect();
        for crossing in crossings {
            let Some(element) = self.subscription_index.get(&crossing.subscription) else {
                continue;
            };
            if let Some(controller) = self.controllers.get_mut(element) {
                controller.on_crossing(crossing.kind, &mut self.events);
            }
        }

        for index in 0..self.order.len() {
            let element = self.order[index].clone();
            if let Some(controller) = self.controllers.get_mut(&element) {
                controller.tick(delta_ms, &mut self.events);
                if let Some(subscription) = controller.release_subscription() {
                    self.subscription_index.remove(&subscription);
                    self.observer.dispose(subscription);
                }
            }
        }

        for group in &mut self.loops {
            group.update(delta_ms);
        }
    }

    /// Tear down one reveal. Pending crossings for it are dropped and it
    /// reports [`crate::events::RevealEvent::Disposed`] exactly once.
    pub fn dispose(&mut self, element: &ElementId) -> bool {
        let Some(mut controller) = self.controllers.remove(element) else {
            return false;
        };
        self.order.retain(|e| e != element);
        if let Some(subscription) = controller.dispose(&mut self.events) {
            self.subscription_index.remove(&subscription);
            self.observer.dispose(subscription);
        }
        true
    }

    /// Tear down every reveal and stop every loop group. Idempotent.
    pub fn dispose_all(&mut self) {
        let elements = self.order.clone();
        for element in &elements {
            self.dispose(element);
        }
        for group in &mut self.loops {
            group.stop();
        }
        self.loops.clear();
    }

    /// Take the events produced since the last drain, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain()
    }

    /// Current value of `property` for `element` across every active
    /// source.
    pub fn sample(&self, element: &ElementId, property: VisualProperty) -> Option<f32> {
        let mut value = None;
        for owner in &self.order {
            if let Some(controller) = self.controllers.get(owner) {
                if let Some(v) = controller.sample(element, property) {
                    value = Some(v);
                }
            }
        }
        for group in &self.loops {
            if let Some(v) = group.sample(element, property) {
                value = Some(v);
            }
        }
        value
    }

    /// Full visual state of `element`, defaults where nothing drives it.
    pub fn snapshot(&self, element: &ElementId) -> VisualSnapshot {
        let mut snapshot = VisualSnapshot::default();
        for owner in &self.order {
            if let Some(controller) = self.controllers.get(owner) {
                controller.snapshot_into(element, &mut snapshot);
            }
        }
        for group in &self.loops {
            group.snapshot_into(element, &mut snapshot);
        }
        snapshot
    }

    pub fn phase_of(&self, element: &ElementId) -> Option<RevealPhase> {
        self.controllers.get(element).map(|c| c.phase())
    }

    pub fn controller(&self, element: &ElementId) -> Option<&RevealController> {
        self.controllers.get(element)
    }

    pub fn timeline_of(&self, element: &ElementId) -> Option<&Timeline> {
        self.controllers.get(element).map(|c| c.timeline())
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.controllers.contains_key(element)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Watch entries still alive in the observer.
    pub fn active_subscriptions(&self) -> usize {
        self.observer.len()
    }

    pub fn loop_groups(&self) -> &[LoopGroup] {
        &self.loops
    }
}

assert_impl_all!(RevealRegistry: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::RevealConfig;
    use unveil_motion::{Easing, LoopMember, TimelineStep};

    fn fade_spec(target: &str) -> TimelineSpec {
        TimelineSpec::new(format!("{target}-reveal")).step(
            TimelineStep::new([target])
                .duration_ms(1000.0)
                .track(VisualProperty::Opacity, 0.0, 1.0),
        )
    }

    fn on_visible(fraction: f32) -> RevealTrigger {
        RevealTrigger::OnVisible(RevealConfig::at_fraction(fraction))
    }

    /// One 900px section starting at y=900 in a 900px viewport.
    fn section_layout() -> DocumentLayout {
        let mut layout = DocumentLayout::new();
        layout.place("about", 900.0, 900.0);
        layout
    }

    #[test]
    fn test_register_tracks_controllers_and_subscriptions() {
        let mut registry = RevealRegistry::new();
        registry.register("about", fade_spec("about"), on_visible(0.2));
        registry.register("hero", fade_spec("hero"), RevealTrigger::OnMount);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&ElementId::from("about")));
        // Mount triggers never watch the viewport.
        assert_eq!(registry.active_subscriptions(), 1);
    }

    #[test]
    fn test_replacing_registration_disposes_old_controller() {
        let mut registry = RevealRegistry::new();
        let first = registry.register("about", fade_spec("about"), on_visible(0.2));
        let second = registry.register("about", fade_spec("about"), on_visible(0.3));

        assert_ne!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_subscriptions(), 1);

        let events: Vec<_> = registry.drain_events().collect();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_disposed());
    }

    #[test]
    fn test_update_routes_crossings_and_completes() {
        let layout = section_layout();
        let mut registry = RevealRegistry::new();
        registry.register("about", fade_spec("about"), on_visible(0.2));
        let about = ElementId::from("about");

        // Section out of view: nothing happens.
        registry.update(&Viewport::new(0.0, 900.0), &layout, 16.7);
        assert_eq!(registry.phase_of(&about), Some(RevealPhase::Idle));

        // Scroll it 30% into view, then give the timeline its full run.
        registry.update(&Viewport::new(270.0, 900.0), &layout, 16.7);
        assert_eq!(registry.phase_of(&about), Some(RevealPhase::Entering));
        registry.update(&Viewport::new(270.0, 900.0), &layout, 1000.0);
        assert_eq!(registry.phase_of(&about), Some(RevealPhase::Entered));
        assert_eq!(registry.sample(&about, VisualProperty::Opacity), Some(1.0));

        let entered = registry.drain_events().filter(|e| e.is_entered()).count();
        assert_eq!(entered, 1);
    }

    #[test]
    fn test_disposed_element_hears_nothing() {
        let layout = section_layout();
        let mut registry = RevealRegistry::new();
        registry.register("about", fade_spec("about"), on_visible(0.2));
        let about = ElementId::from("about");

        assert!(registry.dispose(&about));
        assert!(!registry.dispose(&about));
        assert_eq!(registry.active_subscriptions(), 0);
        registry.drain_events().for_each(drop);

        registry.update(&Viewport::new(270.0, 900.0), &layout, 1000.0);
        assert!(registry.drain_events().next().is_none());
        assert_eq!(registry.phase_of(&about), None);
    }

    #[test]
    fn test_one_shot_releases_its_subscription() {
        let layout = section_layout();
        let mut registry = RevealRegistry::new();
        let trigger = RevealTrigger::OnVisible(RevealConfig::at_fraction(0.2).once());
        registry.register("about", fade_spec("about"), trigger);
        let about = ElementId::from("about");

        registry.update(&Viewport::new(270.0, 900.0), &layout, 1200.0);
        assert_eq!(registry.phase_of(&about), Some(RevealPhase::Entered));
        assert_eq!(registry.active_subscriptions(), 0);
        assert_eq!(registry.len(), 1);

        // Scrolling away and back moves nothing.
        registry.drain_events().for_each(drop);
        registry.update(&Viewport::new(0.0, 900.0), &layout, 16.7);
        registry.update(&Viewport::new(270.0, 900.0), &layout, 16.7);
        assert_eq!(registry.phase_of(&about), Some(RevealPhase::Entered));
        assert!(registry.drain_events().next().is_none());
    }

    #[test]
    fn test_dispose_all_empties_registry_and_stops_loops() {
        let layout = section_layout();
        let mut registry = RevealRegistry::new();
        for name in ["a", "b", "c", "d", "e"] {
            registry.register(name, fade_spec(name), on_visible(0.2));
        }
        registry.add_loop_group(LoopGroup::new("orbs").member(LoopMember::new(
            "orb-0",
            VisualProperty::TranslateY,
            0.0,
            30.0,
        )));
        registry.update(&Viewport::new(0.0, 900.0), &layout, 16.7);

        registry.dispose_all();
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.active_subscriptions(), 0);
        assert!(registry.loop_groups().is_empty());

        let events: Vec<_> = registry.drain_events().collect();
        assert_eq!(events.iter().filter(|e| e.is_disposed()).count(), 5);

        registry.dispose_all();
        assert!(registry.drain_events().next().is_none());
    }

    #[test]
    fn test_loop_group_wins_shared_property() {
        let mut registry = RevealRegistry::new();
        let layout = DocumentLayout::new();
        let orb = ElementId::from("orb-0");

        registry.register("orb-0", fade_spec("orb-0"), RevealTrigger::OnMount);
        registry.add_loop_group(
            LoopGroup::new("orbs").member(
                LoopMember::new("orb-0", VisualProperty::Opacity, 0.2, 0.8)
                    .duration_ms(1000.0)
                    .easing(Easing::Linear),
            ),
        );

        // Timeline finishes at opacity 1; the loop is half way down its
        // return leg, at 0.5.
        registry.update(&Viewport::new(0.0, 900.0), &layout, 1000.0);
        registry.update(&Viewport::new(0.0, 900.0), &layout, 500.0);

        let sampled = registry.sample(&orb, VisualProperty::Opacity).unwrap();
        assert!((sampled - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_elements_missing_from_layout_stay_idle() {
        let mut registry = RevealRegistry::new();
        registry.register("ghost", fade_spec("ghost"), on_visible(0.0));
        let layout = DocumentLayout::new();

        registry.update(&Viewport::new(0.0, 900.0), &layout, 16.7);
        registry.update(&Viewport::new(9000.0, 900.0), &layout, 16.7);

        assert_eq!(
            registry.phase_of(&ElementId::from("ghost")),
            Some(RevealPhase::Idle)
        );
        assert!(registry.drain_events().next().is_none());
    }
}
