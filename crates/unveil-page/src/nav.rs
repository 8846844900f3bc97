//! Navigation bar: entrance, menu tween, anchor scrolling, active item.
//!
//! The bar itself enters through the registry like any mount-triggered
//! reveal. The collapsible menu is page chrome, toggled by user action
//! rather than scrolling, so its open/close tween is a timeline the bar
//! owns directly and replays in both directions.
//!
//! Scroll requests are queued and picked up by the page on the next
//! frame; the bar never touches the viewport itself.

use std::collections::VecDeque;

use unveil_motion::{
    Easing, ElementId, PlayDirection, Timeline, TimelineSpec, TimelineStep, VisualProperty,
};
use unveil_scroll::{RevealRegistry, RevealTrigger};

use crate::content::{NavItem, NAV_ITEMS};

pub const NAV_BAR: &str = "nav-bar";
pub const NAV_MENU: &str = "nav-menu";

fn bar_entrance_spec() -> TimelineSpec {
    TimelineSpec::new("nav-entrance").delay_ms(500.0).step(
        TimelineStep::new([NAV_BAR])
            .duration_ms(1000.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, -50.0, 0.0),
    )
}

fn menu_spec() -> TimelineSpec {
    TimelineSpec::new("nav-menu").step(
        TimelineStep::new([NAV_MENU])
            .duration_ms(300.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::Scale, 0.95, 1.0)
            .track(VisualProperty::TranslateY, -20.0, 0.0),
    )
}

/// Fixed navigation bar.
#[derive(Debug)]
pub struct NavBar {
    menu: Timeline,
    menu_open: bool,
    active: Option<&'static str>,
    pending_scrolls: VecDeque<&'static str>,
}

impl NavBar {
    pub fn new(time_scale: f32) -> Self {
        Self {
            menu: Timeline::new(menu_spec().scaled(time_scale)),
            menu_open: false,
            active: None,
            pending_scrolls: VecDeque::new(),
        }
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    /// Register the bar's entrance reveal.
    pub fn mount(&self, time_scale: f32, registry: &mut RevealRegistry) {
        registry.register(
            NAV_BAR,
            bar_entrance_spec().scaled(time_scale),
            RevealTrigger::OnMount,
        );
    }

    /// Advance the menu tween.
    pub fn update(&mut self, delta_ms: f32) {
        self.menu.update(delta_ms);
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.menu.play(PlayDirection::Reverse);
        } else {
            self.menu.play(PlayDirection::Forward);
        }
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu.play(PlayDirection::Reverse);
            self.menu_open = false;
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_opacity(&self) -> f32 {
        self.menu
            .sample(&ElementId::from(NAV_MENU), VisualProperty::Opacity)
            .unwrap_or(0.0)
    }

    /// Queue a smooth scroll to `anchor`. Picking an item also closes
    /// the menu. Unknown anchors are dropped with a log line.
    pub fn request_scroll(&mut self, anchor: &str) -> bool {
        let Some(item) = NAV_ITEMS.iter().find(|item| item.anchor == anchor) else {
            log::warn!("ignoring scroll request to unknown anchor {anchor:?}");
            return false;
        };
        self.pending_scrolls.push_back(item.anchor);
        self.close_menu();
        true
    }

    /// Next queued scroll target, if any.
    pub fn take_scroll_request(&mut self) -> Option<&'static str> {
        self.pending_scrolls.pop_front()
    }

    /// Record the section whose anchor most recently entered.
    pub fn set_active(&mut self, anchor: &str) {
        if let Some(item) = NAV_ITEMS.iter().find(|item| item.anchor == anchor) {
            self.active = Some(item.anchor);
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_tween_plays_both_ways() {
        let mut nav = NavBar::new(1.0);

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.update(300.0);
        assert_eq!(nav.menu_opacity(), 1.0);

        nav.toggle_menu();
        nav.update(300.0);
        assert!(!nav.is_menu_open());
        assert_eq!(nav.menu_opacity(), 0.0);
    }

    #[test]
    fn test_interrupted_close_resumes_mid_value() {
        let mut nav = NavBar::new(1.0);

        nav.toggle_menu();
        nav.update(150.0);
        let mid = nav.menu_opacity();
        assert!(mid > 0.0 && mid < 1.0);

        nav.toggle_menu();
        assert_eq!(nav.menu_opacity(), mid);
    }

    #[test]
    fn test_scroll_requests_queue_in_order() {
        let mut nav = NavBar::new(1.0);
        nav.toggle_menu();

        assert!(nav.request_scroll("about"));
        assert!(nav.request_scroll("contact"));
        assert!(!nav.request_scroll("basement"));

        // Selecting an item closes the menu.
        assert!(!nav.is_menu_open());
        assert_eq!(nav.take_scroll_request(), Some("about"));
        assert_eq!(nav.take_scroll_request(), Some("contact"));
        assert_eq!(nav.take_scroll_request(), None);
    }

    #[test]
    fn test_active_tracking_only_accepts_known_anchors() {
        let mut nav = NavBar::new(1.0);
        assert_eq!(nav.active(), None);

        nav.set_active("projects");
        assert_eq!(nav.active(), Some("projects"));

        nav.set_active("basement");
        assert_eq!(nav.active(), Some("projects"));
    }

    #[test]
    fn test_mount_registers_entrance() {
        let mut registry = RevealRegistry::new();
        let nav = NavBar::new(1.0);
        nav.mount(1.0, &mut registry);

        assert!(registry.contains(&ElementId::from(NAV_BAR)));
        let timeline = registry.timeline_of(&ElementId::from(NAV_BAR)).unwrap();
        assert_eq!(timeline.total_duration_ms(), 1500.0);
    }
}
