//! The assembled portfolio page.
//!
//! [`Page`] owns every moving part and advances them from one `update`
//! call per frame, in a fixed order:
//!
//! 1. the loading sequence, until its gate fires (nothing else runs
//!    before that, so no crossing can be observed mid-load);
//! 2. at most one queued scroll request, which starts or replaces the
//!    smooth-scroll tween from the current offset;
//! 3. the navigation and form clocks;
//! 4. the reveal registry (viewport scan, controllers, ambient loops);
//! 5. event routing: anchor enter-crossings update the active nav item,
//!    then everything lands in the page's own queue for the embedder.

use unveil_config::UnveilConfig;
use unveil_motion::{
    Easing, ElementId, Interpolate, TimelineSpec, TimelineStep, VisualProperty, VisualSnapshot,
};
use unveil_scroll::{
    DocumentLayout, EngineEvent, EventQueue, RevealConfig, RevealEvent, RevealPhase,
    RevealRegistry, RevealTrigger, Viewport,
};

use crate::content::NAV_ITEMS;
use crate::form::{ContactForm, Notification, SubmitOutcome};
use crate::loading::LoadingSequence;
use crate::nav::NavBar;
use crate::sections::{self, Section};

/// Element id of the main content wrapper faded in once the gate fires.
pub const PAGE_CONTENT: &str = "page-content";

const SCROLL_TWEEN_MS: f32 = 800.0;
const CONTENT_FADE_MS: f32 = 500.0;
/// Fraction of a section that must be visible before the nav marks it active.
const ANCHOR_ENTER_FRACTION: f32 = 0.4;

/// In-flight smooth scroll between two document offsets.
#[derive(Debug, Clone, Copy)]
struct ScrollTween {
    from: f32,
    to: f32,
    elapsed_ms: f32,
    duration_ms: f32,
}

impl ScrollTween {
    fn value(&self) -> f32 {
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from.lerp(&self.to, Easing::CubicInOut.evaluate(t))
    }

    fn done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

pub struct Page {
    config: UnveilConfig,
    registry: RevealRegistry,
    layout: DocumentLayout,
    viewport: Viewport,
    loading: LoadingSequence,
    nav: NavBar,
    form: ContactForm,
    sections: Vec<Box<dyn Section>>,
    events: EventQueue,
    scroll_tween: Option<ScrollTween>,
    content_mounted: bool,
    torn_down: bool,
}

impl Page {
    pub fn new(config: UnveilConfig) -> Self {
        let time_scale = config.motion.time_scale();
        let mut form = ContactForm::new(config.contact.submit_delay_ms);
        if config.contact.fail_submissions {
            form.set_outcome(SubmitOutcome::Failure);
        }

        Self {
            viewport: Viewport::new(0.0, config.viewport.height),
            registry: RevealRegistry::new(),
            layout: DocumentLayout::new(),
            loading: LoadingSequence::new(time_scale),
            nav: NavBar::new(time_scale),
            form,
            sections: sections::all(),
            events: EventQueue::new(),
            scroll_tween: None,
            content_mounted: false,
            torn_down: false,
            config,
        }
    }

    /// Advance the page by `delta_ms`.
    pub fn update(&mut self, delta_ms: f32) {
        if self.torn_down {
            return;
        }

        if !self.content_mounted {
            if self.loading.update(delta_ms) {
                self.mount_content();
            }
            return;
        }

        if let Some(anchor) = self.nav.take_scroll_request() {
            self.start_scroll(anchor);
        }
        if let Some(tween) = &mut self.scroll_tween {
            tween.elapsed_ms += delta_ms;
            self.viewport.scroll_y = tween.value();
            if tween.done() {
                self.scroll_tween = None;
            }
        }

        self.nav.update(delta_ms);
        self.form.update(delta_ms);
        self.registry.update(&self.viewport, &self.layout, delta_ms);

        for event in self.registry.drain_events() {
            if let EngineEvent::Reveal(RevealEvent::EnterStarted { element, .. }) = &event {
                if let Some(item) = NAV_ITEMS.iter().find(|i| i.anchor == element.as_str()) {
                    self.nav.set_active(item.anchor);
                }
            }
            self.events.push(event);
        }
    }

    /// Build the document strip and register every reveal. Runs once,
    /// when the loading gate fires.
    fn mount_content(&mut self) {
        let time_scale = self.config.motion.time_scale();
        log::info!("loading gate fired, mounting page content");

        self.registry.register(
            PAGE_CONTENT,
            TimelineSpec::new("page-content-fade")
                .step(
                    TimelineStep::new([PAGE_CONTENT])
                        .duration_ms(CONTENT_FADE_MS)
                        .easing(Easing::CubicOut)
                        .track(VisualProperty::Opacity, 0.0, 1.0),
                )
                .scaled(time_scale),
            RevealTrigger::OnMount,
        );
        self.nav.mount(time_scale, &mut self.registry);

        let mut top = 0.0;
        for section in &self.sections {
            self.layout.place(section.anchor(), top, section.height());
            section.mount(top, time_scale, &mut self.layout, &mut self.registry);
            top += section.height();
        }

        // Trackless markers on the section roots drive the active nav
        // highlight through the ordinary crossing pipeline.
        for item in &NAV_ITEMS {
            self.registry.register(
                item.anchor,
                TimelineSpec::new(format!("{}-anchor", item.anchor)),
                RevealTrigger::OnVisible(RevealConfig::at_fraction(ANCHOR_ENTER_FRACTION)),
            );
        }

        self.content_mounted = true;
    }

    fn start_scroll(&mut self, anchor: &'static str) {
        let Some(offset) = self.layout.offset_of(&ElementId::from(anchor)) else {
            log::warn!("scroll request for unplaced anchor {anchor}");
            return;
        };
        let max = (self.layout.document_height() - self.viewport.height).max(0.0);
        let to = offset.clamp(0.0, max);

        let duration_ms = SCROLL_TWEEN_MS * self.config.motion.time_scale();
        if duration_ms <= 0.0 {
            self.viewport.scroll_y = to;
            self.scroll_tween = None;
            return;
        }
        self.scroll_tween = Some(ScrollTween {
            from: self.viewport.scroll_y,
            to,
            elapsed_ms: 0.0,
            duration_ms,
        });
    }

    /// Queue a smooth scroll to a nav anchor. Unknown anchors are refused.
    pub fn request_scroll(&mut self, anchor: &str) -> bool {
        self.nav.request_scroll(anchor)
    }

    /// Dispose every reveal and stop delivering events. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.registry.dispose_all();
        for event in self.registry.drain_events() {
            self.events.push(event);
        }
        log::info!("page torn down");
    }

    pub fn is_loaded(&self) -> bool {
        self.content_mounted
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll_tween.is_some()
    }

    pub fn loading_percent(&self) -> u8 {
        self.loading.percent()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &UnveilConfig {
        &self.config
    }

    pub fn active_anchor(&self) -> Option<&'static str> {
        self.nav.active()
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavBar {
        &mut self.nav
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn phase_of(&self, element: &ElementId) -> Option<RevealPhase> {
        self.registry.phase_of(element)
    }

    /// Current value of one visual property, loader first, then reveals.
    pub fn sample(&self, element: &ElementId, property: VisualProperty) -> Option<f32> {
        self.loading
            .sample(element, property)
            .or_else(|| self.registry.sample(element, property))
    }

    /// Resolved visual state of `element` across loader and reveals.
    pub fn snapshot(&self, element: &ElementId) -> VisualSnapshot {
        let mut snapshot = self.registry.snapshot(element);
        for property in VisualProperty::ALL {
            if let Some(value) = self.loading.sample(element, property) {
                snapshot.set(property, value);
            }
        }
        snapshot
    }

    /// Queued engine events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain()
    }

    /// Queued form notifications, oldest first.
    pub fn drain_notifications(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.form.drain_notifications()
    }
}
