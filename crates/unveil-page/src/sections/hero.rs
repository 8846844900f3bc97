//! Hero section: headline intro plus ambient glow orbs.

use unveil_motion::{
    Easing, LoopGroup, LoopMember, StepOffset, TimelineSpec, TimelineStep, VisualProperty,
};
use unveil_scroll::{DocumentLayout, RevealRegistry, RevealTrigger};

use super::Section;

pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const HERO_CTA: &str = "hero-cta";
pub const HERO_VISUAL: &str = "hero-visual";

const HEIGHT: f32 = 900.0;

/// Full-viewport landing slice. Everything here plays on mount; only the
/// section root (placed by the page) watches the viewport.
pub struct HeroSection;

/// Title, subtitle and call-to-action rise out of a blur one after the
/// other, overlapping; the visual slides in from the right alongside.
fn intro_spec() -> TimelineSpec {
    TimelineSpec::new("hero-intro")
        .delay_ms(1000.0)
        .step(
            TimelineStep::new([HERO_TITLE])
                .duration_ms(1200.0)
                .easing(Easing::CubicOut)
                .track(VisualProperty::Opacity, 0.0, 1.0)
                .track(VisualProperty::TranslateY, 50.0, 0.0)
                .track(VisualProperty::Blur, 10.0, 0.0),
        )
        .step(
            TimelineStep::new([HERO_SUBTITLE])
                .duration_ms(1000.0)
                .easing(Easing::CubicOut)
                .offset(StepOffset::Relative { ms: -800.0 })
                .track(VisualProperty::Opacity, 0.0, 1.0)
                .track(VisualProperty::TranslateY, 50.0, 0.0)
                .track(VisualProperty::Blur, 10.0, 0.0),
        )
        .step(
            TimelineStep::new([HERO_CTA])
                .duration_ms(1000.0)
                .easing(Easing::CubicOut)
                .offset(StepOffset::Relative { ms: -600.0 })
                .track(VisualProperty::Opacity, 0.0, 1.0)
                .track(VisualProperty::TranslateY, 50.0, 0.0)
                .track(VisualProperty::Blur, 10.0, 0.0),
        )
        .step(
            TimelineStep::new([HERO_VISUAL])
                .duration_ms(1500.0)
                .easing(Easing::CubicOut)
                .offset(StepOffset::Relative { ms: -1000.0 })
                .track(VisualProperty::Opacity, 0.0, 1.0)
                .track(VisualProperty::TranslateX, 100.0, 0.0)
                .track(VisualProperty::Scale, 0.9, 1.0),
        )
}

/// Three glow orbs drift on offset swings so they never sync up.
fn orb_loops(time_scale: f32) -> LoopGroup {
    LoopGroup::new("hero-orbs")
        .member(
            LoopMember::new("hero-orb-1", VisualProperty::TranslateY, 0.0, -30.0)
                .duration_ms(4000.0 * time_scale),
        )
        .member(
            LoopMember::new("hero-orb-2", VisualProperty::TranslateY, 0.0, 25.0)
                .duration_ms(6000.0 * time_scale)
                .delay_ms(1000.0 * time_scale),
        )
        .member(
            LoopMember::new("hero-orb-2", VisualProperty::TranslateX, 0.0, 15.0)
                .duration_ms(6000.0 * time_scale)
                .delay_ms(1000.0 * time_scale),
        )
        .member(
            LoopMember::new("hero-orb-3", VisualProperty::TranslateX, 0.0, -20.0)
                .duration_ms(5000.0 * time_scale)
                .delay_ms(2000.0 * time_scale),
        )
        .member(
            LoopMember::new("hero-orb-3", VisualProperty::TranslateY, 0.0, -15.0)
                .duration_ms(5000.0 * time_scale)
                .delay_ms(2000.0 * time_scale),
        )
}

impl Section for HeroSection {
    fn anchor(&self) -> &'static str {
        "hero"
    }

    fn height(&self) -> f32 {
        HEIGHT
    }

    fn mount(
        &self,
        top: f32,
        time_scale: f32,
        layout: &mut DocumentLayout,
        registry: &mut RevealRegistry,
    ) {
        // Hero elements ride the intro timeline; nothing extra to place.
        let _ = (top, layout);
        registry.register(
            "hero-intro",
            intro_spec().scaled(time_scale),
            RevealTrigger::OnMount,
        );
        if time_scale > 0.0 {
            registry.add_loop_group(orb_loops(time_scale));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_motion::ElementId;

    #[test]
    fn test_intro_declares_every_hero_element() {
        let spec = intro_spec();
        for element in [HERO_TITLE, HERO_SUBTITLE, HERO_CTA, HERO_VISUAL] {
            assert!(spec.declares(&ElementId::from(element)), "{element}");
        }
    }

    #[test]
    fn test_intro_timing() {
        let spec = intro_spec();
        // title ends at 1200; subtitle 400..1400; cta 800..1800;
        // visual 800..2300. Plus the 1000ms lead-in.
        assert_eq!(spec.content_duration_ms(), 2300.0);
        assert_eq!(spec.total_duration_ms(), 3300.0);
    }

    #[test]
    fn test_mount_adds_intro_and_orbs() {
        let mut layout = DocumentLayout::new();
        let mut registry = RevealRegistry::new();
        HeroSection.mount(0.0, 1.0, &mut layout, &mut registry);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.loop_groups().len(), 1);
    }

    #[test]
    fn test_reduced_motion_skips_orbs() {
        let mut layout = DocumentLayout::new();
        let mut registry = RevealRegistry::new();
        HeroSection.mount(0.0, 0.0, &mut layout, &mut registry);
        assert!(registry.loop_groups().is_empty());
        let timeline = registry.timeline_of(&ElementId::from("hero-intro"));
        assert_eq!(timeline.map(|t| t.total_duration_ms()), Some(0.0));
    }
}
