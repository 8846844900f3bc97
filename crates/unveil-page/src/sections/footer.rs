//! Footer: closing content block and drifting background particles.

use unveil_motion::{
    Easing, LoopGroup, LoopMember, TimelineSpec, TimelineStep, VisualProperty,
};
use unveil_scroll::{DocumentLayout, RevealConfig, RevealRegistry, RevealTrigger};

use super::Section;

pub const FOOTER_CONTENT: &str = "footer-content";

const HEIGHT: f32 = 400.0;

pub struct FooterSection;

fn content_spec() -> TimelineSpec {
    TimelineSpec::new("footer-content-reveal").step(
        TimelineStep::new([FOOTER_CONTENT])
            .duration_ms(1000.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 60.0, 0.0)
            .track(VisualProperty::Blur, 10.0, 0.0),
    )
}

fn particle_loops(time_scale: f32) -> LoopGroup {
    LoopGroup::new("footer-particles")
        .member(
            LoopMember::new("footer-particle-1", VisualProperty::TranslateY, 0.0, -15.0)
                .duration_ms(4000.0 * time_scale),
        )
        .member(
            LoopMember::new("footer-particle-1", VisualProperty::TranslateX, 0.0, 10.0)
                .duration_ms(4000.0 * time_scale),
        )
        .member(
            LoopMember::new("footer-particle-2", VisualProperty::TranslateY, 0.0, 20.0)
                .duration_ms(6000.0 * time_scale)
                .delay_ms(1000.0 * time_scale),
        )
        .member(
            LoopMember::new("footer-particle-2", VisualProperty::TranslateX, 0.0, -15.0)
                .duration_ms(6000.0 * time_scale)
                .delay_ms(1000.0 * time_scale),
        )
        .member(
            LoopMember::new("footer-particle-3", VisualProperty::TranslateY, 0.0, -10.0)
                .duration_ms(5000.0 * time_scale)
                .delay_ms(2000.0 * time_scale),
        )
        .member(
            LoopMember::new("footer-particle-3", VisualProperty::TranslateX, 0.0, 5.0)
                .duration_ms(5000.0 * time_scale)
                .delay_ms(2000.0 * time_scale),
        )
}

impl Section for FooterSection {
    fn anchor(&self) -> &'static str {
        "footer"
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
        layout.place(FOOTER_CONTENT, top + 80.0, 280.0);

        registry.register(
            FOOTER_CONTENT,
            content_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.1)),
        );
        if time_scale > 0.0 {
            registry.add_loop_group(particle_loops(time_scale));
        }
    }
}
