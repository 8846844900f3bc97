//! About section: portrait, bio copy and the skills grid.

use unveil_motion::{Easing, TimelineSpec, TimelineStep, VisualProperty};
use unveil_scroll::{DocumentLayout, RevealConfig, RevealRegistry, RevealTrigger};

use super::Section;
use crate::content::SKILLS;

pub const ABOUT_IMAGE: &str = "about-image";
pub const ABOUT_CONTENT: &str = "about-content";
pub const ABOUT_SKILLS: &str = "about-skills";

const HEIGHT: f32 = 900.0;

/// Element id of the skill card at `index`, one per [`SKILLS`] entry.
pub fn skill_element(index: usize) -> String {
    format!("about-skill-{index}")
}

pub struct AboutSection;

fn image_spec() -> TimelineSpec {
    TimelineSpec::new("about-image-reveal").step(
        TimelineStep::new([ABOUT_IMAGE])
            .duration_ms(1200.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateX, -100.0, 0.0)
            .track(VisualProperty::Scale, 0.8, 1.0)
            .track(VisualProperty::Blur, 10.0, 0.0),
    )
}

fn content_spec() -> TimelineSpec {
    TimelineSpec::new("about-content-reveal").step(
        TimelineStep::new([ABOUT_CONTENT])
            .duration_ms(1000.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 50.0, 0.0)
            .track(VisualProperty::Blur, 10.0, 0.0),
    )
}

fn skills_spec() -> TimelineSpec {
    let cards = (0..SKILLS.len()).map(skill_element);
    TimelineSpec::new("about-skills-reveal").step(
        TimelineStep::new(cards)
            .duration_ms(600.0)
            .stagger_ms(100.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 30.0, 0.0)
            .track(VisualProperty::Scale, 0.8, 1.0),
    )
}

impl Section for AboutSection {
    fn anchor(&self) -> &'static str {
        "about"
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
        layout.place(ABOUT_IMAGE, top + 100.0, 600.0);
        layout.place(ABOUT_CONTENT, top + 150.0, 500.0);
        layout.place(ABOUT_SKILLS, top + 600.0, 240.0);

        registry.register(
            ABOUT_IMAGE,
            image_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.2)),
        );
        registry.register(
            ABOUT_CONTENT,
            content_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.3)),
        );
        registry.register(
            ABOUT_SKILLS,
            skills_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.2)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_motion::ElementId;

    #[test]
    fn test_skills_step_covers_every_card() {
        let spec = skills_spec();
        for index in 0..SKILLS.len() {
            assert!(spec.declares(&ElementId::from(skill_element(index))));
        }
        // Six cards, 100ms apart, 600ms each: last starts at 500ms.
        assert_eq!(spec.content_duration_ms(), 1100.0);
    }

    #[test]
    fn test_mount_places_and_registers() {
        let mut layout = DocumentLayout::new();
        let mut registry = RevealRegistry::new();
        AboutSection.mount(900.0, 1.0, &mut layout, &mut registry);
        assert_eq!(layout.len(), 3);
        assert_eq!(
            layout.offset_of(&ElementId::from(ABOUT_SKILLS)),
            Some(1500.0)
        );
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.active_subscriptions(), 3);
    }
}
