//! Contact section: heading, form panel and social icons.

use unveil_motion::{Easing, TimelineSpec, TimelineStep, VisualProperty};
use unveil_scroll::{DocumentLayout, RevealConfig, RevealRegistry, RevealTrigger};

use super::Section;
use crate::content::SOCIAL_LINKS;

pub const CONTACT_HEADING: &str = "contact-heading";
pub const CONTACT_FORM: &str = "contact-form";
pub const CONTACT_SOCIALS: &str = "contact-socials";

const HEIGHT: f32 = 900.0;

/// Element id of the social icon at `index`, one per [`SOCIAL_LINKS`] entry.
pub fn social_element(index: usize) -> String {
    format!("contact-social-{index}")
}

pub struct ContactSection;

fn heading_spec() -> TimelineSpec {
    TimelineSpec::new("contact-heading-reveal").step(
        TimelineStep::new([CONTACT_HEADING])
            .duration_ms(1000.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 50.0, 0.0)
            .track(VisualProperty::Blur, 10.0, 0.0),
    )
}

fn form_spec() -> TimelineSpec {
    TimelineSpec::new("contact-form-reveal").step(
        TimelineStep::new([CONTACT_FORM])
            .duration_ms(1000.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateX, -50.0, 0.0),
    )
}

fn socials_spec() -> TimelineSpec {
    let icons = (0..SOCIAL_LINKS.len()).map(social_element);
    TimelineSpec::new("contact-socials-reveal").step(
        TimelineStep::new(icons)
            .duration_ms(600.0)
            .stagger_ms(100.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 30.0, 0.0)
            .track(VisualProperty::Scale, 0.8, 1.0),
    )
}

impl Section for ContactSection {
    fn anchor(&self) -> &'static str {
        "contact"
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
        layout.place(CONTACT_HEADING, top + 80.0, 160.0);
        layout.place(CONTACT_FORM, top + 280.0, 520.0);
        layout.place(CONTACT_SOCIALS, top + 320.0, 300.0);

        registry.register(
            CONTACT_HEADING,
            heading_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.2)),
        );
        registry.register(
            CONTACT_FORM,
            form_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.3)),
        );
        registry.register(
            CONTACT_SOCIALS,
            socials_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.2)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_motion::ElementId;

    #[test]
    fn test_socials_stagger() {
        let spec = socials_spec();
        // Three icons, 100ms apart, 600ms each.
        assert_eq!(spec.content_duration_ms(), 800.0);
        assert!(spec.declares(&ElementId::from(social_element(2))));
    }

    #[test]
    fn test_mount_places_and_registers() {
        let mut layout = DocumentLayout::new();
        let mut registry = RevealRegistry::new();
        ContactSection.mount(3000.0, 1.0, &mut layout, &mut registry);
        assert_eq!(layout.len(), 3);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.active_subscriptions(), 3);
    }
}
