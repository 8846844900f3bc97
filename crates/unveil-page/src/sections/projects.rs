//! Projects section: heading plus the staggered card grid.

use unveil_motion::{Easing, TimelineSpec, TimelineStep, VisualProperty};
use unveil_scroll::{DocumentLayout, RevealConfig, RevealRegistry, RevealTrigger};

use super::Section;
use crate::content::PROJECTS;

pub const PROJECTS_HEADING: &str = "projects-heading";
pub const PROJECTS_GRID: &str = "projects-grid";

const HEIGHT: f32 = 1200.0;

/// Element id of the project card at `index`, one per [`PROJECTS`] entry.
pub fn card_element(index: usize) -> String {
    format!("project-card-{index}")
}

pub struct ProjectsSection;

fn heading_spec() -> TimelineSpec {
    TimelineSpec::new("projects-heading-reveal").step(
        TimelineStep::new([PROJECTS_HEADING])
            .duration_ms(1000.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 50.0, 0.0)
            .track(VisualProperty::Blur, 10.0, 0.0),
    )
}

fn grid_spec() -> TimelineSpec {
    let cards = (0..PROJECTS.len()).map(card_element);
    TimelineSpec::new("projects-grid-reveal").step(
        TimelineStep::new(cards)
            .duration_ms(800.0)
            .stagger_ms(200.0)
            .easing(Easing::CubicOut)
            .track(VisualProperty::Opacity, 0.0, 1.0)
            .track(VisualProperty::TranslateY, 100.0, 0.0)
            .track(VisualProperty::Scale, 0.8, 1.0),
    )
}

impl Section for ProjectsSection {
    fn anchor(&self) -> &'static str {
        "projects"
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
        layout.place(PROJECTS_HEADING, top + 80.0, 160.0);
        layout.place(PROJECTS_GRID, top + 280.0, 800.0);

        registry.register(
            PROJECTS_HEADING,
            heading_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.2)),
        );
        registry.register(
            PROJECTS_GRID,
            grid_spec().scaled(time_scale),
            RevealTrigger::OnVisible(RevealConfig::at_fraction(0.15)),
        );
    }
}
