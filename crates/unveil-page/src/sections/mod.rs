//! Page sections stacked into the document strip.
//!
//! Each section owns one vertical slice of the page: where its elements
//! sit and which reveals play over them. Sections are mounted once, after
//! the loading gate, top to bottom; `top` is the document offset the
//! section starts at.

use unveil_scroll::{DocumentLayout, RevealRegistry};

pub trait Section {
    /// Anchor id, also the element id of the section root.
    fn anchor(&self) -> &'static str;

    /// Section height in document units.
    fn height(&self) -> f32;

    /// Place the section's spans into `layout` and register its reveals.
    ///
    /// `time_scale` is the motion multiplier from config; zero collapses
    /// every timeline and skips ambient loops.
    fn mount(
        &self,
        top: f32,
        time_scale: f32,
        layout: &mut DocumentLayout,
        registry: &mut RevealRegistry,
    );
}

/// Every section of the portfolio, top to bottom.
pub fn all() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(hero::HeroSection),
        Box::new(about::AboutSection),
        Box::new(projects::ProjectsSection),
        Box::new(contact::ContactSection),
        Box::new(footer::FooterSection),
    ]
}

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
