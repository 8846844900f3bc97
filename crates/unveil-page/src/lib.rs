//! Portfolio page assembled on top of the motion and reveal engines.
//!
//! Where `unveil-motion` knows how values move and `unveil-scroll` knows
//! when elements should reveal, this crate knows the actual page: the
//! loading screen, the navigation bar, five content sections with their
//! entrance choreography, the simulated contact form, and the smooth
//! scroll between anchors. [`Page`] wires all of it behind a single
//! `update(delta_ms)` loop and an event drain.

pub mod content;
pub mod form;
pub mod loading;
pub mod nav;
pub mod page;
pub mod sections;

pub use form::{
    ContactForm, FormError, Notification, NotificationKind, SubmitOutcome, SubmitState,
};
pub use loading::LoadingSequence;
pub use nav::NavBar;
pub use page::{Page, PAGE_CONTENT};
pub use sections::Section;
