//! Unveil: scroll-triggered animation lifecycle for a single-page site.
//!
//! The workspace splits into four layers, re-exported here under short
//! names: `motion` (timelines, easing, loops), `scroll` (viewport
//! observation and reveal lifecycle), `page` (the assembled portfolio)
//! and `config` (the `unveil.toml` loader).

pub use unveil_config as config;
pub use unveil_motion as motion;
pub use unveil_page as page;
pub use unveil_scroll as scroll;
