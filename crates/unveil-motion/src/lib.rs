//! Motion engine for scroll-revealed interfaces.
//!
//! This crate provides:
//! - **Timelines**: Ordered property steps with overlap and stagger
//! - **Easing**: Polynomial, bezier, and stepped timing curves
//! - **Loops**: Infinite alternating swings for decorative elements
//! - **Sampling**: Per-element snapshots of current animated values
//!
//! # Architecture
//!
//! ```text
//! TimelineSpec (declarative steps)
//!   └── Timeline (position + direction + state)
//!         └── sample()/snapshot_into() during rendering
//!
//! LoopGroup (decorative members, never finish)
//! ```
//!
//! Playback is frame driven: callers feed `update(delta_ms)` and read
//! values back; nothing here schedules or spawns.

pub mod easing;
pub mod interpolate;
pub mod loops;
pub mod timeline;
pub mod types;

pub use easing::{Easing, StepPosition};
pub use interpolate::Interpolate;
pub use loops::{LoopGroup, LoopMember};
pub use timeline::{StepOffset, Timeline, TimelineSpec, TimelineStep};
pub use types::{
    ElementId, PlayDirection, PlaybackState, PropertySpan, TimelineId, VisualProperty,
    VisualSnapshot,
};
