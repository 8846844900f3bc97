//! Scroll-triggered reveal lifecycle for `unveil`.
//!
//! This crate decides WHEN timelines play. `unveil-motion` knows how to
//! interpolate values over time; everything here watches a scrolling
//! viewport and walks per-element state machines in response:
//!
//! ```text
//!   Viewport + DocumentLayout
//!            │ visible fractions
//!            ▼
//!   ViewportObserver ──crossings──► RevealController (one per element)
//!            ▲                              │ play / reverse
//!            │                              ▼
//!       RevealRegistry ◄────────────── Timeline events
//!            │
//!            ▼
//!       EventQueue (drained by the embedder once per frame)
//! ```
//!
//! The registry is the only type most embedders touch: register elements
//! with a timeline spec and a trigger, call `update` once per frame with
//! the current viewport, then drain events and sample values.
//!
//! Nothing in this crate talks to a real browser or compositor. Layout is
//! a plain map of element spans, which keeps the whole lifecycle
//! deterministic and testable with synthetic scroll positions.

pub mod controller;
pub mod events;
pub mod observer;
pub mod registry;
pub mod viewport;

pub use controller::{RevealConfig, RevealController, RevealPhase, RevealTrigger};
pub use events::{EngineEvent, EventQueue, RevealEvent, TimelineEvent};
pub use observer::{Crossing, CrossingKind, CrossingThresholds, SubscriptionId, ViewportObserver};
pub use registry::RevealRegistry;
pub use viewport::{DocumentLayout, ElementSpan, Viewport};
