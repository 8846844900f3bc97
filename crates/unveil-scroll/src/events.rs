//! Reveal lifecycle events.
//!
//! The registry reports every state transition through a queue of typed
//! events. Callers poll the queue after each update instead of handing
//! completion callbacks into the engine, which keeps cancellation simple:
//! a disposed controller just stops producing events.
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = RevealRegistry::new();
//! // register elements...
//! registry.update(&viewport, &layout, 16.7);
//!
//! for event in registry.drain_events() {
//!     match event {
//!         EngineEvent::Reveal(RevealEvent::Entered { element, .. }) => {
//!             println!("{element} finished revealing");
//!         }
//!         _ => {}
//!     }
//! }
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use unveil_motion::{ElementId, PlayDirection, TimelineId};

/// Event emitted when a controller changes phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealEvent {
    /// An enter crossing started the forward play.
    EnterStarted {
        element: ElementId,
        timeline: TimelineId,
    },
    /// The forward play completed; the element is fully revealed.
    Entered {
        element: ElementId,
        timeline: TimelineId,
    },
    /// An exit crossing started the reverse play.
    ExitStarted {
        element: ElementId,
        timeline: TimelineId,
    },
    /// The reverse play completed; the element is back at its start values.
    ReturnedToIdle {
        element: ElementId,
        timeline: TimelineId,
    },
    /// The controller was disposed and will never report again.
    Disposed { element: ElementId },
}

impl RevealEvent {
    pub fn element(&self) -> &ElementId {
        match self {
            Self::EnterStarted { element, .. }
            | Self::Entered { element, .. }
            | Self::ExitStarted { element, .. }
            | Self::ReturnedToIdle { element, .. }
            | Self::Disposed { element } => element,
        }
    }
}

/// Event emitted when a controller's timeline stops consuming time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// The timeline ran to the end of its current direction.
    Finished {
        timeline: TimelineId,
        element: ElementId,
        name: String,
        direction: PlayDirection,
    },
    /// The timeline was cancelled mid-run, with no completion reported.
    Cancelled {
        timeline: TimelineId,
        element: ElementId,
        name: String,
    },
}

impl TimelineEvent {
    pub fn element(&self) -> &ElementId {
        match self {
            Self::Finished { element, .. } | Self::Cancelled { element, .. } => element,
        }
    }

    pub fn timeline(&self) -> TimelineId {
        match self {
            Self::Finished { timeline, .. } | Self::Cancelled { timeline, .. } => *timeline,
        }
    }
}

/// Wrapper enum for everything the registry can report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineEvent {
    Reveal(RevealEvent),
    Timeline(TimelineEvent),
}

impl EngineEvent {
    pub fn element(&self) -> &ElementId {
        match self {
            Self::Reveal(e) => e.element(),
            Self::Timeline(e) => e.element(),
        }
    }

    /// Check if this is a completed forward play.
    pub fn is_entered(&self) -> bool {
        matches!(self, Self::Reveal(RevealEvent::Entered { .. }))
    }

    /// Check if this is a completed reverse play.
    pub fn is_returned_to_idle(&self) -> bool {
        matches!(self, Self::Reveal(RevealEvent::ReturnedToIdle { .. }))
    }

    /// Check if this is a disposal.
    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Reveal(RevealEvent::Disposed { .. }))
    }
}

impl From<RevealEvent> for EngineEvent {
    fn from(event: RevealEvent) -> Self {
        Self::Reveal(event)
    }
}

impl From<TimelineEvent> for EngineEvent {
    fn from(event: TimelineEvent) -> Self {
        Self::Timeline(event)
    }
}

/// Queue for collecting events during update cycles.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<EngineEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a reveal event onto the queue.
    pub fn push_reveal(&mut self, event: RevealEvent) {
        self.events.push_back(EngineEvent::Reveal(event));
    }

    /// Push a timeline event onto the queue.
    pub fn push_timeline(&mut self, event: TimelineEvent) {
        self.events.push_back(EngineEvent::Timeline(event));
    }

    /// Push any event kind onto the queue.
    pub fn push(&mut self, event: EngineEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    /// Drain all events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain(..)
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&EngineEvent> {
        self.events.front()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Get pending events for a specific element.
    pub fn events_for_element(&self, element: &ElementId) -> Vec<&EngineEvent> {
        self.events.iter().filter(|e| e.element() == element).collect()
    }
}
