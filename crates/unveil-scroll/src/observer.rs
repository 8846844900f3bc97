//! Threshold crossing detection against the viewport.
//!
//! The observer keeps one watch entry per subscription and compares each
//! element's visible fraction against its thresholds on every scan. A
//! crossing is reported exactly once per threshold transition: an entry
//! that is outside fires `Enter` when its fraction rises to the enter
//! threshold, then nothing until it falls below the exit threshold, which
//! fires `Exit`. Enter and exit therefore strictly alternate.
//!
//! Subscriptions are id handles. Disposing one is idempotent, removes the
//! watch entry synchronously, and drops any crossing that was detected but
//! not yet drained, so a disposed subscriber can never hear back.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use unveil_motion::ElementId;

use crate::viewport::{DocumentLayout, Viewport};

/// Handle for one watch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Generate the next unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Direction of a threshold transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingKind {
    Enter,
    Exit,
}

/// One reported threshold transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub subscription: SubscriptionId,
    pub element: ElementId,
    pub kind: CrossingKind,
    /// The visible fraction that triggered the report.
    pub fraction: f32,
}

/// Visible-fraction thresholds for one watch entry.
///
/// Both values live in [0, 1] and the exit threshold never exceeds the
/// enter threshold; the constructor adjusts out-of-range input and warns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossingThresholds {
    pub enter: f32,
    pub exit: f32,
}

impl CrossingThresholds {
    pub fn new(enter: f32, exit: f32) -> Self {
        let clamped_enter = enter.clamp(0.0, 1.0);
        let mut clamped_exit = exit.clamp(0.0, 1.0);
        if clamped_exit > clamped_enter {
            tracing::warn!(
                "exit threshold {clamped_exit} above enter threshold {clamped_enter}, lowering it"
            );
            clamped_exit = clamped_enter;
        }
        Self {
            enter: clamped_enter,
            exit: clamped_exit,
        }
    }

    /// One threshold for both directions.
    pub fn symmetric(fraction: f32) -> Self {
        Self::new(fraction, fraction)
    }
}

impl Default for CrossingThresholds {
    fn default() -> Self {
        Self::symmetric(0.2)
    }
}

#[derive(Debug, Clone)]
struct WatchEntry {
    subscription: SubscriptionId,
    element: ElementId,
    thresholds: CrossingThresholds,
    inside: bool,
}

/// Watches registered elements and reports threshold crossings.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    /// Registration order; scans visit entries in this order.
    entries: Vec<WatchEntry>,
    pending: VecDeque<Crossing>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `element`. Elements unknown to the layout are legal
    /// to observe; they never report.
    pub fn observe(
        &mut self,
        element: impl Into<ElementId>,
        thresholds: CrossingThresholds,
    ) -> SubscriptionId {
        let subscription = SubscriptionId::next();
        self.entries.push(WatchEntry {
            subscription,
            element: element.into(),
            thresholds,
            inside: false,
        });
        subscription
    }

    /// Stop watching. Idempotent. Also drops crossings already detected
    /// for this subscription but not yet drained.
    pub fn dispose(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.subscription != subscription);
        self.pending.retain(|c| c.subscription != subscription);
        self.entries.len() != before
    }

    pub fn is_observing(&self, subscription: SubscriptionId) -> bool {
        self.entries.iter().any(|e| e.subscription == subscription)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare every watched element against the viewport and queue the
    /// crossings that occurred since the last scan.
    pub fn scan(&mut self, viewport: &Viewport, layout: &DocumentLayout) {
        for entry in &mut self.entries {
            let Some(span) = layout.get(&entry.element) else {
                continue;
            };

            let fraction = viewport.visible_fraction(span);
            if !entry.inside && fraction >= entry.thresholds.enter {
                entry.inside = true;
                self.pending.push_back(Crossing {
                    subscription: entry.subscription,
                    element: entry.element.clone(),
                    kind: CrossingKind::Enter,
                    fraction,
                });
            } else if entry.inside && fraction < entry.thresholds.exit {
                entry.inside = false;
                self.pending.push_back(Crossing {
                    subscription: entry.subscription,
                    element: entry.element.clone(),
                    kind: CrossingKind::Exit,
                    fraction,
                });
            }
        }
    }

    /// Take the crossings detected so far, oldest first.
    pub fn drain_crossings(&mut self) -> impl Iterator<Item = Crossing> + '_ {
        self.pending.drain(..)
    }
}
