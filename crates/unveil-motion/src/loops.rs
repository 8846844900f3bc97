//! Infinite alternating loops for decorative elements.
//!
//! Glow orbs and drifting particles run forever: one property swings from
//! its start value to its end value and back, easing each leg. Loops are
//! deliberately outside the reveal lifecycle; they start when their group
//! is added and only stop when the group is stopped or torn down.

use crate::easing::Easing;
use crate::types::{ElementId, PropertySpan, VisualProperty, VisualSnapshot};

/// One looping property of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopMember {
    pub element: ElementId,
    pub property: VisualProperty,
    pub span: PropertySpan,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: Easing,
}

impl LoopMember {
    pub fn new(
        element: impl Into<ElementId>,
        property: VisualProperty,
        from: f32,
        to: f32,
    ) -> Self {
        Self {
            element: element.into(),
            property,
            span: PropertySpan::new(from, to),
            duration_ms: 1000.0,
            delay_ms: 0.0,
            easing: Easing::QuadInOut,
        }
    }

    /// Length of one leg of the swing.
    ///
    /// # Panics
    /// Panics if `ms` is not positive.
    pub fn duration_ms(mut self, ms: f32) -> Self {
        assert!(ms > 0.0, "Loop duration must be positive");
        self.duration_ms = ms;
        self
    }

    /// Dead time before the first leg starts.
    ///
    /// # Panics
    /// Panics if `ms` is negative.
    pub fn delay_ms(mut self, ms: f32) -> Self {
        assert!(ms >= 0.0, "Loop delay must not be negative");
        self.delay_ms = ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn value_at(&self, elapsed_ms: f32) -> f32 {
        let t = elapsed_ms - self.delay_ms;
        if t <= 0.0 || self.duration_ms <= 0.0 {
            return self.span.from;
        }

        let phase = t / self.duration_ms;
        let cycle = phase.floor();
        let frac = phase - cycle;
        // Odd cycles run the return leg.
        let local = if (cycle as i64) % 2 == 1 {
            1.0 - frac
        } else {
            frac
        };

        self.span.at(self.easing.evaluate(local))
    }
}

/// A named set of loop members ticked together.
#[derive(Debug, Clone)]
pub struct LoopGroup {
    name: String,
    members: Vec<LoopMember>,
    elapsed_ms: f32,
    running: bool,
}

impl LoopGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            elapsed_ms: 0.0,
            running: true,
        }
    }

    pub fn member(mut self, member: LoopMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the group clock. Returns true while running.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.running {
            self.elapsed_ms += delta_ms;
        }
        self.running
    }

    /// Freeze every member at its current value.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Current value of `property` for `element`, if a member drives it.
    pub fn sample(&self, element: &ElementId, property: VisualProperty) -> Option<f32> {
        let mut value = None;
        for member in &self.members {
            if member.element == *element && member.property == property {
                value = Some(member.value_at(self.elapsed_ms));
            }
        }
        value
    }

    /// Apply every member value for `element` onto `snapshot`.
    pub fn snapshot_into(&self, element: &ElementId, snapshot: &mut VisualSnapshot) {
        for member in &self.members {
            if member.element == *element {
                snapshot.set(member.property, member.value_at(self.elapsed_ms));
            }
        }
    }
}
