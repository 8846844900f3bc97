//! One-dimensional document geometry.
//!
//! The page is modelled as a vertical strip of elements. A [`Viewport`] is
//! a window onto that strip at some scroll offset, an [`ElementSpan`] is
//! where one element sits, and [`DocumentLayout`] maps element handles to
//! spans. Visibility is the fraction of an element's height inside the
//! window, which is what crossing thresholds are compared against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use unveil_motion::ElementId;

/// The visible window over the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Document offset of the top edge.
    pub scroll_y: f32,
    /// Window height in document units.
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_y: f32, height: f32) -> Self {
        Self { scroll_y, height }
    }

    pub fn top(&self) -> f32 {
        self.scroll_y
    }

    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }

    /// Fraction of `span`'s height currently inside the window, in [0, 1].
    ///
    /// Zero-height spans act as markers: fully visible when their top edge
    /// is inside the window, invisible otherwise.
    pub fn visible_fraction(&self, span: &ElementSpan) -> f32 {
        if span.height <= 0.0 {
            let inside = span.top >= self.top() && span.top <= self.bottom();
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = (span.bottom().min(self.bottom()) - span.top.max(self.top())).max(0.0);
        (overlap / span.height).clamp(0.0, 1.0)
    }
}

/// Vertical extent of one element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSpan {
    pub top: f32,
    pub height: f32,
}

impl ElementSpan {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Where every known element sits in the document.
///
/// Elements missing from the layout are detached: observing them is legal
/// and simply never produces a crossing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentLayout {
    spans: HashMap<ElementId, ElementSpan>,
}

impl DocumentLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or move) an element's span.
    pub fn place(&mut self, element: impl Into<ElementId>, top: f32, height: f32) {
        self.spans.insert(element.into(), ElementSpan::new(top, height));
    }

    pub fn get(&self, element: &ElementId) -> Option<&ElementSpan> {
        self.spans.get(element)
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.spans.contains_key(element)
    }

    pub fn remove(&mut self, element: &ElementId) -> Option<ElementSpan> {
        self.spans.remove(element)
    }

    /// Document offset of an element's top edge.
    pub fn offset_of(&self, element: &ElementId) -> Option<f32> {
        self.spans.get(element).map(|s| s.top)
    }

    /// Bottom of the lowest element, i.e. the scrollable height.
    pub fn document_height(&self) -> f32 {
        self.spans.values().map(ElementSpan::bottom).fold(0.0, f32::max)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        let viewport = Viewport::new(0.0, 900.0);
        let span = ElementSpan::new(100.0, 400.0);
        assert_eq!(viewport.visible_fraction(&span), 1.0);
    }

    #[test]
    fn test_partially_visible_below() {
        let viewport = Viewport::new(0.0, 900.0);
        // Bottom half of the element hangs below the fold.
        let span = ElementSpan::new(700.0, 400.0);
        assert!((viewport.visible_fraction(&span) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_partially_visible_above() {
        let viewport = Viewport::new(500.0, 900.0);
        let span = ElementSpan::new(300.0, 400.0);
        assert!((viewport.visible_fraction(&span) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_offscreen() {
        let viewport = Viewport::new(0.0, 900.0);
        assert_eq!(
            viewport.visible_fraction(&ElementSpan::new(2000.0, 300.0)),
            0.0
        );
        assert_eq!(
            Viewport::new(3000.0, 900.0).visible_fraction(&ElementSpan::new(0.0, 300.0)),
            0.0
        );
    }

    #[test]
    fn test_zero_height_span_is_a_marker() {
        let viewport = Viewport::new(0.0, 900.0);
        assert_eq!(
            viewport.visible_fraction(&ElementSpan::new(400.0, 0.0)),
            1.0
        );
        assert_eq!(
            viewport.visible_fraction(&ElementSpan::new(1200.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn test_layout_queries() {
        let mut layout = DocumentLayout::new();
        layout.place("hero", 0.0, 900.0);
        layout.place("about", 900.0, 1000.0);

        assert!(layout.contains(&ElementId::from("hero")));
        assert_eq!(layout.offset_of(&ElementId::from("about")), Some(900.0));
        assert_eq!(layout.document_height(), 1900.0);
        assert!(layout.offset_of(&ElementId::from("missing")).is_none());
        assert_eq!(layout.len(), 2);
    }
}
