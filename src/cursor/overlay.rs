use crate::cursor::geometry::{Point, ScreenBounds};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Cursor,
    Tracker,
    LeftPad,
    RightPad,
}

impl ElementId {
    pub const ALL: [ElementId; 4] = [
        ElementId::Cursor,
        ElementId::Tracker,
        ElementId::LeftPad,
        ElementId::RightPad,
    ];
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementId::Cursor => "cursor",
            ElementId::Tracker => "tracker",
            ElementId::LeftPad => "left_pad",
            ElementId::RightPad => "right_pad",
        };
        f.write_str(name)
    }
}

/// Host surface that owns the on-screen elements.
///
/// Implementations are expected to back each element with a transparent,
/// always-on-top window. Every call arrives on the session context.
pub trait OverlaySession: Send {
    fn show_element(&mut self, id: ElementId);
    fn hide_element(&mut self, id: ElementId);
    fn place_element(&mut self, id: ElementId, x: i32, y: i32);
    fn is_element_visible(&self, id: ElementId) -> bool;
}

/// Injects a single tap at an absolute screen coordinate.
pub trait ActivationDispatcher: Send + Sync {
    fn activate_at(&self, x: i32, y: i32);
}

pub trait ScreenProvider {
    fn screen_bounds(&self) -> ScreenBounds;
}

impl ScreenProvider for ScreenBounds {
    fn screen_bounds(&self) -> ScreenBounds {
        *self
    }
}

/// Overlay that only records element state and traces every change.
#[derive(Debug, Default)]
pub struct TracingOverlay {
    elements: HashMap<ElementId, ElementState>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementState {
    pub visible: bool,
    pub position: Point,
}

impl TracingOverlay {
    pub fn element(&self, id: ElementId) -> ElementState {
        self.elements.get(&id).copied().unwrap_or_default()
    }
}

impl OverlaySession for TracingOverlay {
    fn show_element(&mut self, id: ElementId) {
        self.elements.entry(id).or_default().visible = true;
        tracing::debug!(element = %id, "overlay show");
    }

    fn hide_element(&mut self, id: ElementId) {
        self.elements.entry(id).or_default().visible = false;
        tracing::debug!(element = %id, "overlay hide");
    }

    fn place_element(&mut self, id: ElementId, x: i32, y: i32) {
        let element = self.elements.entry(id).or_default();
        if element.position == Point::new(x, y) {
            return;
        }
        element.position = Point::new(x, y);
        tracing::trace!(element = %id, x, y, "overlay place");
    }

    fn is_element_visible(&self, id: ElementId) -> bool {
        self.element(id).visible
    }
}

#[derive(Debug, Default)]
pub struct TracingDispatcher;

impl ActivationDispatcher for TracingDispatcher {
    fn activate_at(&self, x: i32, y: i32) {
        tracing::info!(x, y, "tap dispatched");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_overlay_tracks_visibility_and_position() {
        let mut overlay = TracingOverlay::default();
        assert!(!overlay.is_element_visible(ElementId::Tracker));

        overlay.place_element(ElementId::Tracker, 10, 20);
        overlay.show_element(ElementId::Tracker);
        assert!(overlay.is_element_visible(ElementId::Tracker));
        assert_eq!(
            overlay.element(ElementId::Tracker).position,
            Point::new(10, 20)
        );

        overlay.hide_element(ElementId::Tracker);
        assert!(!overlay.is_element_visible(ElementId::Tracker));
        assert!(!overlay.is_element_visible(ElementId::Cursor));
    }
}
