use crate::cursor::geometry::{Point, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    PadDragging(Side),
    TrackerArmed,
    TrackerDragging,
}

pub fn can_transition(from: GesturePhase, to: GesturePhase) -> bool {
    matches!(
        (from, to),
        (GesturePhase::Idle, GesturePhase::PadDragging(_))
            | (GesturePhase::Idle, GesturePhase::TrackerArmed)
            | (GesturePhase::PadDragging(_), GesturePhase::PadDragging(_))
            | (GesturePhase::TrackerArmed, GesturePhase::TrackerDragging)
            | (_, GesturePhase::Idle)
    ) || from == to
}

/// Live state of the current touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub phase: GesturePhase,
    /// Pad whose drag last positioned the tracker.
    pub active_side: Option<Side>,
    /// Pad that received the Down of the sequence in progress.
    pub pad_sequence: Option<Side>,
    pub tracker_sequence: bool,
    pub has_visible_overlay: bool,
    /// Set by the first pad Move that showed the overlay; cleared on pad release.
    pub first_move_done: bool,
    pub press_origin: Point,
    pub press_local_origin: Point,
    pub passed_click_threshold: bool,
}

impl InteractionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
