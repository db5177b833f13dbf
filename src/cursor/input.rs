use crate::cursor::geometry::{Point, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerPhase {
    pub fn ends_sequence(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// One physical pointer event as seen by a single surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub raw: Point,
    pub local: Point,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub fn new(raw: Point, local: Point, phase: PointerPhase) -> Self {
        Self { raw, local, phase }
    }

    /// Sample for surfaces that only care about screen coordinates.
    pub fn raw(raw: Point, phase: PointerPhase) -> Self {
        Self::new(raw, raw, phase)
    }
}

/// Logical touch surfaces that feed the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Pad(Side),
    Tracker,
}

impl Surface {
    pub const LEFT_PAD: Surface = Surface::Pad(Side::Left);
    pub const RIGHT_PAD: Surface = Surface::Pad(Side::Right);
}
