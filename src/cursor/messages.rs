use crate::cursor::geometry::Point;
use crate::cursor::input::{PointerPhase, PointerSample, Surface};
use crate::cursor::overlay::ElementId;

/// Effects produced by the gesture machine, applied by the session in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    Show(ElementId),
    Hide(ElementId),
    Place(ElementId, Point),
    ActivateAt(Point),
    ArmIdleTimer,
    CancelIdleTimer,
}

/// Messages delivered to the serialized session context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Pointer { surface: Surface, sample: PointerSample },
    Touch { raw: Point, phase: PointerPhase },
    IdleTimeout { generation: u64 },
    Stop,
}
