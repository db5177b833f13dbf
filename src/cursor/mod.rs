pub mod geometry;
pub mod input;
pub mod machine;
pub mod messages;
pub mod overlay;
pub mod router;
pub mod service;
pub mod session;
pub mod state;
pub mod timeout;

pub use geometry::{ElementMetrics, Point, ScreenBounds, Side, Size, Zone};
pub use input::{PointerPhase, PointerSample, Surface};
pub use machine::GestureMachine;
pub use messages::{CursorCommand, SessionEvent};
pub use overlay::{
    ActivationDispatcher, ElementId, OverlaySession, ScreenProvider, TracingDispatcher,
    TracingOverlay,
};
pub use service::{start_session, SessionHandle};
pub use session::{CursorSession, SessionConfig};
pub use timeout::{IdleTimeout, IDLE_TIMEOUT};
