use crate::cursor::{
    start_session, ActivationDispatcher, ElementMetrics, OverlaySession, Point, PointerPhase,
    ScreenBounds, SessionConfig,
};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Recorded raw touches for one display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayTrace {
    pub screen: ScreenBounds,
    #[serde(default)]
    pub metrics: ElementMetrics,
    #[serde(default)]
    pub touches: Vec<TouchRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchRecord {
    /// Offset from the start of the trace.
    pub at_ms: u64,
    pub phase: PointerPhase,
    pub x: i32,
    pub y: i32,
}

impl ReplayTrace {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read replay trace {}", path.display()))?;
        let trace: ReplayTrace = serde_json::from_str(&content)
            .with_context(|| format!("deserialize replay trace {}", path.display()))?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn validate(&self) -> Result<()> {
        let mut last = 0;
        for (index, touch) in self.touches.iter().enumerate() {
            if touch.at_ms < last {
                bail!(
                    "touch {index} at {}ms is earlier than the previous touch at {last}ms",
                    touch.at_ms
                );
            }
            last = touch.at_ms;
        }
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::from_provider(&self.screen, self.metrics)
    }
}

/// Plays `trace` in real time against a fresh session, then waits `linger`
/// so a pending idle timeout can fire before the session stops.
pub fn run(
    trace: &ReplayTrace,
    overlay: Box<dyn OverlaySession>,
    dispatcher: Arc<dyn ActivationDispatcher>,
    linger: Duration,
) -> Result<()> {
    let handle = start_session(trace.session_config(), overlay, dispatcher)?;
    let started = Instant::now();

    for touch in &trace.touches {
        let Some(due) = started.checked_add(Duration::from_millis(touch.at_ms)) else {
            bail!("touch at {}ms is too far in the future", touch.at_ms);
        };
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        if !handle.touch(Point::new(touch.x, touch.y), touch.phase) {
            bail!("cursor session stopped during replay");
        }
    }

    tracing::info!(touches = trace.touches.len(), "replay finished");
    thread::sleep(linger);
    handle.stop();
    Ok(())
}
