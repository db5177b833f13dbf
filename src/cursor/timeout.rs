use crate::cursor::messages::SessionEvent;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

pub const IDLE_TIMEOUT: Duration = Duration::from_millis(5000);

struct PendingTimeout {
    generation: u64,
    // Dropping the sender wakes the countdown thread and cancels it.
    _cancel_tx: Sender<()>,
}

/// Single-shot countdown that posts [`SessionEvent::IdleTimeout`] back to the
/// session context when it runs out uninterrupted.
///
/// Arming while a countdown is pending is a no-op, so repeated arming never
/// pushes the deadline past the first one. A fire only counts once the session
/// context calls [`IdleTimeout::acknowledge`] with the matching generation; a
/// fire that raced a cancel is stale and acknowledged as `false`.
pub struct IdleTimeout {
    duration: Duration,
    events: Sender<SessionEvent>,
    pending: Option<PendingTimeout>,
    next_generation: u64,
}

impl IdleTimeout {
    pub fn new(duration: Duration, events: Sender<SessionEvent>) -> Self {
        Self {
            duration,
            events,
            pending: None,
            next_generation: 1,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.generation)
    }

    /// Starts the countdown unless one is already running. Returns whether a
    /// new countdown was started.
    pub fn arm(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }

        let generation = self.next_generation;
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let events = self.events.clone();
        let duration = self.duration;
        let spawned = thread::Builder::new()
            .name("idle-timeout".into())
            .spawn(move || match cancel_rx.recv_timeout(duration) {
                Err(RecvTimeoutError::Timeout) => {
                    let _ = events.send(SessionEvent::IdleTimeout { generation });
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
            });

        match spawned {
            Ok(_) => {
                self.next_generation += 1;
                self.pending = Some(PendingTimeout {
                    generation,
                    _cancel_tx: cancel_tx,
                });
                tracing::trace!(generation, "idle timeout armed");
                true
            }
            Err(err) => {
                tracing::error!(?err, "failed to spawn idle timeout thread");
                false
            }
        }
    }

    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                tracing::trace!(generation = pending.generation, "idle timeout cancelled");
                true
            }
            None => false,
        }
    }

    /// Clears the pending countdown if `generation` is the one that fired.
    pub fn acknowledge(&mut self, generation: u64) -> bool {
        if self.pending_generation() != Some(generation) {
            tracing::debug!(generation, "stale idle timeout ignored");
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for IdleTimeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
