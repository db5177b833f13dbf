use crate::cursor::geometry::Point;
use crate::cursor::input::{PointerPhase, PointerSample, Surface};
use crate::cursor::messages::SessionEvent;
use crate::cursor::overlay::{ActivationDispatcher, OverlaySession};
use crate::cursor::session::{CursorSession, SessionConfig};
use anyhow::{anyhow, Context, Result};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle to a running cursor session.
///
/// The session runs on its own worker thread, which is the only place overlay
/// state is touched. Dropping the handle stops the session.
pub struct SessionHandle {
    events: Sender<SessionEvent>,
    join: Option<JoinHandle<()>>,
}

/// Validates `config`, puts the pads on screen and starts the session worker.
pub fn start_session(
    config: SessionConfig,
    overlay: Box<dyn OverlaySession>,
    dispatcher: Arc<dyn ActivationDispatcher>,
) -> Result<SessionHandle> {
    config.validate()?;

    let (event_tx, event_rx) = mpsc::channel();
    let (ready_tx, ready_rx) = mpsc::channel::<Result<()>>();
    let worker_events = event_tx.clone();

    let join = thread::Builder::new()
        .name("cursor-session".into())
        .spawn(move || {
            let session = CursorSession::new(&config, overlay, dispatcher, worker_events);
            match session {
                Ok(session) => {
                    let _ = ready_tx.send(Ok(()));
                    worker_loop(session, event_rx);
                }
                Err(err) => {
                    let _ = ready_tx.send(Err(err));
                }
            }
        })
        .context("spawn cursor session worker")?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(SessionHandle {
            events: event_tx,
            join: Some(join),
        }),
        Ok(Err(err)) => {
            let _ = join.join();
            Err(err)
        }
        Err(_) => {
            let _ = join.join();
            Err(anyhow!("cursor session worker exited during startup"))
        }
    }
}

fn worker_loop(mut session: CursorSession, events: Receiver<SessionEvent>) {
    loop {
        match events.recv() {
            Ok(event) => {
                if !session.handle_event(event) {
                    break;
                }
            }
            Err(_) => {
                tracing::warn!("cursor session channel closed");
                session.shutdown();
                break;
            }
        }
    }
}

impl SessionHandle {
    pub fn is_running(&self) -> bool {
        self.join
            .as_ref()
            .map(|join| !join.is_finished())
            .unwrap_or(false)
    }

    pub fn pointer(&self, surface: Surface, sample: PointerSample) -> bool {
        self.send(SessionEvent::Pointer { surface, sample })
    }

    /// Feeds a raw screen touch through the session's input router.
    pub fn touch(&self, raw: Point, phase: PointerPhase) -> bool {
        self.send(SessionEvent::Touch { raw, phase })
    }

    /// Hides every element and waits for the worker to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn send(&self, event: SessionEvent) -> bool {
        self.events.send(event).is_ok()
    }

    fn shutdown(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = self.events.send(SessionEvent::Stop);
            if join.join().is_err() {
                tracing::error!("cursor session worker panicked");
            }
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
