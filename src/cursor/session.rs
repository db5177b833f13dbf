use crate::cursor::geometry::{ElementMetrics, Point, ScreenBounds};
use crate::cursor::input::{PointerPhase, PointerSample, Surface};
use crate::cursor::machine::GestureMachine;
use crate::cursor::messages::{CursorCommand, SessionEvent};
use crate::cursor::overlay::{ActivationDispatcher, OverlaySession, ScreenProvider};
use crate::cursor::router::InputRouter;
use crate::cursor::timeout::{IdleTimeout, IDLE_TIMEOUT};
use anyhow::{Context, Result};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub screen: ScreenBounds,
    pub metrics: ElementMetrics,
    pub idle_timeout: Duration,
}

impl SessionConfig {
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            screen,
            metrics: ElementMetrics::default(),
            idle_timeout: IDLE_TIMEOUT,
        }
    }

    /// Queries the display once; the bounds stay fixed for the session.
    pub fn from_provider(provider: &dyn ScreenProvider, metrics: ElementMetrics) -> Self {
        Self {
            metrics,
            ..Self::new(provider.screen_bounds())
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.screen.validate().context("invalid session screen")?;
        self.metrics
            .validate()
            .context("invalid session element metrics")?;
        Ok(())
    }
}

/// Owner of all overlay state. Lives on the serialized session context and
/// applies gesture commands to the overlay, the dispatcher and the idle timer.
pub struct CursorSession {
    machine: GestureMachine,
    router: InputRouter,
    overlay: Box<dyn OverlaySession>,
    dispatcher: Arc<dyn ActivationDispatcher>,
    idle: IdleTimeout,
}

impl CursorSession {
    /// `events` is the channel the session context drains; idle timeouts are
    /// posted there.
    pub fn new(
        config: &SessionConfig,
        overlay: Box<dyn OverlaySession>,
        dispatcher: Arc<dyn ActivationDispatcher>,
        events: Sender<SessionEvent>,
    ) -> Result<Self> {
        config.validate()?;

        let machine = GestureMachine::new(config.screen, config.metrics);
        let mut session = Self {
            machine,
            router: InputRouter::default(),
            overlay,
            dispatcher,
            idle: IdleTimeout::new(config.idle_timeout, events),
        };
        let startup = session.machine.startup();
        session.apply(startup);
        tracing::info!(
            width = config.screen.width,
            height = config.screen.height,
            "cursor session started"
        );
        Ok(session)
    }

    pub fn machine(&self) -> &GestureMachine {
        &self.machine
    }

    pub fn idle_pending(&self) -> bool {
        self.idle.is_pending()
    }

    /// Returns `false` once the session has been asked to stop.
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Pointer { surface, sample } => self.handle_sample(surface, sample),
            SessionEvent::Touch { raw, phase } => self.handle_touch(raw, phase),
            SessionEvent::IdleTimeout { generation } => self.handle_idle_timeout(generation),
            SessionEvent::Stop => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    pub fn handle_sample(&mut self, surface: Surface, sample: PointerSample) {
        let commands = self.machine.handle(surface, sample);
        self.apply(commands);
    }

    pub fn handle_touch(&mut self, raw: Point, phase: PointerPhase) {
        if let Some((surface, sample)) = self.router.route(&self.machine, raw, phase) {
            self.handle_sample(surface, sample);
        }
    }

    pub fn handle_idle_timeout(&mut self, generation: u64) {
        if !self.idle.acknowledge(generation) {
            return;
        }
        let commands = self.machine.on_idle_timeout();
        self.apply(commands);
    }

    pub fn shutdown(&mut self) {
        self.idle.cancel();
        let commands = self.machine.shutdown();
        self.apply(commands);
        tracing::info!("cursor session stopped");
    }

    fn apply(&mut self, commands: Vec<CursorCommand>) {
        for command in commands {
            match command {
                CursorCommand::Show(id) => {
                    if !self.overlay.is_element_visible(id) {
                        self.overlay.show_element(id);
                    }
                }
                CursorCommand::Hide(id) => {
                    if self.overlay.is_element_visible(id) {
                        self.overlay.hide_element(id);
                    }
                }
                CursorCommand::Place(id, point) => {
                    self.overlay.place_element(id, point.x, point.y);
                }
                CursorCommand::ActivateAt(point) => {
                    tracing::info!(x = point.x, y = point.y, "activating at cursor");
                    self.dispatcher.activate_at(point.x, point.y);
                }
                CursorCommand::ArmIdleTimer => {
                    self.idle.arm();
                }
                CursorCommand::CancelIdleTimer => {
                    self.idle.cancel();
                }
            }
        }
    }
}
